use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use termcolor::Color;

use protospec_core::diff::{diff_text, DiffKind, LineDiff};
use protospec_core::generate::generate;
use protospec_core::render::{html, text};

use crate::io::{export, input};
use crate::output;

pub async fn run(
    left_arg: &str,
    right_arg: &str,
    format: &str,
    output_path: Option<&str>,
    no_color: bool,
) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb.set_message("resolving documents");

    let left_doc = input::resolve_document(left_arg).await?;
    let right_doc = input::resolve_document(right_arg).await?;

    pb.set_message("diffing");
    let left_text = generate(&left_doc);
    let right_text = generate(&right_doc);
    let diff = diff_text(&left_text, &right_text);
    pb.finish_and_clear();

    match format {
        "json" => {
            let mut rendered = serde_json::to_string_pretty(&diff)?;
            rendered.push('\n');
            export::write_output(output_path, &rendered)
        }
        "html" => {
            let rendered = html::render_html(&diff, left_arg, right_arg);
            export::write_output(output_path, &rendered)
        }
        "diff" => {
            if output::is_json() {
                return output::print(&diff);
            }
            if let Some(path) = output_path {
                let mut rendered = unified_header(&diff, left_arg, right_arg);
                rendered.push_str(&text::render_unified(&diff));
                return export::write_output(Some(path), &rendered);
            }
            print_colored_diff(&diff, left_arg, right_arg, !no_color)
        }
        other => Err(anyhow!("unknown format: {other} (expected diff|json|html)")),
    }
}

fn unified_header(diff: &LineDiff, left_title: &str, right_title: &str) -> String {
    format!(
        "--- {left_title}\n+++ {right_title}\n@@ Changes: +{} -{} @@\n\n",
        diff.stats.added, diff.stats.removed
    )
}

fn print_colored_diff(
    diff: &LineDiff,
    left_title: &str,
    right_title: &str,
    color: bool,
) -> Result<()> {
    let mut stdout = output::stdout(color);

    output::write_line(&mut stdout, None, true, &format!("--- {left_title}"))?;
    output::write_line(&mut stdout, None, true, &format!("+++ {right_title}"))?;
    output::write_line(
        &mut stdout,
        None,
        false,
        &format!(
            "@@ Changes: +{} -{} @@\n",
            diff.stats.added, diff.stats.removed
        ),
    )?;

    for row in text::unified_rows(diff) {
        let color = match row.kind {
            DiffKind::Removed => Some(Color::Red),
            DiffKind::Added => Some(Color::Green),
            _ => None,
        };
        output::write_line(&mut stdout, color, false, &row.text)?;
    }

    output::write_line(&mut stdout, None, true, "\nSummary:")?;
    output::write_line(
        &mut stdout,
        Some(Color::Green),
        false,
        &format!("  Added lines: {}", diff.stats.added),
    )?;
    output::write_line(
        &mut stdout,
        Some(Color::Red),
        false,
        &format!("  Removed lines: {}", diff.stats.removed),
    )?;
    output::write_line(
        &mut stdout,
        None,
        false,
        &format!("  Unchanged lines: {}", diff.stats.unchanged),
    )?;
    Ok(())
}
