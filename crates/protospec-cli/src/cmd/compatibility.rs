use anyhow::{bail, Result};
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use termcolor::Color;

use protospec_core::compat::{check_compatibility, CompatibilityIssue};

use crate::io::input;
use crate::output;

#[derive(Debug, Serialize)]
pub struct CompatibilityOut {
    pub base: String,
    pub target: String,
    pub issues: Vec<CompatibilityIssue>,
    pub breaking: usize,
    pub compatible: bool,
}

pub async fn run(base_arg: &str, target_arg: &str) -> Result<()> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb.set_message("resolving documents");

    let base = input::resolve_document(base_arg).await?;
    let target = input::resolve_document(target_arg).await?;

    pb.set_message("checking compatibility");
    let issues = check_compatibility(&base, &target);
    pb.finish_and_clear();

    let breaking = issues.iter().filter(|i| i.breaking).count();
    let out = CompatibilityOut {
        base: base_arg.to_string(),
        target: target_arg.to_string(),
        breaking,
        compatible: breaking == 0,
        issues,
    };

    if output::is_json() {
        output::print(&out)?;
    } else {
        print_report(&out)?;
    }

    if breaking > 0 {
        bail!("{breaking} breaking change(s) detected");
    }
    Ok(())
}

fn print_report(out: &CompatibilityOut) -> Result<()> {
    let mut stdout = output::stdout(true);

    if out.issues.is_empty() {
        output::write_line(
            &mut stdout,
            Some(Color::Green),
            false,
            "✓ No compatibility issues found",
        )?;
        return Ok(());
    }

    output::write_line(
        &mut stdout,
        Some(Color::Red),
        true,
        &format!("✗ Found {} compatibility issue(s):", out.issues.len()),
    )?;

    for issue in &out.issues {
        let (sign, color) = if issue.breaking {
            ("✗", Color::Red)
        } else {
            ("⚠", Color::Yellow)
        };
        output::write_line(
            &mut stdout,
            Some(color),
            false,
            &format!("  {sign} {}: {}", issue.kind.as_str(), issue.message),
        )?;
    }
    Ok(())
}
