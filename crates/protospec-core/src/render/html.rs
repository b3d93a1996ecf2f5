//! Self-contained HTML rendering of an aligned diff.
//!
//! Produces a single standalone page (inline styles, no assets) suitable for
//! file export or embedding in a report. All document-derived text is
//! HTML-escaped.

use crate::diff::{DiffKind, LineDiff};

/// Render a diff as a complete HTML page.
pub fn render_html(diff: &LineDiff, left_title: &str, right_title: &str) -> String {
    let left_title = escape_html(left_title);
    let right_title = escape_html(right_title);

    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Diff: {left_title} vs {right_title}</title>
    <style>
        body {{ font-family: 'Courier New', monospace; margin: 20px; }}
        .header {{ background: #f5f5f5; padding: 10px; margin-bottom: 20px; }}
        .diff-line {{ padding: 2px 5px; }}
        .added {{ background-color: #e6ffed; border-left: 3px solid #28a745; }}
        .removed {{ background-color: #ffeef0; border-left: 3px solid #d73a49; }}
        .unchanged {{ background-color: #f8f9fa; }}
        .line-number {{ color: #586069; margin-right: 10px; }}
    </style>
</head>
<body>
    <div class="header">
        <h2>Comparison: {left_title} &rarr; {right_title}</h2>
        <p>Added: {added} | Removed: {removed} | Unchanged: {unchanged}</p>
    </div>
    <div class="diff-content">
"#,
        added = diff.stats.added,
        removed = diff.stats.removed,
        unchanged = diff.stats.unchanged,
    );

    for (left, right) in diff.left_lines.iter().zip(diff.right_lines.iter()) {
        if left.kind == DiffKind::Removed {
            html.push_str(&format!(
                "<div class=\"diff-line removed\"><span class=\"line-number\">{}</span>- {}</div>\n",
                left.line_number,
                escape_html(&left.content)
            ));
        } else if right.kind == DiffKind::Added {
            html.push_str(&format!(
                "<div class=\"diff-line added\"><span class=\"line-number\">{}</span>+ {}</div>\n",
                right.line_number,
                escape_html(&right.content)
            ));
        } else if left.kind == DiffKind::Unchanged {
            html.push_str(&format!(
                "<div class=\"diff-line unchanged\"><span class=\"line-number\">{}</span>  {}</div>\n",
                left.line_number,
                escape_html(&left.content)
            ));
        }
    }

    html.push_str("    </div>\n</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
