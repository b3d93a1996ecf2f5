//! Unified text rendering of an aligned diff.
//!
//! Each aligned row collapses to at most one output line: removals win over
//! additions, additions over unchanged rows, and placeholder-only rows are
//! dropped. Line numbers are right-aligned to 4 columns, matching the
//! terminal diff layout the rest of the tooling expects.

use crate::diff::{DiffKind, LineDiff};

/// One renderable row of a unified diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedRow {
    /// Classification driving the gutter sign (and any caller coloring).
    pub kind: DiffKind,
    /// The formatted line, gutter included.
    pub text: String,
}

/// Flatten an aligned diff into unified rows.
pub fn unified_rows(diff: &LineDiff) -> Vec<UnifiedRow> {
    let mut rows = Vec::new();

    for (left, right) in diff.left_lines.iter().zip(diff.right_lines.iter()) {
        if left.kind == DiffKind::Removed {
            rows.push(UnifiedRow {
                kind: DiffKind::Removed,
                text: format!("- {:>4} | {}", left.line_number, left.content),
            });
        } else if right.kind == DiffKind::Added {
            rows.push(UnifiedRow {
                kind: DiffKind::Added,
                text: format!("+ {:>4} | {}", right.line_number, right.content),
            });
        } else if left.kind == DiffKind::Unchanged {
            rows.push(UnifiedRow {
                kind: DiffKind::Unchanged,
                text: format!("  {:>4} | {}", left.line_number, left.content),
            });
        }
    }

    rows
}

/// Render the whole diff as uncolored unified text, one row per line.
pub fn render_unified(diff: &LineDiff) -> String {
    let mut out = String::new();
    for row in unified_rows(diff) {
        out.push_str(&row.text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff_lines;

    #[test]
    fn rows_carry_signs_and_numbers() {
        let d = diff_lines(&["a", "b", "c"], &["a", "x", "c"]);
        let rows = unified_rows(&d);
        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec![
                "     1 | a",
                "-    2 | b",
                "+    2 | x",
                "     3 | c",
            ]
        );
    }

    #[test]
    fn render_unified_ends_each_row_with_newline() {
        let d = diff_lines(&["a"], &["a"]);
        assert_eq!(render_unified(&d), "     1 | a\n");
    }

    #[test]
    fn every_non_placeholder_line_appears() {
        let d = diff_lines(&["a", "b"], &["c"]);
        let rows = unified_rows(&d);
        assert_eq!(rows.len(), 3);
    }
}
