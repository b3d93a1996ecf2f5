//! LCS-based line diffing.
//!
//! `diff_lines` aligns two ordered string sequences around their longest
//! common subsequence and produces two equal-length columns of `DiffLine`
//! rows, suitable for side-by-side or unified rendering. The engine is
//! generic over any line sequence; proto text is just its main customer.
//!
//! Guarantees:
//! - total: empty inputs yield an all-added / all-removed result, identical
//!   inputs an all-unchanged result
//! - both columns always have the same length; a side with no counterpart
//!   for a row carries an `Empty` placeholder
//! - line numbers are 1-based positions in each side's own input and advance
//!   only when that side consumes a line
//!
//! Complexity is O(m·n) time and space for the DP table, which is fine for
//! generated proto text of single documents.

use serde::Serialize;

/// Classification of one aligned diff row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    Added,
    Removed,
    /// Reserved for renderers that pair a removal with an addition on the
    /// same row; the engine itself emits added/removed pairs instead.
    Modified,
    Unchanged,
    Empty,
}

/// One row in an aligned diff column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: DiffKind,
    #[serde(rename = "lineNumber")]
    pub line_number: u32,
}

/// Aggregate line counts for a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
    pub unchanged: usize,
}

/// The full alignment: two equal-length columns plus counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDiff {
    pub left_lines: Vec<DiffLine>,
    pub right_lines: Vec<DiffLine>,
    pub stats: DiffStats,
}

/// Diff two texts line by line (split on `\n`).
pub fn diff_text(left: &str, right: &str) -> LineDiff {
    let left_lines: Vec<&str> = left.split('\n').collect();
    let right_lines: Vec<&str> = right.split('\n').collect();
    diff_lines(&left_lines, &right_lines)
}

/// Diff two ordered sequences of lines.
pub fn diff_lines<S: AsRef<str>>(left: &[S], right: &[S]) -> LineDiff {
    let lcs = longest_common_subsequence(left, right);

    let mut out = LineDiff {
        left_lines: Vec::new(),
        right_lines: Vec::new(),
        stats: DiffStats::default(),
    };

    let mut left_idx = 0;
    let mut right_idx = 0;
    let mut left_num: u32 = 1;
    let mut right_num: u32 = 1;

    for common in &lcs {
        // Removals since the previous common line, placeholders on the right.
        while left_idx < left.len() && left[left_idx].as_ref() != common.as_str() {
            push_pair(
                &mut out,
                DiffLine {
                    content: left[left_idx].as_ref().to_string(),
                    kind: DiffKind::Removed,
                    line_number: left_num,
                },
                DiffLine {
                    content: String::new(),
                    kind: DiffKind::Empty,
                    line_number: right_num,
                },
            );
            out.stats.removed += 1;
            left_idx += 1;
            left_num += 1;
        }

        // Additions since the previous common line, placeholders on the left.
        while right_idx < right.len() && right[right_idx].as_ref() != common.as_str() {
            push_pair(
                &mut out,
                DiffLine {
                    content: String::new(),
                    kind: DiffKind::Empty,
                    line_number: left_num,
                },
                DiffLine {
                    content: right[right_idx].as_ref().to_string(),
                    kind: DiffKind::Added,
                    line_number: right_num,
                },
            );
            out.stats.added += 1;
            right_idx += 1;
            right_num += 1;
        }

        // The common line itself.
        if left_idx < left.len() && right_idx < right.len() {
            push_pair(
                &mut out,
                DiffLine {
                    content: left[left_idx].as_ref().to_string(),
                    kind: DiffKind::Unchanged,
                    line_number: left_num,
                },
                DiffLine {
                    content: right[right_idx].as_ref().to_string(),
                    kind: DiffKind::Unchanged,
                    line_number: right_num,
                },
            );
            out.stats.unchanged += 1;
            left_idx += 1;
            right_idx += 1;
            left_num += 1;
            right_num += 1;
        }
    }

    // Tails past the last common line.
    while left_idx < left.len() {
        push_pair(
            &mut out,
            DiffLine {
                content: left[left_idx].as_ref().to_string(),
                kind: DiffKind::Removed,
                line_number: left_num,
            },
            DiffLine {
                content: String::new(),
                kind: DiffKind::Empty,
                line_number: right_num,
            },
        );
        out.stats.removed += 1;
        left_idx += 1;
        left_num += 1;
    }

    while right_idx < right.len() {
        push_pair(
            &mut out,
            DiffLine {
                content: String::new(),
                kind: DiffKind::Empty,
                line_number: left_num,
            },
            DiffLine {
                content: right[right_idx].as_ref().to_string(),
                kind: DiffKind::Added,
                line_number: right_num,
            },
        );
        out.stats.added += 1;
        right_idx += 1;
        right_num += 1;
    }

    out
}

fn push_pair(out: &mut LineDiff, left: DiffLine, right: DiffLine) {
    out.left_lines.push(left);
    out.right_lines.push(right);
}

/// Longest common subsequence of two line sequences.
///
/// Classic (m+1)x(n+1) DP table; the backtrace breaks ties by moving up,
/// attributing an ambiguous line to a left-side removal before a right-side
/// addition. Any uniform tie-break is valid; this one is kept for
/// compatibility with existing diff output.
fn longest_common_subsequence<S: AsRef<str>>(left: &[S], right: &[S]) -> Vec<String> {
    let m = left.len();
    let n = right.len();
    let mut dp = vec![vec![0usize; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if left[i - 1].as_ref() == right[j - 1].as_ref() {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }

    let mut lcs = Vec::with_capacity(dp[m][n]);
    let mut i = m;
    let mut j = n;
    while i > 0 && j > 0 {
        if left[i - 1].as_ref() == right[j - 1].as_ref() {
            lcs.push(left[i - 1].as_ref().to_string());
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    lcs.reverse();
    lcs
}
