//! Algebraic laws of the line-diff engine, checked over random inputs.
//!
//! The engine must be total: any pair of line sequences yields aligned,
//! equal-length columns whose non-placeholder rows account for every input
//! line, with stats that behave like set arithmetic around the LCS.

use proptest::prelude::*;

use protospec_core::diff::{diff_lines, DiffKind, DiffStats};

fn lines() -> impl Strategy<Value = Vec<String>> {
    // Small alphabet so sequences share lines often enough to exercise the
    // alignment paths, not just the all-added/all-removed tails.
    prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "d", ""]), 0..24)
        .prop_map(|v| v.into_iter().map(str::to_string).collect())
}

proptest! {
    #[test]
    fn identity(x in lines()) {
        let d = diff_lines(&x, &x);
        prop_assert_eq!(
            d.stats,
            DiffStats { added: 0, removed: 0, unchanged: x.len() }
        );
        prop_assert!(d.left_lines.iter().all(|l| l.kind == DiffKind::Unchanged));
        prop_assert!(d.right_lines.iter().all(|l| l.kind == DiffKind::Unchanged));
    }

    #[test]
    fn symmetry(a in lines(), b in lines()) {
        let ab = diff_lines(&a, &b);
        let ba = diff_lines(&b, &a);
        prop_assert_eq!(ab.stats.added, ba.stats.removed);
        prop_assert_eq!(ab.stats.removed, ba.stats.added);
        prop_assert_eq!(ab.stats.unchanged, ba.stats.unchanged);
    }

    #[test]
    fn totality(a in lines(), b in lines()) {
        let d = diff_lines(&a, &b);

        prop_assert_eq!(d.left_lines.len(), d.right_lines.len());

        let left_real = d.left_lines.iter().filter(|l| l.kind != DiffKind::Empty).count();
        let right_real = d.right_lines.iter().filter(|l| l.kind != DiffKind::Empty).count();
        prop_assert_eq!(left_real, a.len());
        prop_assert_eq!(right_real, b.len());

        prop_assert_eq!(d.stats.removed + d.stats.unchanged, a.len());
        prop_assert_eq!(d.stats.added + d.stats.unchanged, b.len());
    }

    #[test]
    fn line_numbers_are_consecutive_per_side(a in lines(), b in lines()) {
        let d = diff_lines(&a, &b);

        let mut expected = 1u32;
        for l in &d.left_lines {
            if l.kind != DiffKind::Empty {
                prop_assert_eq!(l.line_number, expected);
                expected += 1;
            }
        }

        let mut expected = 1u32;
        for l in &d.right_lines {
            if l.kind != DiffKind::Empty {
                prop_assert_eq!(l.line_number, expected);
                expected += 1;
            }
        }
    }

    #[test]
    fn unchanged_rows_agree_on_both_sides(a in lines(), b in lines()) {
        let d = diff_lines(&a, &b);
        for (l, r) in d.left_lines.iter().zip(d.right_lines.iter()) {
            if l.kind == DiffKind::Unchanged {
                prop_assert_eq!(r.kind, DiffKind::Unchanged);
                prop_assert_eq!(&l.content, &r.content);
            }
        }
    }
}
