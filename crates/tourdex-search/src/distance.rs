//! Edit distance between strings.
//!
//! Plain Levenshtein over Unicode scalar values with unit costs for insertion,
//! deletion and substitution. No length cap: the index holds tens of
//! documents, so the O(nm) table stays small.

/// Minimum number of single-character edits turning `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b_chars.len();
    }

    // Two-row DP: `row[j]` holds the distance between the processed prefix of
    // `a` and the first `j` characters of `b`.
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(ac != bc);
            row[j + 1] = (above + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = above;
        }
    }

    row[b_chars.len()]
}

/// Edit distance between `query` and the leading characters of `title`
/// covering the same number of characters as the query.
pub fn prefix_distance(query: &str, title: &str) -> usize {
    let query_len = query.chars().count();
    let prefix_end = title
        .char_indices()
        .nth(query_len)
        .map_or(title.len(), |(idx, _)| idx);
    edit_distance(query, &title[..prefix_end])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(edit_distance("goa", "goa"), 0);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn test_against_empty() {
        assert_eq!(edit_distance("", "kerala"), 6);
        assert_eq!(edit_distance("kerala", ""), 6);
    }

    #[test]
    fn test_classic_cases() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("triangel", "triangle"), 2);
        assert_eq!(edit_distance("munar", "munnar"), 1);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(edit_distance("café", "cafe"), 1);
        assert_eq!(edit_distance("ऋषिकेश", "ऋषिकेश"), 0);
    }

    #[test]
    fn test_prefix_distance() {
        assert_eq!(prefix_distance("goa", "goa beach escape"), 0);
        assert_eq!(prefix_distance("gao", "goa beach escape"), 2);
        assert_eq!(prefix_distance("kerla", "kerala backwaters"), 2);
        // title shorter than the query
        assert_eq!(prefix_distance("andaman islands", "andaman"), 8);
    }

    proptest! {
        #[test]
        fn prop_symmetric(a in "\\PC{0,12}", b in "\\PC{0,12}") {
            prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        }

        #[test]
        fn prop_zero_on_self(a in "\\PC{0,20}") {
            prop_assert_eq!(edit_distance(&a, &a), 0);
        }

        #[test]
        fn prop_bounded_by_longer_length(a in "[a-z]{0,12}", b in "[a-z]{0,12}") {
            let d = edit_distance(&a, &b);
            prop_assert!(d <= a.len().max(b.len()));
            prop_assert!(d >= a.len().abs_diff(b.len()));
        }
    }
}
