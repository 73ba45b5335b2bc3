//! Rendering helpers: match highlighting and excerpt snippets.

use std::ops::Range;

/// Characters of context kept before a match deep inside the text.
const SNIPPET_CONTEXT: usize = 50;

/// Byte ranges of every case-insensitive, non-overlapping occurrence of
/// `query` in `text`.
pub fn highlight_ranges(text: &str, query: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = query.trim().chars().collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let haystack: Vec<(usize, char)> = text.char_indices().collect();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i + needle.len() <= haystack.len() {
        let hit = needle
            .iter()
            .zip(&haystack[i..])
            .all(|(q, (_, t))| same_ignoring_case(*q, *t));

        if hit {
            let start = haystack[i].0;
            let (last_idx, last_char) = haystack[i + needle.len() - 1];
            ranges.push(start..last_idx + last_char.len_utf8());
            i += needle.len();
        } else {
            i += 1;
        }
    }

    ranges
}

fn same_ignoring_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Cut a window of at most `max_chars` characters out of `text` around the
/// first occurrence of `query`.
///
/// Returns `None` when either input is empty. The window starts at the
/// beginning of the text unless the match lies deeper than the context
/// allowance, in which case it starts at the matched word. Ellipses mark
/// trimmed ends.
pub fn snippet(text: &str, query: &str, max_chars: usize) -> Option<String> {
    if text.trim().is_empty() || query.trim().is_empty() || max_chars == 0 {
        return None;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let match_byte = highlight_ranges(text, query)
        .first()
        .map_or(0, |range| range.start);
    let match_char = chars
        .iter()
        .position(|(idx, _)| *idx == match_byte)
        .unwrap_or(0);

    let start = if match_char > SNIPPET_CONTEXT {
        chars[..match_char]
            .iter()
            .rposition(|(_, c)| c.is_whitespace())
            .map_or(match_char - SNIPPET_CONTEXT, |pos| pos + 1)
    } else {
        0
    };

    let mut end = (start + max_chars).min(chars.len());
    if end < chars.len() {
        if let Some(pos) = chars[start..end].iter().rposition(|(_, c)| c.is_whitespace()) {
            if pos > 0 {
                end = start + pos;
            }
        }
    }

    let byte_at = |char_idx: usize| chars.get(char_idx).map_or(text.len(), |(idx, _)| *idx);
    let mut out = text[byte_at(start)..byte_at(end)].trim().to_string();

    if start > 0 {
        out = format!("...{out}");
    }
    if end < chars.len() {
        out = format!("{out}...");
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_case_insensitive() {
        let text = "Goa, GOA and goa";
        let ranges = highlight_ranges(text, "goa");
        assert_eq!(ranges, vec![0..3, 5..8, 13..16]);
        for range in ranges {
            assert!(text[range].eq_ignore_ascii_case("goa"));
        }
    }

    #[test]
    fn test_highlight_multibyte() {
        let text = "Café Île tour";
        let ranges = highlight_ranges(text, "île");
        assert_eq!(ranges.len(), 1);
        assert_eq!(&text[ranges[0].clone()], "Île");
    }

    #[test]
    fn test_highlight_non_overlapping() {
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![0..2, 2..4]);
        assert!(highlight_ranges("anything", "  ").is_empty());
        assert!(highlight_ranges("ab", "abc").is_empty());
    }

    #[test]
    fn test_snippet_short_text_untouched() {
        let snip = snippet("Houseboat cruise on the backwaters", "cruise", 150);
        assert_eq!(snip.as_deref(), Some("Houseboat cruise on the backwaters"));
    }

    #[test]
    fn test_snippet_deep_match() {
        let text = "Our team has planned trips across the subcontinent for twenty years and \
                    knows every corner of Rajasthan, from Jaipur to Jaisalmer.";
        let snip = snippet(text, "rajasthan", 40).unwrap();
        assert!(snip.starts_with("..."));
        assert!(snip.to_lowercase().contains("rajasthan"));
    }

    #[test]
    fn test_snippet_truncates_at_word() {
        let text = "Visa assistance for Schengen, UK and US applications with document checks";
        let snip = snippet(text, "visa", 20).unwrap();
        assert_eq!(snip, "Visa assistance for...");
    }

    #[test]
    fn test_snippet_empty_inputs() {
        assert!(snippet("", "goa", 50).is_none());
        assert!(snippet("Goa", "", 50).is_none());
        assert!(snippet("Goa", "goa", 0).is_none());
    }
}
