//! URL-safe identifiers derived from display strings.

use std::sync::LazyLock;

use regex::Regex;

static NON_SLUG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid slug pattern"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

static HYPHEN_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-{2,}").expect("valid hyphen pattern"));

// "7 Days / 6 Nights", "7 days 6 nights", "7d6n", "7D 6N"
static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d+)\s*d(?:ays?)?\s*[/,&-]?\s*(?:and\s+)?(\d+)\s*n(?:ights?)?\s*$")
        .expect("valid duration pattern")
});

/// Turn a display string into a slug.
///
/// Lowercases, drops everything except ASCII word characters, whitespace and
/// hyphens, joins words with single hyphens and trims hyphens at the edges.
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(&lowered, "");
    let hyphenated = WHITESPACE_RUNS.replace_all(&stripped, "-");
    let collapsed = HYPHEN_RUNS.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

/// Normalize a tour duration to the compact `XdYn` token.
///
/// Returns an empty string for anything that does not state both days and
/// nights.
pub fn normalize_duration(duration: &str) -> String {
    DURATION
        .captures(duration)
        .map(|caps| format!("{}d{}n", &caps[1], &caps[2]))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Goa Beach Escape"), "goa-beach-escape");
        assert_eq!(slugify("  Kerala -- Backwaters  "), "kerala-backwaters");
        assert_eq!(slugify("Rock & Roll: Ladakh!"), "rock-roll-ladakh");
        assert_eq!(slugify("snake_case stays"), "snake_case-stays");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        assert_eq!(slugify("Café Crème Tour"), "caf-crme-tour");
        assert_eq!(slugify("日本 Tour"), "tour");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_normalize_duration_forms() {
        assert_eq!(normalize_duration("7 Days / 6 Nights"), "7d6n");
        assert_eq!(normalize_duration("7 days 6 nights"), "7d6n");
        assert_eq!(normalize_duration("7d6n"), "7d6n");
        assert_eq!(normalize_duration("7D 6N"), "7d6n");
        assert_eq!(normalize_duration("1 Day / 1 Night"), "1d1n");
        assert_eq!(normalize_duration("10 days and 9 nights"), "10d9n");
    }

    #[test]
    fn test_normalize_duration_unrecognized() {
        assert_eq!(normalize_duration("a week"), "");
        assert_eq!(normalize_duration("5 Days"), "");
        assert_eq!(normalize_duration(""), "");
    }

    proptest! {
        #[test]
        fn prop_slugify_idempotent(text in "\\PC{0,40}") {
            let once = slugify(&text);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn prop_slug_has_no_edge_or_double_hyphens(text in "[ a-zA-Z0-9_&/-]{0,40}") {
            let slug = slugify(&text);
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }
    }
}
