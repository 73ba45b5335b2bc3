//! Search command - query the site index

use std::{fmt::Write as _, path::Path};

use color_eyre::eyre::{Result, WrapErr};
use tourdex_search::{
    Relevance, ScoredDocument, SearchOptions, SearchResults, is_searchable, snippet,
};

/// Characters of excerpt shown under each hit.
const SNIPPET_CHARS: usize = 120;

/// Run the search command.
pub async fn run(config_path: &Path, query: &str, json: bool) -> Result<()> {
    tracing::info!(?config_path, query, "Searching site");

    let (config, index) = super::load_index(config_path).await?;
    let options = SearchOptions::from(&config.search);
    let results = index.search_with(query, &options);

    if json {
        let out =
            serde_json::to_string_pretty(&results).wrap_err("Failed to serialize results")?;
        println!("{out}");
    } else {
        print!("{}", render(&results, &options));
    }

    Ok(())
}

/// Render results for the terminal.
pub fn render(results: &SearchResults<'_>, options: &SearchOptions) -> String {
    let mut out = String::new();

    if !is_searchable(&results.query, options) {
        let _ = writeln!(
            out,
            "Type at least {} characters to search.",
            options.min_query_len
        );
        return out;
    }

    if !results.exact.is_empty() {
        let _ = writeln!(
            out,
            "{} result(s) for \"{}\":",
            results.exact.len(),
            results.query
        );
        for hit in &results.exact {
            render_hit(&mut out, hit, &results.query);
        }
    } else if !results.nearest.is_empty() {
        let _ = writeln!(out, "No results for \"{}\". Did you mean:", results.query);
        for hit in &results.nearest {
            render_hit(&mut out, hit, &results.query);
        }
    } else {
        let _ = writeln!(out, "Nothing is indexed yet.");
    }

    out
}

fn render_hit(out: &mut String, hit: &ScoredDocument<'_>, query: &str) {
    let doc = hit.document;
    let relevance = match hit.relevance {
        Relevance::Score(score) => format!("score {score}"),
        Relevance::Distance(distance) => format!("distance {distance}"),
    };

    let _ = writeln!(out);
    let _ = writeln!(out, "  {} {} [{}, {relevance}]", doc.icon, doc.title, doc.kind);

    let details: Vec<&str> = [
        doc.destination.as_deref(),
        doc.duration.as_deref(),
        doc.price.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        let _ = writeln!(out, "    {}", details.join(" · "));
    }

    if let Some(text) = snippet(&doc.excerpt, query, SNIPPET_CHARS) {
        let _ = writeln!(out, "    {text}");
    }
    let _ = writeln!(out, "    {}", doc.url);
}

#[cfg(test)]
mod tests {
    use tourdex_search::{Document, DocumentKind, SearchIndex};

    use super::*;

    fn index() -> SearchIndex {
        SearchIndex::new(vec![
            Document::new(DocumentKind::Tour, "Kerala Backwaters", "https://x.example/t/kerala")
                .with_excerpt("Houseboat stay and Munnar tea gardens")
                .with_destination(Some("Kerala".to_string()))
                .with_duration(Some("6 Days / 5 Nights".to_string())),
            Document::new(DocumentKind::Page, "Contact Us", "https://x.example/contact.html"),
        ])
    }

    #[test]
    fn test_render_exact() {
        let index = index();
        let options = SearchOptions::default();
        let out = render(&index.search_with("kerala", &options), &options);

        assert!(out.starts_with("1 result(s) for \"kerala\":"));
        assert!(out.contains("Kerala Backwaters [tour, score"));
        assert!(out.contains("Kerala · 6 Days / 5 Nights"));
        assert!(out.contains("https://x.example/t/kerala"));
    }

    #[test]
    fn test_render_suggestions() {
        let index = index();
        let options = SearchOptions::default();
        let out = render(&index.search_with("zanzibar", &options), &options);

        assert!(out.starts_with("No results for \"zanzibar\". Did you mean:"));
        assert!(out.contains("distance"));
    }

    #[test]
    fn test_render_short_query() {
        let index = index();
        let options = SearchOptions::default();
        let out = render(&index.search_with("k", &options), &options);
        assert_eq!(out, "Type at least 2 characters to search.\n");
    }

    #[test]
    fn test_render_empty_index() {
        let index = SearchIndex::default();
        let options = SearchOptions::default();
        let out = render(&index.search_with("kerala", &options), &options);
        assert_eq!(out, "Nothing is indexed yet.\n");
    }
}
