//! Property tests for the query engine.

use proptest::prelude::*;
use tourdex_core::{FaqRecord, RoutesConfig, SiteConfig, SourceCollections, TourRecord};
use tourdex_search::{IndexBuilder, Relevance, SearchIndex, SearchResults};

fn build_index(tours: &[String], questions: &[String]) -> SearchIndex {
    let collections = SourceCollections {
        tours: tours
            .iter()
            .map(|name| TourRecord {
                id: None,
                name: name.clone(),
                duration: None,
                destination: None,
                price: None,
                highlights: Vec::new(),
                description: None,
            })
            .collect(),
        faqs: questions
            .iter()
            .map(|q| FaqRecord {
                q: q.clone(),
                a: String::new(),
            })
            .collect(),
        ..SourceCollections::default()
    };

    IndexBuilder::new(
        SiteConfig::new("Prop Travels", "https://prop.example"),
        RoutesConfig::default(),
    )
    .build(&collections)
}

fn position(index: &SearchIndex, hit: &tourdex_search::ScoredDocument<'_>) -> usize {
    index
        .documents()
        .iter()
        .position(|doc| std::ptr::eq(doc.document(), hit.document))
        .expect("result must come from the index")
}

fn check_ordering(index: &SearchIndex, results: &SearchResults<'_>) -> Result<(), TestCaseError> {
    for pair in results.exact.windows(2) {
        let (Relevance::Score(a), Relevance::Score(b)) = (pair[0].relevance, pair[1].relevance)
        else {
            return Err(TestCaseError::fail("exact hits must carry scores"));
        };
        prop_assert!(a >= b);
        if a == b {
            prop_assert!(position(index, &pair[0]) < position(index, &pair[1]));
        }
    }

    for pair in results.nearest.windows(2) {
        let (Relevance::Distance(a), Relevance::Distance(b)) =
            (pair[0].relevance, pair[1].relevance)
        else {
            return Err(TestCaseError::fail("suggestions must carry distances"));
        };
        prop_assert!(a <= b);
        if a == b {
            prop_assert!(position(index, &pair[0]) < position(index, &pair[1]));
        }
    }

    Ok(())
}

proptest! {
    #[test]
    fn prop_short_queries_are_empty(query in "\\s{0,3}[a-z]?\\s{0,3}") {
        let index = build_index(&["Goa Beach Escape".to_string()], &[]);
        prop_assert!(index.search(&query).is_empty());
    }

    #[test]
    fn prop_exactly_one_side(
        tours in prop::collection::vec("[A-Za-z ]{1,24}", 0..12),
        questions in prop::collection::vec("[A-Za-z ?]{1,30}", 0..6),
        query in "[a-z]{2,10}",
    ) {
        let index = build_index(&tours, &questions);
        let results = index.search(&query);

        prop_assert!(results.exact.is_empty() != results.nearest.is_empty());
        prop_assert!(results.exact.len() <= 8);
        prop_assert!(results.nearest.len() <= 3);
    }

    #[test]
    fn prop_results_ordered(
        tours in prop::collection::vec("[a-z]{2,6}( [a-z]{2,6}){0,2}", 0..16),
        query in "[a-z]{2,5}",
    ) {
        let index = build_index(&tours, &[]);
        let results = index.search(&query);

        for hit in &results.exact {
            match hit.relevance {
                Relevance::Score(score) => prop_assert!(score >= 30),
                Relevance::Distance(_) => prop_assert!(false, "exact hit without a score"),
            }
        }
        check_ordering(&index, &results)?;
    }

    #[test]
    fn prop_search_is_deterministic(
        tours in prop::collection::vec("[a-z ]{2,20}", 0..10),
        query in "[a-z ]{0,8}",
    ) {
        let index = build_index(&tours, &[]);
        prop_assert_eq!(index.search(&query), index.search(&query));
    }
}

#[test]
fn test_empty_index_returns_nothing() {
    let index = SearchIndex::default();
    assert!(index.search("kerala").is_empty());
}
