use news_explorer::api::{Category, HeadlineQuery};
use std::collections::BTreeSet;

fn ids(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn keys(query: &HeadlineQuery) -> Vec<&'static str> {
    query.params().into_iter().map(|(k, _)| k).collect()
}

fn value(query: &HeadlineQuery, key: &str) -> Option<String> {
    query
        .params()
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

// --- source ids override category ---

#[test]
fn test_sources_branch_never_has_category() {
    for category in Category::ALL {
        let query = HeadlineQuery::new(category, None, ids(&["bbc-news"]));
        assert!(!keys(&query).contains(&"category"), "{category} leaked into sources query");
        assert_eq!(value(&query, "sources").as_deref(), Some("bbc-news"));
    }
}

#[test]
fn test_sources_are_comma_joined() {
    let query = HeadlineQuery::new(Category::Sports, None, ids(&["the-verge", "abc-news", "bbc-news"]));
    assert_eq!(
        value(&query, "sources").as_deref(),
        Some("abc-news,bbc-news,the-verge")
    );
}

#[test]
fn test_empty_sources_uses_category() {
    for category in Category::ALL {
        let query = HeadlineQuery::new(category, None, BTreeSet::new());
        assert_eq!(value(&query, "category").as_deref(), Some(category.as_str()));
        assert!(!keys(&query).contains(&"sources"));
    }
}

// --- keyword ---

#[test]
fn test_keyword_added_in_category_branch() {
    let query = HeadlineQuery::new(Category::Health, Some("vaccine".to_string()), BTreeSet::new());
    assert_eq!(keys(&query), vec!["category", "q"]);
    assert_eq!(value(&query, "q").as_deref(), Some("vaccine"));
}

#[test]
fn test_keyword_added_in_sources_branch() {
    let query = HeadlineQuery::new(Category::Health, Some("rust".to_string()), ids(&["ars-technica"]));
    assert_eq!(keys(&query), vec!["sources", "q"]);
}

#[test]
fn test_empty_keyword_omitted() {
    let query = HeadlineQuery::new(Category::General, Some(String::new()), BTreeSet::new());
    assert_eq!(keys(&query), vec!["category"]);
}

#[test]
fn test_whitespace_keyword_sent_verbatim() {
    let query = HeadlineQuery::new(Category::General, Some("   ".to_string()), BTreeSet::new());
    assert_eq!(value(&query, "q").as_deref(), Some("   "));
}

#[test]
fn test_padded_keyword_not_trimmed() {
    let query = HeadlineQuery::new(Category::General, Some(" rust ".to_string()), ids(&["the-verge"]));
    assert_eq!(value(&query, "q").as_deref(), Some(" rust "));
}

#[test]
fn test_credential_not_part_of_filter_params() {
    let query = HeadlineQuery::default();
    assert!(!keys(&query).contains(&"apiKey"));
    assert_eq!(value(&query, "category").as_deref(), Some("general"));
}

// --- Category ---

#[test]
fn test_category_default_is_general() {
    assert_eq!(Category::default(), Category::General);
}

#[test]
fn test_category_cycle_wraps() {
    assert_eq!(Category::Technology.next(), Category::Business);
    assert_eq!(Category::Business.prev(), Category::Technology);
    assert_eq!(Category::General.next(), Category::Health);
}

#[test]
fn test_category_from_str() {
    assert_eq!("Science".parse::<Category>(), Ok(Category::Science));
    assert_eq!(" sports ".parse::<Category>(), Ok(Category::Sports));
    assert!("weather".parse::<Category>().is_err());
}

#[test]
fn test_category_serde_lowercase() {
    let json = serde_json::to_string(&Category::Entertainment).unwrap();
    assert_eq!(json, "\"entertainment\"");
    let back: Category = serde_json::from_str("\"technology\"").unwrap();
    assert_eq!(back, Category::Technology);
}
