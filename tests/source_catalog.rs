mod common;

use common::{FakeTransport, SOURCES_BODY, SOURCES_PATH};
use news_explorer::api::{NewsClient, SourceCatalog, SourceListing};
use std::time::Duration;

fn client(transport: FakeTransport) -> NewsClient<FakeTransport> {
    NewsClient::new(transport, "test-key", "en")
}

#[tokio::test]
async fn test_sources_sorted_by_name() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, SOURCES_BODY));
    let mut catalog = SourceCatalog::default();

    let listing = catalog.fetch(&client).await;
    let names: Vec<&str> = listing.sources().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["ABC News", "Ars Technica", "BBC News", "The Verge"]);
    assert!(names.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn test_sort_is_case_sensitive_and_stable() {
    let body = r#"{"sources": [
        {"id": "b", "name": "abc"},
        {"id": "a", "name": "Zed"},
        {"id": "c", "name": "Same"},
        {"id": "d", "name": "Same"}
    ]}"#;
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, body));
    let listing = SourceCatalog::default().fetch(&client).await;
    let ids: Vec<&str> = listing.sources().iter().map(|s| s.id.as_str()).collect();
    // uppercase sorts before lowercase; ties keep provider order
    assert_eq!(ids, vec!["c", "d", "a", "b"]);
}

#[tokio::test]
async fn test_request_carries_key_and_language() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, SOURCES_BODY));
    SourceCatalog::default().fetch(&client).await;

    let calls = client.transport().calls_to(SOURCES_PATH);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].param("apiKey"), Some("test-key"));
    assert_eq!(calls[0].param("language"), Some("en"));
}

#[tokio::test]
async fn test_server_error_yields_empty_listing() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 500, "Internal Server Error"));
    let listing = SourceCatalog::default().fetch(&client).await;

    assert!(listing.sources().is_empty());
    assert!(listing.is_unavailable());
    match listing {
        SourceListing::Unavailable { reason } => assert!(reason.contains("500")),
        SourceListing::Fetched(_) => panic!("expected Unavailable"),
    }
}

#[tokio::test]
async fn test_malformed_body_yields_empty_listing() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, "<html>oops</html>"));
    let listing = SourceCatalog::default().fetch(&client).await;
    assert!(listing.is_unavailable());
    assert!(listing.sources().is_empty());
}

#[tokio::test]
async fn test_empty_provider_list_is_fetched_not_unavailable() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, r#"{"sources": []}"#));
    let listing = SourceCatalog::default().fetch(&client).await;
    assert_eq!(listing, SourceListing::Fetched(Vec::new()));
}

#[tokio::test]
async fn test_second_fetch_within_ttl_is_cached() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, SOURCES_BODY));
    let mut catalog = SourceCatalog::new(Duration::from_secs(3600));

    let first = catalog.fetch(&client).await;
    let second = catalog.fetch(&client).await;

    assert_eq!(first, second);
    assert_eq!(client.transport().calls_to(SOURCES_PATH).len(), 1);
}

#[tokio::test]
async fn test_failed_fetch_is_cached_too() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 500, "boom"));
    let mut catalog = SourceCatalog::default();

    catalog.fetch(&client).await;
    client.transport().set_response(SOURCES_PATH, 200, SOURCES_BODY);
    let listing = catalog.fetch(&client).await;

    assert!(listing.is_unavailable());
    assert_eq!(client.transport().calls_to(SOURCES_PATH).len(), 1);
}

#[tokio::test]
async fn test_zero_ttl_refetches() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, SOURCES_BODY));
    let mut catalog = SourceCatalog::new(Duration::ZERO);

    catalog.fetch(&client).await;
    catalog.fetch(&client).await;

    assert_eq!(client.transport().calls_to(SOURCES_PATH).len(), 2);
}

#[tokio::test]
async fn test_name_of_looks_up_display_name() {
    let client = client(FakeTransport::new().respond(SOURCES_PATH, 200, SOURCES_BODY));
    let listing = SourceCatalog::default().fetch(&client).await;
    assert_eq!(listing.name_of("bbc-news"), Some("BBC News"));
    assert_eq!(listing.name_of("missing"), None);
}
