#![allow(dead_code)]

use news_explorer::api::{Article, HttpResponse, Transport};
use news_explorer::app::App;
use news_explorer::config::Config;
use news_explorer::error::NewsError;
use std::cell::RefCell;
use std::collections::HashMap;

/// One recorded GET: path plus query parameters in send order.
#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Call {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.param(key).is_some()
    }
}

/// In-memory transport: canned responses per path, every call recorded.
#[derive(Default)]
pub struct FakeTransport {
    responses: RefCell<HashMap<String, HttpResponse>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path: &str, status: u16, body: &str) -> Self {
        self.set_response(path, status, body);
        self
    }

    pub fn set_response(&self, path: &str, status: u16, body: &str) {
        self.responses.borrow_mut().insert(
            path.to_string(),
            HttpResponse {
                status,
                body: body.to_string(),
            },
        );
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn calls_to(&self, path: &str) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| c.path == path)
            .cloned()
            .collect()
    }
}

impl Transport for FakeTransport {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse, NewsError> {
        self.calls.borrow_mut().push(Call {
            path: path.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        });
        Ok(self
            .responses
            .borrow()
            .get(path)
            .cloned()
            .unwrap_or(HttpResponse {
                status: 404,
                body: r#"{"status":"error","code":"notFound"}"#.to_string(),
            }))
    }
}

pub const SOURCES_PATH: &str = "/v2/sources";
pub const HEADLINES_PATH: &str = "/v2/top-headlines";

pub const SOURCES_BODY: &str = r#"{
    "status": "ok",
    "sources": [
        {"id": "the-verge", "name": "The Verge", "category": "technology", "language": "en"},
        {"id": "abc-news", "name": "ABC News", "category": "general", "language": "en"},
        {"id": "bbc-news", "name": "BBC News", "category": "general", "language": "en"},
        {"id": "ars-technica", "name": "Ars Technica", "category": "technology", "language": "en"}
    ]
}"#;

pub const HEADLINES_BODY: &str = r#"{
    "status": "ok",
    "totalResults": 2,
    "articles": [
        {
            "source": {"id": "bbc-news", "name": "BBC News"},
            "author": "BBC",
            "title": "Second by time, first by order",
            "description": "Provider order wins",
            "url": "https://example.com/2",
            "urlToImage": null,
            "publishedAt": "2024-03-01T08:00:00Z",
            "content": null
        },
        {
            "source": {"id": null, "name": "Example"},
            "author": null,
            "title": "Newer story",
            "description": null,
            "url": "https://example.com/1",
            "urlToImage": "https://example.com/1.jpg",
            "publishedAt": "2024-03-01T12:30:00Z",
            "content": null
        }
    ]
}"#;

pub fn make_article(title: &str, published_at: Option<&str>) -> Article {
    Article {
        title: title.to_string(),
        url: format!("https://example.com/{}", title.to_lowercase().replace(' ', "-")),
        published_at: published_at.map(str::to_string),
        ..Article::default()
    }
}

pub fn fake_transport() -> FakeTransport {
    FakeTransport::new()
        .respond(SOURCES_PATH, 200, SOURCES_BODY)
        .respond(HEADLINES_PATH, 200, HEADLINES_BODY)
}

// App wired to an in-memory transport (no file I/O, no network).
pub fn test_app_with(transport: FakeTransport) -> App<FakeTransport> {
    App::with_transport(Config::test_config(), "test-key".to_string(), transport)
}

pub fn test_app() -> App<FakeTransport> {
    test_app_with(fake_transport())
}
