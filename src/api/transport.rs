use crate::error::NewsError;
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://newsapi.org";

/// Status and raw body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Issues GET requests against the provider.
///
/// `path` is relative to the provider root (e.g. `/v2/sources`). Any status
/// code is a successful call; only requests that never got a response fail.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse, NewsError>;
}

/// [`Transport`] over a shared `reqwest` client.
///
/// No timeout is configured; requests run until the client default gives up.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, NewsError> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &[(&str, String)]) -> Result<HttpResponse, NewsError> {
        let url = format!("{}{}", self.base_url, path);
        // the query string carries the API key; keep it out of error text
        let resp = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(reqwest::Error::without_url)?;
        debug!(%url, status, bytes = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}
