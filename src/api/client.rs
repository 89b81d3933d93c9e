use super::headlines::HeadlineQuery;
use super::models::{Article, HeadlinesResponse, Source, SourcesResponse};
use super::transport::Transport;
use crate::error::NewsError;
use tracing::{info, warn};

const SOURCES_PATH: &str = "/v2/sources";
const HEADLINES_PATH: &str = "/v2/top-headlines";

pub struct NewsClient<T> {
    transport: T,
    api_key: String,
    language: String,
}

impl<T: Transport> NewsClient<T> {
    pub fn new(transport: T, api_key: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            transport,
            api_key: api_key.into(),
            language: language.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Every source the provider lists for the configured language, sorted by name.
    pub async fn fetch_sources(&self) -> Result<Vec<Source>, NewsError> {
        let params = [
            ("apiKey", self.api_key.clone()),
            ("language", self.language.clone()),
        ];
        let resp = self.transport.get(SOURCES_PATH, &params).await?;
        if !resp.is_ok() {
            return Err(NewsError::SourceFetch {
                status: resp.status,
                body: resp.body,
            });
        }
        let mut sources = serde_json::from_str::<SourcesResponse>(&resp.body)?.sources;
        // stable, so equal names keep provider order
        sources.sort_by(|a, b| a.name.cmp(&b.name));
        info!(count = sources.len(), "fetched source list");
        Ok(sources)
    }

    /// Top headlines matching `query`, in the order the provider returned them.
    pub async fn fetch_headlines(&self, query: &HeadlineQuery) -> Result<Vec<Article>, NewsError> {
        let mut params = vec![("apiKey", self.api_key.clone())];
        params.extend(query.params());
        let resp = self.transport.get(HEADLINES_PATH, &params).await?;
        if !resp.is_ok() {
            warn!(status = resp.status, "headline request rejected");
            return Err(NewsError::HeadlineFetch {
                status: resp.status,
                body: resp.body,
            });
        }
        let articles = serde_json::from_str::<HeadlinesResponse>(&resp.body)?
            .articles
            .unwrap_or_default();
        info!(
            count = articles.len(),
            category = %query.category,
            sources = query.source_ids.len(),
            "fetched headlines"
        );
        Ok(articles)
    }
}
