use chrono::Local;
use tracing::{info, warn};

use super::App;
use crate::api::Transport;

impl<T: Transport> App<T> {
    /// Runs on startup and on every "Get News": source options (cached), then headlines.
    pub async fn get_news(&mut self) {
        self.refresh_sources().await;
        self.refresh_news().await;
    }

    /// Served from the catalog cache while it is fresh.
    pub async fn refresh_sources(&mut self) {
        self.sources = self.catalog.fetch(&self.client).await;
        self.source_cursor = 0;
    }

    /// "Get News": replace the article list with a fresh fetch for the current filters.
    pub async fn refresh_news(&mut self) {
        self.loading = true;
        let query = self.filter.to_query();
        match self.client.fetch_headlines(&query).await {
            Ok(articles) => {
                info!(count = articles.len(), "article list replaced");
                self.articles = articles;
                self.status_message = None;
            }
            Err(e) => {
                warn!(error = %e, "headline fetch failed");
                self.articles = Vec::new();
                self.status_message = Some(e.to_string());
            }
        }
        self.selected_index = 0;
        self.last_updated = Some(Local::now().format("%Y-%m-%d %H:%M:%S").to_string());
        self.loading = false;
    }
}
