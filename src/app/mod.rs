mod filter;
mod news;

pub use filter::FilterState;

use crate::api::{Article, HttpTransport, NewsClient, SourceCatalog, SourceListing, Transport};
use crate::config::{API_KEY_ENV, Config};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Keyword,
    SourcePicker,
    ArticleDetail,
    Help,
}

pub struct App<T = HttpTransport> {
    pub config: Config,
    pub filter: FilterState,
    pub articles: Vec<Article>,
    pub sources: SourceListing,
    pub selected_index: usize,
    pub source_cursor: usize,
    pub detail_scroll: usize,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub status_message: Option<String>,
    pub loading: bool,
    pub last_updated: Option<String>,
    catalog: SourceCatalog,
    client: NewsClient<T>,
}

impl App<HttpTransport> {
    /// Load the config file and credential, failing if no API key is set.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        let api_key = config.resolve_api_key(std::env::var(API_KEY_ENV).ok())?;
        let transport = HttpTransport::new(&config.base_url)?;
        Ok(Self::with_transport(config, api_key, transport))
    }
}

impl<T: Transport> App<T> {
    pub fn with_transport(config: Config, api_key: String, transport: T) -> Self {
        let client = NewsClient::new(transport, api_key, config.language.clone());
        let catalog = SourceCatalog::new(config.sources_cache_ttl());
        let filter = FilterState::new(config.default_category);
        Self {
            config,
            filter,
            articles: Vec::new(),
            sources: SourceListing::Fetched(Vec::new()),
            selected_index: 0,
            source_cursor: 0,
            detail_scroll: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            status_message: None,
            loading: false,
            last_updated: None,
            catalog,
            client,
        }
    }

    pub fn client(&self) -> &NewsClient<T> {
        &self.client
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected_index)
    }

    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        let len = self.articles.len();
        if len > 0 && self.selected_index < len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn show_article_detail(&mut self) {
        if self.selected_article().is_some() {
            self.detail_scroll = 0;
            self.input_mode = InputMode::ArticleDetail;
        }
    }

    pub fn close_article_detail(&mut self) {
        self.detail_scroll = 0;
        self.input_mode = InputMode::Normal;
    }

    pub fn scroll_detail_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    // Clamped to the content height when drawn.
    pub fn scroll_detail_down(&mut self) {
        self.detail_scroll += 1;
    }

    pub fn show_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Normal;
    }
}
