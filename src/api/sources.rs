use super::cache::TtlCache;
use super::client::NewsClient;
use super::models::Source;
use super::transport::Transport;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_SOURCES_TTL: Duration = Duration::from_secs(3600);

/// Outcome of a source-list fetch.
///
/// Both variants render as a list of source options; `Unavailable` is
/// simply empty. The distinction is kept for callers that care why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceListing {
    Fetched(Vec<Source>),
    Unavailable { reason: String },
}

impl SourceListing {
    pub fn sources(&self) -> &[Source] {
        match self {
            SourceListing::Fetched(sources) => sources,
            SourceListing::Unavailable { .. } => &[],
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, SourceListing::Unavailable { .. })
    }

    /// Display name for `id`, if the listing knows it.
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.sources()
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.as_str())
    }
}

/// Cached view of the provider's source list.
///
/// Whatever a fetch yields, including a failed one, is reused until the TTL
/// runs out.
#[derive(Debug)]
pub struct SourceCatalog {
    cache: TtlCache<SourceListing>,
}

impl SourceCatalog {
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: TtlCache::new(ttl),
        }
    }

    pub async fn fetch<T: Transport>(&mut self, client: &NewsClient<T>) -> SourceListing {
        if let Some(listing) = self.cache.get() {
            debug!("source list served from cache");
            return listing.clone();
        }

        let listing = match client.fetch_sources().await {
            Ok(sources) => SourceListing::Fetched(sources),
            Err(e) => {
                warn!(error = %e, "source list unavailable; continuing without source options");
                SourceListing::Unavailable {
                    reason: e.to_string(),
                }
            }
        };
        debug!(ttl_secs = self.cache.ttl().as_secs(), "caching source list");
        self.cache.insert(listing).clone()
    }
}

impl Default for SourceCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCES_TTL)
    }
}
