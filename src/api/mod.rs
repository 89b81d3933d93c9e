pub mod cache;
pub mod client;
pub mod headlines;
pub mod models;
pub mod sources;
pub mod transport;

pub use cache::TtlCache;
pub use client::NewsClient;
pub use headlines::{Category, HeadlineQuery};
pub use models::{Article, ArticleSource, Source};
pub use sources::{SourceCatalog, SourceListing, DEFAULT_SOURCES_TTL};
pub use transport::{HttpResponse, HttpTransport, Transport, DEFAULT_BASE_URL};
