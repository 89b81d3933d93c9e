//! NewsAPI error types

use thiserror::Error;

/// Errors produced while configuring or talking to the headlines provider.
#[derive(Error, Debug)]
pub enum NewsError {
    /// No API key in the environment or the config file
    #[error("missing NewsAPI key: set {env_var} or \"api_key\" in the config file")]
    MissingApiKey {
        /// Environment variable that was consulted
        env_var: &'static str,
    },

    /// Non-200 response from the sources endpoint
    #[error("NewsAPI sources error {status}: {body}")]
    SourceFetch { status: u16, body: String },

    /// Non-200 response from the top-headlines endpoint
    #[error("NewsAPI error {status}: {body}")]
    HeadlineFetch { status: u16, body: String },

    /// Request never produced a response
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body was not the JSON shape we expect
    #[error("invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}
