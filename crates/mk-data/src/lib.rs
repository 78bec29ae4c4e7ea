//! Data access for the Mediekompasset dashboard
//!
//! Wraps the external statistics API behind `StatsClient` and the
//! `MediaDataSource` trait. All analysis happens on the backend; this crate
//! only fetches and decodes its JSON output.

pub mod client;
pub mod config;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use client::StatsClient;
pub use config::ApiConfig;
pub use sources::HttpSource;

/// Errors that can occur when talking to the statistics API
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed response body: {0}")]
    Decode(String),

    #[error("article URL is empty")]
    EmptyUrl,

    #[error("configuration error: {0}")]
    Config(String),
}
