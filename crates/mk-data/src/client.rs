//! HTTP client for the statistics API
//!
//! Every operation is a single fire-and-forget request: no retries, no
//! backoff, no request deduplication. A failed fetch leaves the owning view
//! in its degraded state.

use serde::de::DeserializeOwned;
use serde_json::json;

use mk_core::{ArticleAnalysis, OutletAnalysis, StatsSnapshot};

use crate::{ApiConfig, ApiError};

pub struct StatsClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl StatsClient {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn stats_url(&self) -> String {
        join(&self.config.base_url, "api/stats")
    }

    pub fn analyze_url(&self) -> String {
        join(&self.config.base_url, "api/analyze")
    }

    pub fn analyze_all_url(&self) -> String {
        join(&self.config.legacy_base_url, "analyze/all")
    }

    /// `GET /api/stats`
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let url = self.stats_url();
        tracing::debug!("fetching statistics from {url}");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    /// `POST /api/analyze`. A blank URL is rejected before any request goes
    /// out.
    pub async fn analyze_article(&self, article_url: &str) -> Result<ArticleAnalysis, ApiError> {
        let article_url = article_url.trim();
        if article_url.is_empty() {
            return Err(ApiError::EmptyUrl);
        }
        let url = self.analyze_url();
        tracing::debug!("analyzing article {article_url} via {url}");
        let response = self
            .http
            .post(&url)
            .json(&json!({ "url": article_url }))
            .send()
            .await?;
        decode(response).await
    }

    /// Legacy `GET /analyze/all`
    pub async fn fetch_outlet_analyses(&self) -> Result<Vec<OutletAnalysis>, ApiError> {
        let url = self.analyze_all_url();
        tracing::debug!("fetching outlet analyses from {url}");
        let response = self.http.get(&url).send().await?;
        decode(response).await
    }
}

fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path)
}

/// Decode a response body, separating transport, status and shape failures.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            status,
            url: response.url().to_string(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str, legacy_base_url: &str) -> StatsClient {
        let mut config = ApiConfig::default();
        config.base_url = base_url.to_string();
        config.legacy_base_url = legacy_base_url.to_string();
        StatsClient::new(config).unwrap()
    }

    #[test]
    fn endpoint_urls() {
        let client = client("http://localhost:5000", "http://localhost:8000");
        assert_eq!(client.stats_url(), "http://localhost:5000/api/stats");
        assert_eq!(client.analyze_url(), "http://localhost:5000/api/analyze");
        assert_eq!(client.analyze_all_url(), "http://localhost:8000/analyze/all");
    }

    #[test]
    fn trailing_slashes_do_not_double_up() {
        let client = client("http://localhost:5000/", "http://localhost:8000/");
        assert_eq!(client.stats_url(), "http://localhost:5000/api/stats");
        assert_eq!(client.analyze_all_url(), "http://localhost:8000/analyze/all");
    }

    #[tokio::test]
    async fn blank_article_url_is_rejected_without_a_request() {
        let client = client("http://localhost:5000", "http://localhost:8000");
        assert!(matches!(
            client.analyze_article("").await,
            Err(ApiError::EmptyUrl)
        ));
        assert!(matches!(
            client.analyze_article("   ").await,
            Err(ApiError::EmptyUrl)
        ));
    }
}
