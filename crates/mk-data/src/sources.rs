//! Live data source backed by the statistics API

use mk_core::data::MediaDataSource;
use mk_core::{ArticleAnalysis, OutletAnalysis, StatsSnapshot};

use crate::{ApiConfig, ApiError, StatsClient};

/// `MediaDataSource` over the live HTTP API.
pub struct HttpSource {
    client: StatsClient,
    name: String,
}

impl HttpSource {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let name = config.base_url.clone();
        let client = StatsClient::new(config)?;
        Ok(Self { client, name })
    }

    pub fn client(&self) -> &StatsClient {
        &self.client
    }
}

#[async_trait::async_trait]
impl MediaDataSource for HttpSource {
    async fn fetch_stats(&self) -> anyhow::Result<StatsSnapshot> {
        Ok(self.client.fetch_stats().await?)
    }

    async fn fetch_outlet_analyses(&self) -> anyhow::Result<Vec<OutletAnalysis>> {
        Ok(self.client.fetch_outlet_analyses().await?)
    }

    async fn analyze_article(&self, url: &str) -> anyhow::Result<ArticleAnalysis> {
        Ok(self.client.analyze_article(url).await?)
    }

    fn source_name(&self) -> &str {
        &self.name
    }
}
