// file: src/client/query.rs
// description: http client for the search endpoint and asset manifests
// reference: https://images.nasa.gov/docs/images.nasa.gov_api_docs.pdf

use crate::config::ApiConfig;
use crate::error::{MediaError, Result};
use crate::models::{AssetLink, ManifestUrl, SearchQuery, SearchResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct QueryClient {
    client: Client,
    endpoint: String,
}

impl QueryClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| MediaError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.search_endpoint.clone(),
        })
    }

    /// Sends one GET with the query's parameters. Any status is returned as-is.
    pub async fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let params = query.parameters();
        debug!("Searching {} with {:?}", self.endpoint, params);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await
            .map_err(|e| MediaError::http(&self.endpoint, e))?;

        let url = response.url().to_string();
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| MediaError::http(&self.endpoint, e))?;

        debug!("Search returned status {} ({} bytes)", status, body.len());
        Ok(SearchResponse::new(url, status, body))
    }

    /// Fetches one manifest, which must be a JSON array of file urls.
    pub async fn fetch_manifest(&self, url: &ManifestUrl) -> Result<Vec<AssetLink>> {
        debug!("Fetching manifest {}", url);

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| MediaError::http(url.as_str(), e))?;

        if !response.status().is_success() {
            return Err(MediaError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| MediaError::http(url.as_str(), e))?;

        let links: Vec<String> = serde_json::from_str(&body)
            .map_err(|e| MediaError::decode(url.as_str(), e.to_string()))?;

        Ok(links.into_iter().map(AssetLink::new).collect())
    }
}
