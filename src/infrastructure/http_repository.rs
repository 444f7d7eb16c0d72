// HTTP repository implementation - summaries published as static JSON files
use crate::application::stats_repository::{SourceError, StatsRepository};
use crate::domain::summary::{PackageStats, PpaIndex, VersionStats};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpStatsRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStatsRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn document_url(&self, document: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(document))
    }

    async fn fetch_document<T: DeserializeOwned>(&self, document: &str) -> Result<T, SourceError> {
        let url = self.document_url(document);
        tracing::debug!("Fetching summary {}", url);

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| SourceError::Transport(e.into()))?;

        match response.status() {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(SourceError::NotFound {
                    resource: document.to_string(),
                });
            }
            status => {
                tracing::warn!("Summary {} answered with status {}", url, status);
                return Err(SourceError::Unavailable {
                    resource: document.to_string(),
                    status: status.as_u16(),
                });
            }
        }

        // Read the body first so transport failures and bad JSON stay distinguishable
        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Transport(e.into()))?;

        serde_json::from_slice(&body).map_err(|e| {
            SourceError::Decode(anyhow::Error::new(e).context(format!("Failed to parse {}", document)))
        })
    }
}

#[async_trait]
impl StatsRepository for HttpStatsRepository {
    async fn fetch_ppa_index(&self) -> Result<PpaIndex, SourceError> {
        self.fetch_document("index.json").await
    }

    async fn fetch_package(&self, package: &str) -> Result<PackageStats, SourceError> {
        self.fetch_document(&format!("{}.json", package)).await
    }

    async fn fetch_version(&self, package: &str, version: &str) -> Result<VersionStats, SourceError> {
        self.fetch_document(&format!("{}_{}.json", package, version)).await
    }
}
