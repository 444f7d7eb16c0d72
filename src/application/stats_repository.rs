// Repository trait for the pre-computed download summaries
use crate::domain::summary::{PackageStats, PpaIndex, VersionStats};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{resource} unavailable (status {status})")]
    Unavailable { resource: String, status: u16 },

    #[error("failed to reach summary source: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("malformed summary: {0}")]
    Decode(#[source] anyhow::Error),
}

#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Archive-wide summary (`index.json`)
    async fn fetch_ppa_index(&self) -> Result<PpaIndex, SourceError>;

    /// Summary of one package across its versions (`<package>.json`)
    async fn fetch_package(&self, package: &str) -> Result<PackageStats, SourceError>;

    /// Summary of a single version (`<package>_<version>.json`)
    async fn fetch_version(&self, package: &str, version: &str) -> Result<VersionStats, SourceError>;
}

/// Summaries held in memory, keyed by the document name the HTTP source would request.
#[cfg(test)]
pub mod testing {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct InMemoryStatsRepository {
        documents: HashMap<String, String>,
    }

    impl InMemoryStatsRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_document(mut self, name: &str, json: &str) -> Self {
            self.documents.insert(name.to_string(), json.to_string());
            self
        }

        fn decode<T: serde::de::DeserializeOwned>(&self, name: &str) -> Result<T, SourceError> {
            let json = self.documents.get(name).ok_or_else(|| SourceError::NotFound {
                resource: name.to_string(),
            })?;
            serde_json::from_str(json).map_err(|e| SourceError::Decode(e.into()))
        }
    }

    #[async_trait]
    impl StatsRepository for InMemoryStatsRepository {
        async fn fetch_ppa_index(&self) -> Result<PpaIndex, SourceError> {
            self.decode("index.json")
        }

        async fn fetch_package(&self, package: &str) -> Result<PackageStats, SourceError> {
            self.decode(&format!("{}.json", package))
        }

        async fn fetch_version(&self, package: &str, version: &str) -> Result<VersionStats, SourceError> {
            self.decode(&format!("{}_{}.json", package, version))
        }
    }

    pub const INDEX_JSON: &str = r#"{
        "ppa_owner": "jfi",
        "ppa_name": "ppa",
        "packages": [{"name": "psensor", "count": 42}, {"name": "ptask", "count": 8}],
        "ddts": [{"time": [2020, 5, 1], "value": 30}, {"time": [2020, 5, 2], "value": 20}]
    }"#;

    pub const PACKAGE_JSON: &str = r#"{
        "ppa_owner": "jfi",
        "ppa_name": "ppa",
        "name": "psensor",
        "versions": ["1.0.0-1", "1.0.1-1"],
        "distros": [
            {"name": "focal", "count": 30, "ddts": [{"time": [2020, 5, 2], "value": 30}]},
            {"name": "bionic", "count": 12, "ddts": [{"time": [2020, 4, 20], "value": 12}]},
            {"name": "xenial", "count": 0, "ddts": []}
        ],
        "ddts": [{"time": [2020, 4, 20], "value": 12}, {"time": [2020, 5, 2], "value": 30}]
    }"#;

    pub const VERSION_JSON: &str = r#"{
        "ppa_owner": "jfi",
        "ppa_name": "ppa",
        "pkg_name": "psensor",
        "name": "1.0.1-1",
        "distros": [
            {"name": "focal", "archs": [{"name": "amd64", "count": 20}, {"name": "arm64", "count": 2}]},
            {"name": "bionic", "archs": [{"name": "amd64", "count": 5}]}
        ],
        "ddts": [{"time": [2020, 5, 2], "value": 27}],
        "date_created": "2020-05-01"
    }"#;

    pub fn sample_repository() -> InMemoryStatsRepository {
        InMemoryStatsRepository::new()
            .with_document("index.json", INDEX_JSON)
            .with_document("psensor.json", PACKAGE_JSON)
            .with_document("psensor_1.0.1-1.json", VERSION_JSON)
    }
}
