use async_trait::async_trait;
use tracing::debug;

use super::item::RecommendationItem;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Unexpected status {0}")]
    Status(u16),
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Backend that answers a `/recommend` request path with a list of items.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn fetch(&self, path: &str) -> Result<Vec<RecommendationItem>, FetchError>;
}

pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Result<Self, FetchError> {
        // No timeout: a request waits for as long as the backend takes.
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl RecommendationSource for HttpSource {
    async fn fetch(&self, path: &str) -> Result<Vec<RecommendationItem>, FetchError> {
        let url = self.build_url(path);
        debug!(url = %url, "Fetching recommendations");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let items: Vec<RecommendationItem> = serde_json::from_slice(&body)?;

        debug!(url = %url, count = items.len(), "Received recommendations");
        Ok(items)
    }
}
