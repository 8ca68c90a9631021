use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;

#[async_trait]
pub trait SchemaFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches schema documents over HTTP with a single GET.
///
/// The body is read in full as text. There is no timeout and no size limit.
#[derive(Debug, Clone)]
pub struct HttpSchemaFetcher {
    client: Client,
}

impl HttpSchemaFetcher {
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Default for HttpSchemaFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SchemaFetcher for HttpSchemaFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;

        debug!("fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
