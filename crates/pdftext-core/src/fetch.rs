use bytes::Bytes;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use thiserror::Error;

/// Browser-like identifier; some document hosts reject default client agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request failed with status code {}", .0.as_u16())]
    Status(StatusCode),
}

/// Retrieves raw document bytes over HTTP.
///
/// No retries and no explicit timeout; whatever `reqwest` does by default applies.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

impl Fetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            user_agent: user_agent.into(),
        }
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `url` and return the body as raw bytes.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        tracing::debug!(url, "fetching document");
        let resp = self
            .client
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status()));
        }

        let body = resp.bytes().await?;
        tracing::debug!(url, bytes = body.len(), "fetched document");
        Ok(body)
    }
}
