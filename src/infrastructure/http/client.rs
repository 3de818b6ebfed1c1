use bytes::Bytes;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("upstream responded with status {0}")]
    Status(StatusCode),

    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A fully buffered upstream response body.
#[derive(Debug, Clone)]
pub struct FetchedBody {
    pub bytes: Bytes,
    pub content_type: Option<String>,
}

/// Shared outbound HTTP client. Cloning is cheap, the connection pool is shared.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;

        info!("✅ HTTP client ready (user-agent: {})", user_agent);
        Ok(Self { client })
    }

    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// GET `url` and read the whole body. Non-2xx answers are errors.
    pub async fn fetch(&self, url: &str) -> Result<FetchedBody, FetchError> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(|v| v.to_string());

        let bytes = resp.bytes().await?;

        Ok(FetchedBody {
            bytes,
            content_type,
        })
    }
}
