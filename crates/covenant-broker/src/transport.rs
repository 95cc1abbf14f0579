use async_trait::async_trait;
use thiserror::Error;

use covenant_model::ContractError;

#[derive(Debug, Error)]
/// Enumerates supported `BrokerError` values.
pub enum BrokerError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("broker request timed out after {timeout_ms}ms: {url}")]
    Timeout { url: String, timeout_ms: u64 },
    #[error("broker returned non-success status {status}: {body}")]
    HttpStatus { status: u16, body: String },
    #[error(transparent)]
    Contract(#[from] ContractError),
}

#[async_trait]
/// Trait contract for `ContractTransport` behavior: GET by URL, returning
/// the response body or a transport failure.
pub trait ContractTransport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, BrokerError>;
}

#[derive(Debug, Clone)]
/// Reqwest-backed `ContractTransport` bounded by a per-request timeout.
pub struct HttpTransport {
    client: reqwest::Client,
    request_timeout_ms: u64,
}

impl HttpTransport {
    pub fn new(request_timeout_ms: u64) -> Result<Self, BrokerError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(request_timeout_ms.max(1)))
            .build()?;
        Ok(Self {
            client,
            request_timeout_ms,
        })
    }

    fn classify(&self, error: reqwest::Error, url: &str) -> BrokerError {
        if error.is_timeout() {
            return BrokerError::Timeout {
                url: url.to_string(),
                timeout_ms: self.request_timeout_ms,
            };
        }
        BrokerError::Http(error)
    }
}

#[async_trait]
impl ContractTransport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, BrokerError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| self.classify(error, url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| self.classify(error, url))?;
        if !status.is_success() {
            return Err(BrokerError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}
