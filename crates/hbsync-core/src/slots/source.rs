use std::future::Future;

use serde_json::Value;

use super::errors::FetchError;
use crate::config::HttpConfig;

/// Where slot responses come from.
///
/// The seam between slot polling and the network. `HttpSlotSource` is the
/// real implementation; tests substitute canned responses.
pub trait SlotSource: Send + Sync + 'static {
    /// GET `url` and decode the body as JSON.
    ///
    /// Non-success statuses, transport failures and undecodable bodies are
    /// all errors.
    fn fetch_json(&self, url: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// [`SlotSource`] over HTTP using a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpSlotSource {
    client: reqwest::Client,
}

impl HttpSlotSource {
    /// Build a source with the timeouts and user agent from `config`.
    pub fn new(config: &HttpConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| FetchError::Client {
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    /// Reuse an existing client (shares its connection pool).
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl SlotSource for HttpSlotSource {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FetchError::InvalidBody {
            message: e.to_string(),
        })
    }
}
