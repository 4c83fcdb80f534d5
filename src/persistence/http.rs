//! Remote save endpoint sink

use async_trait::async_trait;

use super::{PersistenceError, RecordSink};
use crate::models::UserRecord;

/// POSTs each record as JSON to a remote endpoint
pub struct HttpSink {
    url: String,
    client: reqwest::Client,
}

impl HttpSink {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Use a preconfigured client (timeouts, proxies, default headers)
    pub fn with_client(url: String, client: reqwest::Client) -> Self {
        Self { url, client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordSink for HttpSink {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn save(&self, record: &UserRecord) -> Result<Option<i64>, PersistenceError> {
        let resp = self.client.post(&self.url).json(record).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PersistenceError::Status(status.as_u16()));
        }
        Ok(None)
    }
}
