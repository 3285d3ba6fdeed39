use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tokio::time::timeout;

use crate::catalog::Book;
use crate::config::SourceConfig;
use crate::fetch::error::FetchError;

/// One-shot client for the books endpoint.
pub struct CatalogClient {
    client: Client,
    url: String,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(source: &SourceConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(source.connect_timeout_seconds))
            .build()
            .map_err(|source| FetchError::Client { source })?;

        Ok(Self {
            client,
            url: source.url.clone(),
            timeout: Duration::from_secs(source.timeout_seconds),
        })
    }

    /// Fetches and decodes the whole catalog.
    ///
    /// The entire exchange, body included, is bounded by the configured
    /// timeout. Nothing is retried.
    pub async fn fetch_catalog(&self) -> Result<Vec<Book>, FetchError> {
        tracing::info!(url = %self.url, "Fetching catalog");

        let result = match timeout(self.timeout, self.do_fetch()).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout {
                duration: self.timeout.as_secs(),
            }),
        };

        match &result {
            Ok(books) => tracing::info!(count = books.len(), "Catalog fetched"),
            Err(err) => tracing::error!(kind = err.kind(), "Catalog fetch failed: {}", err.details()),
        }
        result
    }

    async fn do_fetch(&self) -> Result<Vec<Book>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Connection {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Connection {
                url: self.url.clone(),
                source,
            })?;

        decode_catalog(&body)
    }
}

/// Decodes a response body into book records.
///
/// A body that is valid JSON but not an array of records is a
/// [`FetchError::DataShape`], never an empty catalog.
pub fn decode_catalog(body: &[u8]) -> Result<Vec<Book>, FetchError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|source| FetchError::Decode { source })?;

    let Value::Array(items) = value else {
        return Err(FetchError::DataShape {
            message: format!("expected a JSON array, got {}", json_kind(&value)),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Book>(item).map_err(|err| FetchError::DataShape {
                message: format!("record {}: {}", index, err),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
