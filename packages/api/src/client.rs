//! HTTP transport for the matrimony backend.

use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::Backend;

/// [`Backend`] that POSTs JSON over HTTP with `reqwest`.
///
/// On the browser build `reqwest` goes through `fetch`, so cookies and CORS are
/// handled by the browser.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Backend for HttpBackend {
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let payload = response.json::<Value>().await.ok();
            tracing::warn!("POST {path} failed with {status}");
            return Err(ApiError::rejected(status.as_u16(), payload.as_ref()));
        }
        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
