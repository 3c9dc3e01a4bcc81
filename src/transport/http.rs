use super::{SpeechBytes, Transport, REQUEST_ID_HEADER};
use crate::config::ClientConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Proxy, RequestBuilder, Response};
use serde_json::Value;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

/// `reqwest` backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::from_env())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let mut builder = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            match Proxy::all(proxy_url) {
                Ok(proxy) => builder = builder.proxy(proxy),
                Err(e) => tracing::warn!(proxy = %proxy_url, error = %e, "ignoring invalid proxy URL"),
            }
        }

        let client = builder
            .build()
            .map_err(|e| Error::Transport(TransportError::Other(e.to_string())))?;
        Ok(Self { client })
    }

    /// Wrap an existing client, e.g. one shared with the rest of an application.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn send(&self, request: RequestBuilder, api_key: &str) -> Result<Response> {
        let request_id = Uuid::new_v4().to_string();
        let mut request = request.header(REQUEST_ID_HEADER, &request_id);
        if !api_key.is_empty() {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = response.status();
        tracing::debug!(request_id = %request_id, status = status.as_u16(), "gateway responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        Err(remote_error(status.as_u16(), &body))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: Url, api_key: &str) -> Result<Value> {
        tracing::debug!(url = %url, "GET");
        let response = self.send(self.client.get(url), api_key).await?;
        response
            .json()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))
    }

    async fn post_json(&self, url: Url, api_key: &str, body: &Value) -> Result<SpeechBytes> {
        tracing::debug!(url = %url, "POST");
        let response = self.send(self.client.post(url).json(body), api_key).await?;
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let data = response
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;
        Ok(SpeechBytes { data, content_type })
    }
}

/// Map a non-2xx gateway response to [`Error::Remote`].
///
/// Understands the gateway envelope `{"errors":[{"code","detail"}]}` as well as
/// the common `{"message"}`, `{"error":"..."}` and `{"error":{"message"}}`
/// shapes; anything else is reported as the raw body text.
pub(crate) fn remote_error(status: u16, body: &[u8]) -> Error {
    let text = String::from_utf8_lossy(body).trim().to_string();
    let parsed: Option<Value> = serde_json::from_slice(body).ok();

    let (code, message) = match parsed.as_ref() {
        Some(json) => extract_error(json),
        None => (None, None),
    };

    let message = message.unwrap_or_else(|| {
        if text.is_empty() {
            format!("empty response body (HTTP {})", status)
        } else {
            text
        }
    });

    Error::Remote {
        status,
        code,
        message,
    }
}

fn extract_error(json: &Value) -> (Option<String>, Option<String>) {
    let as_string = |v: Option<&Value>| v.and_then(Value::as_str).map(str::to_string);

    if let Some(first) = json
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
    {
        let message = as_string(first.get("detail")).or_else(|| as_string(first.get("title")));
        return (as_string(first.get("code")), message);
    }

    if let Some(message) = as_string(json.get("message")) {
        return (as_string(json.get("code")), Some(message));
    }

    match json.get("error") {
        Some(Value::String(message)) => (as_string(json.get("code")), Some(message.clone())),
        Some(obj @ Value::Object(_)) => (
            as_string(obj.get("code")).or_else(|| as_string(obj.get("type"))),
            as_string(obj.get("message")),
        ),
        _ => (None, None),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
