//! 传输层：把 [`RequestParams`](crate::types::RequestParams) 变成真正的 HTTP 调用。
//!
//! Transport layer. Request building stays pure; this is the only place that
//! touches the network, behind the [`Transport`] trait so tests and callers
//! can swap the HTTP stack.

mod http;

pub use http::{HttpTransport, TransportError};

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use url::Url;

/// Correlation id header attached to every outgoing request.
pub const REQUEST_ID_HEADER: &str = "x-unspeech-request-id";

/// Raw audio body returned by the speech endpoint.
#[derive(Debug, Clone)]
pub struct SpeechBytes {
    pub data: Bytes,
    /// `Content-Type` reported by the gateway, if any.
    pub content_type: Option<String>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and decode the JSON body.
    async fn get_json(&self, url: Url, api_key: &str) -> Result<Value>;

    /// POST `body` as JSON to `url` and return the raw response bytes.
    async fn post_json(&self, url: Url, api_key: &str, body: &Value) -> Result<SpeechBytes>;
}
