//! Voice listing against the gateway's `api/voices` endpoint.

use crate::transport::Transport;
use crate::types::{ListVoicesResponse, RequestParams, Voice};
use crate::utils::join_url;
use crate::Result;

/// Path of the voice listing endpoint, relative to the voices base URL.
pub const VOICES_PATH: &str = "api/voices";

/// `GET {baseURL}/api/voices?{query}` and return the decoded voices.
///
/// `params` is what a voice capability produced; its `baseURL` is already the
/// gateway root.
pub async fn list_voices<T>(transport: &T, params: &RequestParams) -> Result<Vec<Voice>>
where
    T: Transport + ?Sized,
{
    let mut url = join_url(&params.base_url, VOICES_PATH)?;
    if let Some(query) = params.query.as_deref().filter(|q| !q.is_empty()) {
        url.set_query(Some(query));
    }

    let json = transport.get_json(url, &params.api_key).await?;
    let response: ListVoicesResponse = serde_json::from_value(json)?;
    tracing::debug!(count = response.voices.len(), "listed voices");
    Ok(response.voices)
}
