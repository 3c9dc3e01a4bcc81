//! 后端适配器：把各厂商的选项转换为网关请求描述符。
//!
//! Backend adapters for the UnSpeech gateway.
//!
//! | Adapter | Model namespace | Voice query |
//! |---------|-----------------|-------------|
//! | [`UnElevenLabs`] | `elevenlabs/` | `provider=elevenlabs` |
//! | [`UnMicrosoft`] | `microsoft/` | `region=<region>&provider=microsoft` |
//! | [`UnDeepgram`] | `deepgram/` | `provider=deepgram` |
//! | [`UnVolcengine`] | `volcengine/` | `provider=volcengine` |
//! | [`UnAlibabaCloud`] | `alibaba/` | `provider=alibaba` |
//! | [`UnSpeech`] | any known backend | per [`VoiceOptions`] |

pub mod alibaba;
pub mod deepgram;
pub mod elevenlabs;
pub mod microsoft;
pub mod unspeech;
pub mod volcengine;

pub use alibaba::{create_un_alibaba_cloud, AlibabaCloudOptions, UnAlibabaCloud};
pub use deepgram::{create_un_deepgram, DeepgramOptions, UnDeepgram};
pub use elevenlabs::{create_un_elevenlabs, ElevenLabsOptions, ElevenLabsVoiceSettings, UnElevenLabs};
pub use microsoft::{create_un_microsoft, MicrosoftOptions, MicrosoftVoiceOptions, UnMicrosoft};
pub use unspeech::{create_unspeech, UnSpeech, UnSpeechOptions, VoiceOptions};
pub use volcengine::{
    create_un_volcengine, UnVolcengine, VolcengineApp, VolcengineAudio, VolcengineOptions,
    VolcengineRequest, VolcengineUser,
};

use crate::provider::Backend;
use crate::types::RequestParams;
use crate::utils::{map_keys_to_snake_case, trim_version_suffix};
use crate::{Error, ErrorContext, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Credentials and base URLs shared by every adapter.
///
/// The voice-listing base URL is derived once here, so repeated `voice` calls
/// never depend on call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Endpoint {
    provider: &'static str,
    api_key: String,
    base_url: String,
    voices_base_url: String,
}

impl Endpoint {
    pub(crate) fn new(provider: &'static str, api_key: String, base_url: String) -> Self {
        let voices_base_url = trim_version_suffix(&base_url);
        Self {
            provider,
            api_key,
            base_url,
            voices_base_url,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn voices_base_url(&self) -> &str {
        &self.voices_base_url
    }

    pub(crate) fn speech(&self, model: String, extra_body: Option<Map<String, Value>>) -> RequestParams {
        tracing::debug!(
            provider = self.provider,
            model = %model,
            has_extra_body = extra_body.is_some(),
            "built speech request"
        );
        RequestParams::new(self.api_key.clone(), self.base_url.clone())
            .with_model(model)
            .with_extra_body(extra_body)
    }

    pub(crate) fn voice(&self, query: String, extra_body: Option<Map<String, Value>>) -> RequestParams {
        tracing::debug!(provider = self.provider, query = %query, "built voice request");
        RequestParams::new(self.api_key.clone(), self.voices_base_url.clone())
            .with_query(query)
            .with_extra_body(extra_body)
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }
}

/// `provider=<backend>`
pub(crate) fn provider_query(backend: Backend) -> String {
    crate::utils::query_string([("provider", backend.id())])
}

/// Serialize caller options and snake-case every key.
pub(crate) fn options_to_extra_body<T: Serialize>(options: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(options)? {
        Value::Object(map) => Ok(map_keys_to_snake_case(map)),
        other => Err(Error::validation_with_context(
            "Provider options must serialize to a JSON object",
            ErrorContext::new().with_details(other.to_string()),
        )),
    }
}

/// Reject a required string that is present but blank.
pub(crate) fn require_non_empty<'a>(value: &'a str, field: &str, source: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::missing_field(field, source));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_endpoint_derives_voice_url_once() {
        let ep = Endpoint::new("deepgram", "k".into(), "http://localhost:5933/v1/".into());
        assert_eq!(ep.base_url(), "http://localhost:5933/v1/");
        assert_eq!(ep.voices_base_url(), "http://localhost:5933/");
        let first = ep.voice(provider_query(Backend::Deepgram), None);
        let second = ep.voice(provider_query(Backend::Deepgram), None);
        assert_eq!(first, second);
        assert_eq!(first.query.as_deref(), Some("provider=deepgram"));
        assert_eq!(ep.api_key(), "k");
    }

    #[test]
    fn test_options_to_extra_body_rejects_non_objects() {
        assert!(options_to_extra_body(&json!([1, 2])).is_err());
        let body = options_to_extra_body(&json!({"sampleRate": 16000})).unwrap();
        assert_eq!(Value::Object(body), json!({"sample_rate": 16000}));
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty(" eastus ", "region", "microsoft").unwrap(), "eastus");
        assert!(matches!(
            require_non_empty("  ", "region", "microsoft"),
            Err(Error::Configuration { .. })
        ));
    }
}
