//! [ElevenLabs](https://elevenlabs.io/docs/api-reference/text-to-speech/convert) adapter.

use super::{options_to_extra_body, provider_query, Endpoint};
use crate::provider::{Backend, Capabilities, SpeechProvider, VoiceProvider};
use crate::types::RequestParams;
use crate::utils::DEFAULT_BASE_URL;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevenLabsOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice_settings: Option<ElevenLabsVoiceSettings>,
    /// Deterministic sampling seed, 0~4294967295.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// ISO 639-1 code to enforce a language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    /// `auto`, `on` or `off`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apply_text_normalization: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevenLabsVoiceSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct UnElevenLabs {
    endpoint: Endpoint,
}

impl UnElevenLabs {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(Backend::ElevenLabs.id(), api_key.into(), base_url.into()),
        }
    }

    pub fn with_default_base_url(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_BASE_URL)
    }

    /// Voice listing takes no options for ElevenLabs.
    pub fn capabilities(self) -> Capabilities<ElevenLabsOptions, ()> {
        let this = Arc::new(self);
        Capabilities::<ElevenLabsOptions, ()>::new()
            .with_speech(this.clone())
            .with_voice(this)
    }
}

impl SpeechProvider for UnElevenLabs {
    type Options = ElevenLabsOptions;

    fn speech(&self, model: &str, options: Option<&ElevenLabsOptions>) -> Result<RequestParams> {
        let extra_body = options.map(options_to_extra_body).transpose()?;
        Ok(self
            .endpoint
            .speech(Backend::ElevenLabs.prefix_model(model), extra_body))
    }
}

impl VoiceProvider for UnElevenLabs {
    type Options = ();

    fn voice(&self, _options: Option<&()>) -> Result<RequestParams> {
        Ok(self.endpoint.voice(provider_query(Backend::ElevenLabs), None))
    }
}

pub fn create_un_elevenlabs(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
) -> Capabilities<ElevenLabsOptions, ()> {
    UnElevenLabs::new(api_key, base_url).capabilities()
}
