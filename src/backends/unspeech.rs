//! Gateway façade: talks to [UnSpeech](https://github.com/moeru-ai/unspeech) itself
//! and lets the model namespace pick the upstream backend.

use super::microsoft::region_query;
use super::{provider_query, require_non_empty, Endpoint};
use crate::provider::{Backend, Capabilities, MetadataProvider, SpeechProvider, VoiceProvider};
use crate::types::{ProviderMetadata, RequestParams};
use crate::utils::{query_string, DEFAULT_BASE_URL};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

const PROVIDER_NAME: &str = "unspeech";

/// Options forwarded verbatim to the gateway.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnSpeechOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_body: Option<Map<String, Value>>,
}

/// Voice listing target, discriminated by `backend`.
///
/// Region-scoped backends carry a `region`; Volcengine carries its app id.
/// Unknown discriminators fail to deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum VoiceOptions {
    ElevenLabs,
    Koemotion,
    OpenAI,
    Deepgram,
    Alibaba,
    Aliyun,
    Microsoft {
        region: String,
    },
    Azure {
        region: String,
    },
    Volcengine {
        #[serde(rename = "appId", alias = "app_id")]
        app_id: String,
    },
    Volcano {
        #[serde(rename = "appId", alias = "app_id")]
        app_id: String,
    },
}

impl VoiceOptions {
    pub fn backend(&self) -> Backend {
        match self {
            VoiceOptions::ElevenLabs => Backend::ElevenLabs,
            VoiceOptions::Koemotion => Backend::Koemotion,
            VoiceOptions::OpenAI => Backend::OpenAI,
            VoiceOptions::Deepgram => Backend::Deepgram,
            VoiceOptions::Alibaba => Backend::Alibaba,
            VoiceOptions::Aliyun => Backend::Aliyun,
            VoiceOptions::Microsoft { .. } => Backend::Microsoft,
            VoiceOptions::Azure { .. } => Backend::Azure,
            VoiceOptions::Volcengine { .. } => Backend::Volcengine,
            VoiceOptions::Volcano { .. } => Backend::Volcano,
        }
    }

    /// Query string selecting this backend on the voices endpoint.
    pub fn query(&self) -> Result<String> {
        let backend = self.backend();
        match self {
            VoiceOptions::Microsoft { region } | VoiceOptions::Azure { region } => {
                region_query(backend, region)
            }
            VoiceOptions::Volcengine { app_id } | VoiceOptions::Volcano { app_id } => {
                let app_id = require_non_empty(app_id, "appId", backend.id())?;
                Ok(query_string([("appid", app_id), ("provider", backend.id())]))
            }
            _ => Ok(provider_query(backend)),
        }
    }
}

/// The gateway façade.
#[derive(Debug, Clone)]
pub struct UnSpeech {
    endpoint: Endpoint,
}

impl UnSpeech {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(PROVIDER_NAME, api_key.into(), base_url.into()),
        }
    }

    pub fn with_default_base_url(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_BASE_URL)
    }

    pub fn base_url(&self) -> &str {
        self.endpoint.base_url()
    }

    pub fn voices_base_url(&self) -> &str {
        self.endpoint.voices_base_url()
    }

    pub fn capabilities(self) -> Capabilities<UnSpeechOptions, VoiceOptions> {
        let this = Arc::new(self);
        Capabilities::<UnSpeechOptions, VoiceOptions>::new()
            .with_metadata(this.clone())
            .with_speech(this.clone())
            .with_voice(this)
    }
}

impl SpeechProvider for UnSpeech {
    type Options = UnSpeechOptions;

    /// `model` must be namespaced by a known backend, e.g. `elevenlabs/eleven_multilingual_v2`.
    fn speech(&self, model: &str, options: Option<&UnSpeechOptions>) -> Result<RequestParams> {
        Backend::from_model(model)?;
        let extra_body = options.and_then(|o| o.extra_body.clone());
        Ok(self.endpoint.speech(model.to_string(), extra_body))
    }
}

impl VoiceProvider for UnSpeech {
    type Options = VoiceOptions;

    /// The gateway needs a backend to list voices, so `None` is a configuration error.
    fn voice(&self, options: Option<&VoiceOptions>) -> Result<RequestParams> {
        let options = options.ok_or_else(|| Error::missing_field("backend", PROVIDER_NAME))?;
        Ok(self.endpoint.voice(options.query()?, None))
    }
}

impl MetadataProvider for UnSpeech {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new(PROVIDER_NAME)
    }
}

/// Gateway capabilities (metadata + speech + voice).
pub fn create_unspeech(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
) -> Capabilities<UnSpeechOptions, VoiceOptions> {
    UnSpeech::new(api_key, base_url).capabilities()
}
