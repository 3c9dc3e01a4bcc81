//! AlibabaCloud (阿里云) speech adapter.

use super::{options_to_extra_body, provider_query, Endpoint};
use crate::provider::{Backend, Capabilities, SpeechProvider, VoiceProvider};
use crate::types::RequestParams;
use crate::utils::DEFAULT_BASE_URL;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlibabaCloudOptions {
    /// `pcm`, `wav` or `mp3`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    /// 0~100
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u32>,
    /// 0.5~2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// 0.5~2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pitch: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct UnAlibabaCloud {
    endpoint: Endpoint,
}

impl UnAlibabaCloud {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(Backend::Alibaba.id(), api_key.into(), base_url.into()),
        }
    }

    pub fn with_default_base_url(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_BASE_URL)
    }

    pub fn capabilities(self) -> Capabilities<AlibabaCloudOptions, ()> {
        let this = Arc::new(self);
        Capabilities::<AlibabaCloudOptions, ()>::new()
            .with_speech(this.clone())
            .with_voice(this)
    }
}

impl SpeechProvider for UnAlibabaCloud {
    type Options = AlibabaCloudOptions;

    fn speech(&self, model: &str, options: Option<&AlibabaCloudOptions>) -> Result<RequestParams> {
        let extra_body = options.map(options_to_extra_body).transpose()?;
        Ok(self
            .endpoint
            .speech(Backend::Alibaba.prefix_model(model), extra_body))
    }
}

impl VoiceProvider for UnAlibabaCloud {
    type Options = ();

    fn voice(&self, _options: Option<&()>) -> Result<RequestParams> {
        Ok(self.endpoint.voice(provider_query(Backend::Alibaba), None))
    }
}

pub fn create_un_alibaba_cloud(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
) -> Capabilities<AlibabaCloudOptions, ()> {
    UnAlibabaCloud::new(api_key, base_url).capabilities()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_and_voice() {
        let caps = create_un_alibaba_cloud("sk", DEFAULT_BASE_URL);
        let options = AlibabaCloudOptions {
            sample_rate: Some(16000),
            rate: Some(1.1),
            ..Default::default()
        };
        let speech = caps.speech("cosyvoice-v1", Some(&options)).unwrap();
        assert_eq!(speech.model.as_deref(), Some("alibaba/cosyvoice-v1"));
        let body = speech.extra_body.unwrap();
        assert_eq!(body["sample_rate"], 16000);
        assert_eq!(body["rate"], 1.1);
        assert!(!body.contains_key("sampleRate"));

        let voice = caps.voice(None).unwrap();
        assert_eq!(voice.query.as_deref(), Some("provider=alibaba"));
        assert!(voice.model.is_none());
    }
}
