//! [Deepgram](https://developers.deepgram.com/docs/text-to-speech) adapter.

use super::{provider_query, Endpoint};
use crate::provider::{Backend, Capabilities, SpeechProvider, VoiceProvider};
use crate::types::RequestParams;
use crate::utils::DEFAULT_BASE_URL;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Deepgram takes no extra options through the gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepgramOptions {}

#[derive(Debug, Clone)]
pub struct UnDeepgram {
    endpoint: Endpoint,
}

impl UnDeepgram {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(Backend::Deepgram.id(), api_key.into(), base_url.into()),
        }
    }

    pub fn with_default_base_url(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_BASE_URL)
    }

    pub fn capabilities(self) -> Capabilities<DeepgramOptions, DeepgramOptions> {
        let this = Arc::new(self);
        Capabilities::<DeepgramOptions, DeepgramOptions>::new()
            .with_speech(this.clone())
            .with_voice(this)
    }
}

impl SpeechProvider for UnDeepgram {
    type Options = DeepgramOptions;

    /// See <https://developers.deepgram.com/docs/tts-models> for model ids.
    fn speech(&self, model: &str, _options: Option<&DeepgramOptions>) -> Result<RequestParams> {
        Ok(self.endpoint.speech(Backend::Deepgram.prefix_model(model), None))
    }
}

impl VoiceProvider for UnDeepgram {
    type Options = DeepgramOptions;

    fn voice(&self, _options: Option<&DeepgramOptions>) -> Result<RequestParams> {
        Ok(self.endpoint.voice(provider_query(Backend::Deepgram), None))
    }
}

pub fn create_un_deepgram(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
) -> Capabilities<DeepgramOptions, DeepgramOptions> {
    UnDeepgram::new(api_key, base_url).capabilities()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_prefix() {
        let dg = UnDeepgram::with_default_base_url("k");
        assert_eq!(dg.speech("foo", None).unwrap().model.as_deref(), Some("deepgram/foo"));
        assert_eq!(
            dg.speech("deepgram/foo", None).unwrap().model.as_deref(),
            Some("deepgram/foo")
        );
    }

    #[test]
    fn test_options_never_produce_extra_body() {
        let dg = UnDeepgram::with_default_base_url("k");
        let params = dg.speech("aura-asteria-en", Some(&DeepgramOptions {})).unwrap();
        assert!(params.extra_body.is_none());
        assert_eq!(params.api_key, "k");
    }

    #[test]
    fn test_voice_url_suffix_variants() {
        for base in [
            "http://localhost:5933/v1/",
            "http://localhost:5933/v1",
            "http://localhost:5933/",
        ] {
            let caps = create_un_deepgram("k", base);
            let first = caps.voice(None).unwrap();
            let second = caps.voice(None).unwrap();
            assert_eq!(first.base_url, "http://localhost:5933/");
            assert_eq!(first, second);
            assert_eq!(first.query.as_deref(), Some("provider=deepgram"));
        }
    }
}
