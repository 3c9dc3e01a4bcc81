//! Microsoft / Azure Speech adapter.
//!
//! Azure routes by region, so voice listing needs one. The gateway also reads
//! `region` from the speech `extraBody`, falling back to `eastasia`.

use super::{options_to_extra_body, require_non_empty, Endpoint};
use crate::provider::{Backend, Capabilities, SpeechProvider, VoiceProvider};
use crate::types::RequestParams;
use crate::utils::{query_string, DEFAULT_BASE_URL};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MicrosoftOptions {
    /// Azure region, e.g. `eastus`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Custom neural voice deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
    /// Send the input as-is instead of wrapping it in SSML.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_ssml: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
}

/// Voice listing is region scoped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicrosoftVoiceOptions {
    pub region: String,
}

impl MicrosoftVoiceOptions {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
        }
    }
}

/// `region=<region>&provider=<backend>`
pub(crate) fn region_query(backend: Backend, region: &str) -> Result<String> {
    let region = require_non_empty(region, "region", backend.id())?;
    Ok(query_string([("region", region), ("provider", backend.id())]))
}

#[derive(Debug, Clone)]
pub struct UnMicrosoft {
    endpoint: Endpoint,
}

impl UnMicrosoft {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(Backend::Microsoft.id(), api_key.into(), base_url.into()),
        }
    }

    pub fn with_default_base_url(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_BASE_URL)
    }

    pub fn capabilities(self) -> Capabilities<MicrosoftOptions, MicrosoftVoiceOptions> {
        let this = Arc::new(self);
        Capabilities::<MicrosoftOptions, MicrosoftVoiceOptions>::new()
            .with_speech(this.clone())
            .with_voice(this)
    }
}

impl SpeechProvider for UnMicrosoft {
    type Options = MicrosoftOptions;

    fn speech(&self, model: &str, options: Option<&MicrosoftOptions>) -> Result<RequestParams> {
        let extra_body = options.map(options_to_extra_body).transpose()?;
        Ok(self
            .endpoint
            .speech(Backend::Microsoft.prefix_model(model), extra_body))
    }
}

impl VoiceProvider for UnMicrosoft {
    type Options = MicrosoftVoiceOptions;

    /// Fails with a configuration error when no region is given.
    fn voice(&self, options: Option<&MicrosoftVoiceOptions>) -> Result<RequestParams> {
        let region = options.map(|o| o.region.as_str()).unwrap_or_default();
        let query = region_query(Backend::Microsoft, region)?;
        Ok(self.endpoint.voice(query, None))
    }
}

pub fn create_un_microsoft(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
) -> Capabilities<MicrosoftOptions, MicrosoftVoiceOptions> {
    UnMicrosoft::new(api_key, base_url).capabilities()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use serde_json::{json, Value};

    #[test]
    fn test_voice_query_with_region() {
        let caps = create_un_microsoft("k", DEFAULT_BASE_URL);
        let params = caps.voice(Some(&MicrosoftVoiceOptions::new("eastus"))).unwrap();
        assert_eq!(params.query.as_deref(), Some("region=eastus&provider=microsoft"));
        assert_eq!(params.base_url, "http://localhost:5933/");
    }

    #[test]
    fn test_voice_requires_region() {
        let ms = UnMicrosoft::with_default_base_url("k");
        let err = ms.voice(None).unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
        assert!(ms.voice(Some(&MicrosoftVoiceOptions::new(""))).is_err());
    }

    #[test]
    fn test_speech_options() {
        let ms = UnMicrosoft::with_default_base_url("k");
        let options = MicrosoftOptions {
            region: Some("westeurope".into()),
            deployment_id: Some("dep-1".into()),
            disable_ssml: Some(true),
            sample_rate: Some(24000),
            ..Default::default()
        };
        let params = ms.speech("v1", Some(&options)).unwrap();
        assert_eq!(params.model.as_deref(), Some("microsoft/v1"));
        assert_eq!(
            Value::Object(params.extra_body.unwrap()),
            json!({
                "region": "westeurope",
                "deployment_id": "dep-1",
                "disable_ssml": true,
                "sample_rate": 24000
            })
        );
    }
}
