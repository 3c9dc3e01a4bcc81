//! [Volcengine / 火山引擎](https://www.volcengine.com/docs/6561/162929) adapter.
//!
//! Volcengine expects its options grouped as `app`, `user`, `audio` and
//! `request`. The `app` group always carries the caller's token so the TTS
//! engine receives its app identity even when no `app` block was supplied.

use super::{options_to_extra_body, provider_query, Endpoint};
use crate::provider::{Backend, Capabilities, SpeechProvider, VoiceProvider};
use crate::types::RequestParams;
use crate::utils::{map_keys_to_snake_case, DEFAULT_BASE_URL};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolcengineOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app: Option<VolcengineApp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<VolcengineUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<VolcengineAudio>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<VolcengineRequest>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolcengineApp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Usually `volcano_tts`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolcengineUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolcengineAudio {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_emotion: Option<bool>,
    /// 1~5, the engine defaults to 4. Growth is non-linear.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion_scale: Option<f64>,
    /// `wav`, `pcm`, `ogg_opus` or `mp3` (default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    /// 0.8~2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_ratio: Option<f64>,
    /// 8000, 16000 or 24000 (default).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_rate: Option<u32>,
    /// `crosslingual`, `zh`, `en`, `ja`, `es-mx`, `id`, `pt-br`; unset means mixed bilingual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_language: Option<String>,
    /// 0.5~2
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loudness_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolcengineRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reqid: Option<String>,
    /// `ssml` to send SSML input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_type: Option<String>,
    /// 0~30000 ms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub silence_duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_markdown_filter: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_latex_tone: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_config: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_cache: Option<bool>,
}

/// Volcengine adapter. `api_key` is the speech service token.
#[derive(Debug, Clone)]
pub struct UnVolcengine {
    endpoint: Endpoint,
}

impl UnVolcengine {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(Backend::Volcengine.id(), api_key.into(), base_url.into()),
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

    /// Build the gateway `extraBody` from grouped options.
    ///
    /// `app` is always present with `token` set to the API key and `appid`
    /// taken from `app.appId`. The other groups are emitted only when set.
    /// Every key in the result is snake_case.
    pub fn normalize(&self, options: &VolcengineOptions) -> Result<Map<String, Value>> {
        let mut app = match &options.app {
            Some(app) => options_to_extra_body(app)?,
            None => Map::new(),
        };
        app.remove("app_id");
        if let Some(app_id) = options.app.as_ref().and_then(|a| a.app_id.as_ref()) {
            app.insert("appid".into(), Value::String(app_id.clone()));
        }
        app.insert("token".into(), Value::String(self.endpoint.api_key().to_string()));

        let mut extra_body = Map::new();
        extra_body.insert("app".into(), Value::Object(app));
        if let Some(user) = &options.user {
            extra_body.insert("user".into(), serde_json::to_value(user)?);
        }
        if let Some(audio) = &options.audio {
            extra_body.insert("audio".into(), serde_json::to_value(audio)?);
        }
        if let Some(request) = &options.request {
            extra_body.insert("request".into(), serde_json::to_value(request)?);
        }

        Ok(map_keys_to_snake_case(extra_body))
    }

    pub fn capabilities(self) -> Capabilities<VolcengineOptions, VolcengineOptions> {
        let this = Arc::new(self);
        Capabilities::<VolcengineOptions, VolcengineOptions>::new()
            .with_speech(this.clone())
            .with_voice(this)
    }
}

impl SpeechProvider for UnVolcengine {
    type Options = VolcengineOptions;

    /// Only `v1` is currently served.
    fn speech(&self, model: &str, options: Option<&VolcengineOptions>) -> Result<RequestParams> {
        let extra_body = options.map(|o| self.normalize(o)).transpose()?;
        Ok(self
            .endpoint
            .speech(Backend::Volcengine.prefix_model(model), extra_body))
    }
}

impl VoiceProvider for UnVolcengine {
    type Options = VolcengineOptions;

    fn voice(&self, options: Option<&VolcengineOptions>) -> Result<RequestParams> {
        let extra_body = options.map(|o| self.normalize(o)).transpose()?;
        Ok(self
            .endpoint
            .voice(provider_query(Backend::Volcengine), extra_body))
    }
}

/// Volcengine capabilities (speech + voice).
pub fn create_un_volcengine(
    api_key: impl Into<String>,
    base_url: impl Into<String>,
) -> Capabilities<VolcengineOptions, VolcengineOptions> {
    UnVolcengine::new(api_key, base_url).capabilities()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn adapter() -> UnVolcengine {
        UnVolcengine::with_default_base_url("K")
    }

    #[test]
    fn test_app_gets_appid_and_token() {
        let options = VolcengineOptions {
            app: Some(VolcengineApp {
                app_id: Some("X".into()),
                cluster: None,
            }),
            ..Default::default()
        };
        let body = adapter().normalize(&options).unwrap();
        assert_eq!(body["app"], json!({"appid": "X", "token": "K"}));
        assert_eq!(body.len(), 1);
    }

    #[test]
    fn test_app_is_emitted_without_app_block() {
        let options = VolcengineOptions {
            user: Some(VolcengineUser { uid: Some("u-1".into()) }),
            ..Default::default()
        };
        let body = adapter().normalize(&options).unwrap();
        assert_eq!(body["app"], json!({"token": "K"}));
        assert_eq!(body["user"], json!({"uid": "u-1"}));
        assert!(!body.contains_key("audio"));
        assert!(!body.contains_key("request"));
    }

    #[test]
    fn test_groups_are_snake_cased_recursively() {
        let options: VolcengineOptions = serde_json::from_value(json!({
            "app": {"appId": "X", "cluster": "volcano_tts"},
            "audio": {"enableEmotion": true, "emotionScale": 4.0, "speedRatio": 1.2, "bitRate": 160},
            "request": {"textType": "ssml", "cacheConfig": {"textType": 1, "useCache": true}}
        }))
        .unwrap();
        let body = adapter().normalize(&options).unwrap();
        assert_eq!(
            Value::Object(body),
            json!({
                "app": {"appid": "X", "cluster": "volcano_tts", "token": "K"},
                "audio": {"enable_emotion": true, "emotion_scale": 4.0, "speed_ratio": 1.2, "bit_rate": 160},
                "request": {"text_type": "ssml", "cache_config": {"text_type": 1, "use_cache": true}}
            })
        );
    }

    #[test]
    fn test_speech_without_options_has_no_extra_body() {
        let params = adapter().speech("v1", None).unwrap();
        assert_eq!(params.model.as_deref(), Some("volcengine/v1"));
        assert!(params.extra_body.is_none());
        assert_eq!(params.base_url, DEFAULT_BASE_URL);
        let v = serde_json::to_value(&params).unwrap();
        assert!(v.get("extraBody").is_none());
    }

    #[test]
    fn test_speech_model_prefix_is_idempotent() {
        let params = adapter().speech("volcengine/v1", None).unwrap();
        assert_eq!(params.model.as_deref(), Some("volcengine/v1"));
    }

    #[test]
    fn test_voice_is_stable_and_trimmed() {
        let caps = create_un_volcengine("K", "http://localhost:5933/v1");
        let first = caps.voice(None).unwrap();
        let second = caps.voice(None).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.base_url, "http://localhost:5933/");
        assert_eq!(first.query.as_deref(), Some("provider=volcengine"));
        assert!(first.extra_body.is_none());
    }

    #[test]
    fn test_voice_carries_normalized_options() {
        let options = VolcengineOptions {
            app: Some(VolcengineApp {
                app_id: Some("X".into()),
                cluster: None,
            }),
            ..Default::default()
        };
        let params = adapter().voice(Some(&options)).unwrap();
        assert_eq!(params.extra_body.unwrap()["app"]["appid"], "X");
    }
}
