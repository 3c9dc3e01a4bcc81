//! Speech synthesis through the gateway.

use super::types::{AudioFormat, AudioOutput, SpeechRequest};
use crate::transport::Transport;
use crate::types::RequestParams;
use crate::utils::join_url;
use crate::{Error, ErrorContext, Result};
use serde_json::{json, Value};

/// OpenAI-compatible speech path, relative to the speech base URL.
pub const SPEECH_PATH: &str = "audio/speech";

/// Build the JSON body for `audio/speech`.
///
/// Provider options travel untouched under `extra_body`.
pub fn speech_body(params: &RequestParams, request: &SpeechRequest) -> Result<Value> {
    let model = params
        .model
        .as_deref()
        .filter(|m| !m.is_empty())
        .ok_or_else(|| {
            Error::validation_with_context(
                "speech requests need a model",
                ErrorContext::new().with_field_path("model").with_source("tts"),
            )
        })?;

    let mut body = json!({
        "model": model,
        "input": request.input,
        "voice": request.voice,
    });
    if let Some(format) = request.response_format {
        body["response_format"] = Value::String(format.as_str().to_string());
    }
    if let Some(speed) = request.speed {
        body["speed"] = json!(speed);
    }
    if let Some(extra) = &params.extra_body {
        body["extra_body"] = Value::Object(extra.clone());
    }
    Ok(body)
}

/// `POST {baseURL}/audio/speech` and return the synthesized audio.
///
/// The format is the requested one, else whatever the `Content-Type` says,
/// else mp3.
pub async fn generate_speech<T>(
    transport: &T,
    params: &RequestParams,
    request: &SpeechRequest,
) -> Result<AudioOutput>
where
    T: Transport + ?Sized,
{
    let body = speech_body(params, request)?;
    let url = join_url(&params.base_url, SPEECH_PATH)?;
    let response = transport.post_json(url, &params.api_key, &body).await?;

    let format = request
        .response_format
        .or_else(|| {
            response
                .content_type
                .as_deref()
                .and_then(AudioFormat::from_mime)
        })
        .unwrap_or_default();

    tracing::debug!(bytes = response.data.len(), format = format.as_str(), "speech generated");
    Ok(AudioOutput {
        data: response.data,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    #[test]
    fn test_body_minimal() {
        let params = RequestParams::new("k", "http://localhost:5933/v1/").with_model("deepgram/aura-asteria-en");
        let body = speech_body(&params, &SpeechRequest::new("hello", "aura-asteria-en")).unwrap();
        assert_eq!(
            body,
            json!({"model": "deepgram/aura-asteria-en", "input": "hello", "voice": "aura-asteria-en"})
        );
    }

    #[test]
    fn test_body_with_options() {
        let mut extra = Map::new();
        extra.insert("sample_rate".into(), json!(24000));
        let params = RequestParams::new("k", "http://localhost:5933/v1/")
            .with_model("microsoft/v1")
            .with_extra_body(Some(extra));
        let request = SpeechRequest::new("hi", "en-US-AriaNeural")
            .with_format(AudioFormat::Wav)
            .with_speed(1.5);
        let body = speech_body(&params, &request).unwrap();
        assert_eq!(body["response_format"], "wav");
        assert_eq!(body["speed"], 1.5);
        assert_eq!(body["extra_body"]["sample_rate"], 24000);
    }

    #[test]
    fn test_body_requires_model() {
        let params = RequestParams::new("k", "http://localhost:5933/v1/");
        let err = speech_body(&params, &SpeechRequest::new("hi", "v")).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert_eq!(err.context().and_then(|c| c.field_path.as_deref()), Some("model"));
    }
}
