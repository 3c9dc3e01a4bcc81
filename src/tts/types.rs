//! Speech synthesis types.

use bytes::Bytes;
use crate::{Error, ErrorContext};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Audio returned by the gateway.
#[derive(Debug, Clone)]
pub struct AudioOutput {
    pub data: Bytes,
    pub format: AudioFormat,
}

impl AudioOutput {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Output formats accepted as `response_format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    #[default]
    Mp3,
    Opus,
    Aac,
    Flac,
    Wav,
    Pcm,
}

impl AudioFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Opus => "opus",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Pcm => "pcm",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Opus => "audio/opus",
            Self::Aac => "audio/aac",
            Self::Flac => "audio/flac",
            Self::Wav => "audio/wav",
            Self::Pcm => "audio/pcm",
        }
    }

    /// Lookup by `Content-Type`, ignoring parameters such as `; codecs=...`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        match essence {
            "audio/mpeg" | "audio/mp3" => Some(Self::Mp3),
            "audio/opus" | "audio/ogg" => Some(Self::Opus),
            "audio/aac" => Some(Self::Aac),
            "audio/flac" => Some(Self::Flac),
            "audio/wav" | "audio/x-wav" | "audio/wave" => Some(Self::Wav),
            "audio/pcm" | "audio/l16" => Some(Self::Pcm),
            _ => None,
        }
    }
}

/// Case-insensitive; unknown names are a validation error.
impl FromStr for AudioFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "mp3" => Ok(Self::Mp3),
            "opus" => Ok(Self::Opus),
            "aac" => Ok(Self::Aac),
            "flac" => Ok(Self::Flac),
            "wav" => Ok(Self::Wav),
            "pcm" => Ok(Self::Pcm),
            _ => Err(Error::validation_with_context(
                format!("Unsupported audio format '{}'", s),
                ErrorContext::new()
                    .with_field_path("response_format")
                    .with_details("expected mp3, opus, aac, flac, wav or pcm"),
            )),
        }
    }
}

/// Per-call synthesis input; model and provider options come from
/// [`RequestParams`](crate::types::RequestParams).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechRequest {
    pub input: String,
    pub voice: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_format: Option<AudioFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
}

impl SpeechRequest {
    pub fn new(input: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            voice: voice.into(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: AudioFormat) -> Self {
        self.response_format = Some(format);
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = Some(speed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        assert_eq!("WAV".parse::<AudioFormat>().unwrap(), AudioFormat::Wav);
        assert_eq!(" mp3 ".parse::<AudioFormat>().unwrap(), AudioFormat::Mp3);
        assert!(matches!(
            "ogg".parse::<AudioFormat>(),
            Err(Error::Validation { .. })
        ));
        assert_eq!(AudioFormat::Opus.as_str(), "opus");
        assert_eq!(serde_json::to_string(&AudioFormat::Flac).unwrap(), "\"flac\"");
    }

    #[test]
    fn test_format_from_mime() {
        assert_eq!(AudioFormat::from_mime("audio/mpeg"), Some(AudioFormat::Mp3));
        assert_eq!(AudioFormat::from_mime("audio/wav; rate=24000"), Some(AudioFormat::Wav));
        assert_eq!(AudioFormat::from_mime("application/json"), None);
    }
}
