//! Voice records returned by the gateway's voice-listing endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A single voice as described by the gateway.
///
/// The gateway owns this shape; anything not modelled here is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<VoiceLanguage>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub formats: Vec<VoiceFormat>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub compatible_models: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_audio_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Voice {
    /// Whether the voice declares support for the given language code.
    pub fn speaks(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code.eq_ignore_ascii_case(code))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceLanguage {
    pub code: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceFormat {
    pub name: String,
    pub extension: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListVoicesResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub voices: Vec<Voice>,
}

/// The gateway encodes empty collections as `null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
