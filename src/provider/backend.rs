use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upstream speech backend routed by the gateway.
///
/// Ids are case-sensitive; `azure`, `volcano` and `aliyun` are gateway aliases of
/// `microsoft`, `volcengine` and `alibaba`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    ElevenLabs,
    Koemotion,
    OpenAI,
    Microsoft,
    Azure,
    Deepgram,
    Volcengine,
    Volcano,
    Alibaba,
    Aliyun,
}

impl Backend {
    pub const ALL: [Backend; 10] = [
        Backend::ElevenLabs,
        Backend::Koemotion,
        Backend::OpenAI,
        Backend::Microsoft,
        Backend::Azure,
        Backend::Deepgram,
        Backend::Volcengine,
        Backend::Volcano,
        Backend::Alibaba,
        Backend::Aliyun,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Backend::ElevenLabs => "elevenlabs",
            Backend::Koemotion => "koemotion",
            Backend::OpenAI => "openai",
            Backend::Microsoft => "microsoft",
            Backend::Azure => "azure",
            Backend::Deepgram => "deepgram",
            Backend::Volcengine => "volcengine",
            Backend::Volcano => "volcano",
            Backend::Alibaba => "alibaba",
            Backend::Aliyun => "aliyun",
        }
    }

    /// Prefix `model` with this backend's namespace unless it already carries it.
    pub fn prefix_model(&self, model: &str) -> String {
        let id = self.id();
        match model.strip_prefix(id) {
            Some(rest) if rest.starts_with('/') => model.to_string(),
            _ => format!("{}/{}", id, model),
        }
    }

    /// Resolve the backend namespace of a `backend/model` id.
    pub fn from_model(model: &str) -> Result<(Backend, &str)> {
        match model.split_once('/') {
            Some((ns, name)) if !ns.is_empty() && !name.is_empty() => Ok((ns.parse()?, name)),
            _ => Err(Error::validation(format!(
                "Model '{}' must be namespaced as '<backend>/<model>'",
                model
            ))),
        }
    }
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Backend::ALL
            .iter()
            .copied()
            .find(|b| b.id() == s)
            .ok_or_else(|| Error::unsupported_backend(s))
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
