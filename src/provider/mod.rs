//! Provider 能力抽象层 — speech / voice / metadata 三类请求构建能力
//!
//! Capability contracts shared by every backend adapter and the gateway façade.
//! Each capability is a pure mapping from caller input to a [`RequestParams`]
//! descriptor; no I/O happens here.

pub mod backend;
pub mod capability;

use crate::types::{ProviderMetadata, RequestParams};
use crate::Result;

pub use backend::Backend;
pub use capability::{
    Capabilities, Capability, SharedMetadata, SharedSpeech, SharedVoice, StaticMetadata,
};

/// Builds one-shot speech synthesis requests.
pub trait SpeechProvider: Send + Sync + std::fmt::Debug {
    /// Provider-specific options accepted alongside the model id.
    type Options;

    fn speech(&self, model: &str, options: Option<&Self::Options>) -> Result<RequestParams>;
}

/// Builds voice-listing requests.
pub trait VoiceProvider: Send + Sync + std::fmt::Debug {
    type Options;

    fn voice(&self, options: Option<&Self::Options>) -> Result<RequestParams>;
}

/// Reports a constant provider tag.
pub trait MetadataProvider: Send + Sync + std::fmt::Debug {
    fn metadata(&self) -> ProviderMetadata;
}
