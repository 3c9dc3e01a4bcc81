//! 能力合并：speech / voice / metadata 三个槽位的显式组合（后者覆盖前者）。
//!
//! Capability composition with explicit, typed slots.
//!
//! A [`Capabilities`] value holds at most one provider per slot. Merging two
//! values is a per-slot union where the right-hand side wins, so the override
//! order is the composition order. Because each slot is typed by its options,
//! composing speech providers that take different option types does not
//! compile instead of being silently overridden.

use super::{MetadataProvider, SpeechProvider, VoiceProvider};
use crate::types::{ProviderMetadata, RequestParams};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Named capability slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Speech,
    Voice,
    Metadata,
}

impl Capability {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Speech => "speech",
            Self::Voice => "voice",
            Self::Metadata => "metadata",
        }
    }
}

pub type SharedSpeech<S> = Arc<dyn SpeechProvider<Options = S>>;
pub type SharedVoice<V> = Arc<dyn VoiceProvider<Options = V>>;
pub type SharedMetadata = Arc<dyn MetadataProvider>;

/// A bag of request-building capabilities resolved at construction time.
pub struct Capabilities<S, V> {
    speech: Option<SharedSpeech<S>>,
    voice: Option<SharedVoice<V>>,
    metadata: Option<SharedMetadata>,
}

impl<S, V> Capabilities<S, V> {
    pub fn new() -> Self {
        Self {
            speech: None,
            voice: None,
            metadata: None,
        }
    }

    pub fn with_speech(mut self, provider: SharedSpeech<S>) -> Self {
        self.speech = Some(provider);
        self
    }

    pub fn with_voice(mut self, provider: SharedVoice<V>) -> Self {
        self.voice = Some(provider);
        self
    }

    pub fn with_metadata(mut self, provider: SharedMetadata) -> Self {
        self.metadata = Some(provider);
        self
    }

    /// Per-slot union; slots present in `other` replace ours.
    pub fn merge(self, other: Self) -> Self {
        Self {
            speech: other.speech.or(self.speech),
            voice: other.voice.or(self.voice),
            metadata: other.metadata.or(self.metadata),
        }
    }

    /// Fold `sources` left to right with [`Capabilities::merge`].
    pub fn merge_all<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        sources.into_iter().fold(Self::new(), Self::merge)
    }

    /// Occupied slots, in declaration order.
    pub fn supported(&self) -> Vec<Capability> {
        let mut caps = Vec::with_capacity(3);
        if self.speech.is_some() {
            caps.push(Capability::Speech);
        }
        if self.voice.is_some() {
            caps.push(Capability::Voice);
        }
        if self.metadata.is_some() {
            caps.push(Capability::Metadata);
        }
        caps
    }

    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::Speech => self.speech.is_some(),
            Capability::Voice => self.voice.is_some(),
            Capability::Metadata => self.metadata.is_some(),
        }
    }

    pub fn speech_provider(&self) -> Option<&SharedSpeech<S>> {
        self.speech.as_ref()
    }

    pub fn voice_provider(&self) -> Option<&SharedVoice<V>> {
        self.voice.as_ref()
    }

    pub fn metadata_provider(&self) -> Option<&SharedMetadata> {
        self.metadata.as_ref()
    }

    pub fn speech(&self, model: &str, options: Option<&S>) -> Result<RequestParams> {
        self.speech
            .as_ref()
            .ok_or(Error::UnsupportedCapability(Capability::Speech.name()))?
            .speech(model, options)
    }

    pub fn voice(&self, options: Option<&V>) -> Result<RequestParams> {
        self.voice
            .as_ref()
            .ok_or(Error::UnsupportedCapability(Capability::Voice.name()))?
            .voice(options)
    }

    pub fn metadata(&self) -> Result<ProviderMetadata> {
        self.metadata
            .as_ref()
            .map(|m| m.metadata())
            .ok_or(Error::UnsupportedCapability(Capability::Metadata.name()))
    }
}

impl<S, V> Default for Capabilities<S, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, V> Clone for Capabilities<S, V> {
    fn clone(&self) -> Self {
        Self {
            speech: self.speech.clone(),
            voice: self.voice.clone(),
            metadata: self.metadata.clone(),
        }
    }
}

impl<S, V> fmt::Debug for Capabilities<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("speech", &self.speech)
            .field("voice", &self.voice)
            .field("metadata", &self.metadata)
            .finish()
    }
}

/// Metadata provider that only reports a fixed name.
#[derive(Debug, Clone)]
pub struct StaticMetadata(pub &'static str);

impl MetadataProvider for StaticMetadata {
    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata::new(self.0)
    }
}
