//! # unspeech-rust
//!
//! UnSpeech 语音网关的 Rust 客户端：为各语音厂商构建统一的请求描述符。
//!
//! Client SDK for the [UnSpeech](https://github.com/moeru-ai/unspeech) speech
//! gateway. Every backend is reached through one OpenAI-compatible endpoint;
//! this crate turns provider-specific options into the flat request descriptor
//! ([`RequestParams`]) the gateway expects, and optionally performs the call.
//!
//! ## Overview
//!
//! - **Request building is pure**: adapters in [`backends`] map options to
//!   [`RequestParams`] without touching the network
//! - **Capabilities compose**: [`Capabilities::merge`] combines speech, voice
//!   and metadata slots, later providers winning
//! - **Transport is pluggable**: [`list_voices`] and [`generate_speech`] run
//!   over any [`Transport`]; [`HttpTransport`] is the `reqwest` default
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use unspeech_rust::{create_un_microsoft, list_voices, HttpTransport, MicrosoftVoiceOptions};
//!
//! #[tokio::main]
//! async fn main() -> unspeech_rust::Result<()> {
//!     let microsoft = create_un_microsoft("your-api-key", "http://localhost:5933/v1/");
//!     let params = microsoft.voice(Some(&MicrosoftVoiceOptions::new("eastus")))?;
//!
//!     let transport = HttpTransport::new()?;
//!     for voice in list_voices(&transport, &params).await? {
//!         println!("{} ({})", voice.name, voice.id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`backends`] | Per-vendor adapters and the gateway façade |
//! | [`provider`] | Capability traits, [`Backend`] ids and [`Capabilities`] merging |
//! | [`types`] | Request descriptor and voice records |
//! | [`utils`] | Case conversion and URL helpers |
//! | [`transport`] | HTTP transport |
//! | [`voices`] | Voice listing |
//! | [`tts`] | Speech synthesis |
//! | [`config`] | Client configuration |

pub mod backends;
pub mod config;
pub mod provider;
pub mod transport;
pub mod tts;
pub mod types;
pub mod utils;
pub mod voices;

// Re-export main types for convenience
pub use backends::{
    create_un_alibaba_cloud, create_un_deepgram, create_un_elevenlabs, create_un_microsoft,
    create_un_volcengine, create_unspeech, AlibabaCloudOptions, DeepgramOptions,
    ElevenLabsOptions, ElevenLabsVoiceSettings, MicrosoftOptions, MicrosoftVoiceOptions,
    UnAlibabaCloud, UnDeepgram, UnElevenLabs, UnMicrosoft, UnSpeech, UnSpeechOptions,
    UnVolcengine, VoiceOptions, VolcengineApp, VolcengineAudio, VolcengineOptions,
    VolcengineRequest, VolcengineUser,
};
pub use config::ClientConfig;
pub use provider::{
    Backend, Capabilities, Capability, MetadataProvider, SpeechProvider, VoiceProvider,
};
pub use transport::{HttpTransport, Transport, TransportError};
pub use tts::{generate_speech, AudioFormat, AudioOutput, SpeechRequest};
pub use types::{ProviderMetadata, RequestParams, Voice};
pub use voices::list_voices;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
