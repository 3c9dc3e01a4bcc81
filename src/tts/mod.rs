//! TTS（文字转语音）模块：通过 UnSpeech 网关的 `audio/speech` 接口合成音频。

mod client;
mod types;

pub use client::{generate_speech, speech_body, SPEECH_PATH};
pub use types::{AudioFormat, AudioOutput, SpeechRequest};
