//! 类型模块：网关请求描述符与音色记录。
//!
//! # Types Module
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RequestParams`] | Normalized request descriptor (`apiKey`, `baseURL`, `model`, `extraBody`, `query`) |
//! | [`ProviderMetadata`] | Constant provider tag exposed by the metadata capability |
//! | [`Voice`] | A voice returned by the voice-listing endpoint |
//! | [`ListVoicesResponse`] | `{ voices: [...] }` envelope |

pub mod request;
pub mod voice;

pub use request::{ProviderMetadata, RequestParams};
pub use voice::{ListVoicesResponse, Voice, VoiceFormat, VoiceLanguage};
