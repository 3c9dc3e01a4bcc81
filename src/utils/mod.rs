//! Pure helpers shared by the provider adapters and the transport.

pub mod case;
pub mod url;

pub use self::case::{camel_to_snake, keys_to_snake_case, map_keys_to_snake_case};
pub use self::url::{join_url, query_string, trim_version_suffix, DEFAULT_BASE_URL};
