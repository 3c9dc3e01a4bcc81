//! URL helpers: version-segment trimming, relative joins and query strings.

use crate::{Error, ErrorContext, Result};
use url::{form_urlencoded, Url};

/// Default UnSpeech instance URL (the OpenAI-compatible `v1` root).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5933/v1/";

/// Drop a trailing `v1/` or `v1` path segment.
///
/// The voice-listing endpoint lives one segment above the OpenAI-compatible
/// `v1` speech root. Only a whole segment is removed, so `.../apiv1` is kept.
/// Applying the function twice yields the same value as applying it once.
pub fn trim_version_suffix(base_url: &str) -> String {
    for suffix in ["/v1/", "/v1"] {
        if let Some(stripped) = base_url.strip_suffix(suffix) {
            return format!("{}/", stripped);
        }
    }
    base_url.to_string()
}

/// Resolve `path` against `base_url`, treating the base as a directory.
pub fn join_url(base_url: &str, path: &str) -> Result<Url> {
    let base = if base_url.ends_with('/') {
        Url::parse(base_url)
    } else {
        Url::parse(&format!("{}/", base_url))
    };
    let base = base.map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid base URL: {}", e),
            ErrorContext::new()
                .with_field_path("baseURL")
                .with_details(base_url),
        )
    })?;
    base.join(path.trim_start_matches('/')).map_err(|e| {
        Error::configuration_with_context(
            format!("Invalid request path: {}", e),
            ErrorContext::new().with_details(path),
        )
    })
}

/// Form-encode ordered key/value pairs (`a=1&b=2`).
pub fn query_string<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        serializer.append_pair(k, v);
    }
    serializer.finish()
}
