//! Gateway request descriptor produced by every provider capability.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat request descriptor handed to the transport layer.
///
/// Field names follow the gateway SDK convention (`apiKey`, `baseURL`,
/// `extraBody`); optional fields are omitted entirely when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParams {
    pub api_key: String,
    #[serde(rename = "baseURL")]
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Provider-specific body fields, already in snake_case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_body: Option<Map<String, Value>>,
    /// URL query fragment without the leading `?`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl RequestParams {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            model: None,
            extra_body: None,
            query: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_extra_body(mut self, extra_body: Option<Map<String, Value>>) -> Self {
        self.extra_body = extra_body;
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}

/// Constant provider tag exposed by the `metadata` capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub name: String,
}

impl ProviderMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_omits_absent_fields() {
        let params = RequestParams::new("key", "http://localhost:5933/v1/").with_model("deepgram/aura");
        let v = serde_json::to_value(&params).unwrap();
        assert_eq!(
            v,
            json!({
                "apiKey": "key",
                "baseURL": "http://localhost:5933/v1/",
                "model": "deepgram/aura",
            })
        );
        assert!(v.get("extraBody").is_none());
        assert!(v.get("query").is_none());
    }

    #[test]
    fn test_deserialize_gateway_shape() {
        let params: RequestParams = serde_json::from_value(json!({
            "apiKey": "k",
            "baseURL": "http://localhost:5933/",
            "query": "provider=deepgram",
            "extraBody": {"app": {"token": "k"}}
        }))
        .unwrap();
        assert_eq!(params.query.as_deref(), Some("provider=deepgram"));
        assert_eq!(params.model, None);
        assert_eq!(params.extra_body.unwrap()["app"]["token"], "k");
    }
}
