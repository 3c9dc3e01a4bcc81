//! camelCase → snake_case conversion for provider option envelopes.

use serde_json::{Map, Value};

/// Convert a camelCase identifier to snake_case.
///
/// Every ASCII uppercase letter after the first character becomes `_` plus its
/// lowercase form; a leading uppercase letter is only lowercased. Keys that are
/// already snake_case pass through unchanged.
pub fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, ch) in s.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Recursively rename every object key in `value` to snake_case.
///
/// Arrays are walked element by element; scalar values are left untouched.
pub fn keys_to_snake_case(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(map_keys_to_snake_case(map)),
        Value::Array(items) => Value::Array(items.into_iter().map(keys_to_snake_case).collect()),
        other => other,
    }
}

/// Same as [`keys_to_snake_case`] for an already-unwrapped object.
pub fn map_keys_to_snake_case(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(k, v)| (camel_to_snake(&k), keys_to_snake_case(v)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_camel_to_snake() {
        assert_eq!(camel_to_snake("appId"), "app_id");
        assert_eq!(camel_to_snake("enableEmotion"), "enable_emotion");
        assert_eq!(camel_to_snake("disableMarkdownFilter"), "disable_markdown_filter");
        assert_eq!(camel_to_snake("appid"), "appid");
        assert_eq!(camel_to_snake("already_snake"), "already_snake");
        assert_eq!(camel_to_snake("Region"), "region");
        assert_eq!(camel_to_snake(""), "");
    }

    #[test]
    fn test_keys_to_snake_case_nested() {
        let input = json!({
            "audio": {"speedRatio": 1.2, "bitRate": 160},
            "request": {"cacheConfig": {"textType": 1, "useCache": true}},
            "list": [{"innerKey": "keepValueCase"}]
        });
        let out = keys_to_snake_case(input);
        assert_eq!(
            out,
            json!({
                "audio": {"speed_ratio": 1.2, "bit_rate": 160},
                "request": {"cache_config": {"text_type": 1, "use_cache": true}},
                "list": [{"inner_key": "keepValueCase"}]
            })
        );
    }

    #[test]
    fn test_scalars_are_untouched() {
        assert_eq!(keys_to_snake_case(json!("camelCase")), json!("camelCase"));
        assert_eq!(keys_to_snake_case(json!(42)), json!(42));
    }
}
