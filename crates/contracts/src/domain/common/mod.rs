//! Helpers shared by the category and meal records.
//!
//! TheMealDB sends optional text as `null`, `""` or whitespace
//! interchangeably, so every optional field goes through [`non_blank`].

use serde::{Deserialize, Deserializer};

/// Trimmed text, or `None` when the value is missing or blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Deserializes a payload key that may be absent, `null`, or not an array at
/// all into an optional list. Anything unexpected becomes `None`, and array
/// items that don't fit `T` are skipped one by one.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| serde_json::from_value(item).ok())
                .collect(),
        ),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  Salt ")), Some("Salt".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(Some("")), None);
        assert_eq!(non_blank(None), None);
    }

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "lenient_list")]
        items: Option<Vec<Item>>,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    fn items(json: &str) -> Option<Vec<Item>> {
        serde_json::from_str::<Payload>(json).unwrap().items
    }

    #[test]
    fn test_lenient_list_skips_bad_items() {
        assert_eq!(
            items(r#"{"items":[{"id":"1"},{"id":2},"junk",{"id":"3"}]}"#),
            Some(vec![Item { id: "1".into() }, Item { id: "3".into() }])
        );
    }

    #[test]
    fn test_lenient_list_non_array() {
        assert_eq!(items(r#"{"items":null}"#), None);
        assert_eq!(items(r#"{"items":"nope"}"#), None);
        assert_eq!(items(r#"{}"#), None);
    }
}
