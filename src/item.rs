//! Selectable item values and identity derivation
//!
//! Items are opaque application values: plain text, a number, or a
//! structured record. Selection identity (the key) and the display label
//! are derived from a record field chosen by name, falling back to the
//! item's own textual form when the field is missing or unusable.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// An application-supplied selectable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// Plain numeric item
    Number(i64),
    /// Plain text item
    Text(String),
    /// Structured record with named fields
    Record(Map<String, Value>),
}

impl Item {
    /// Build a record item from field pairs
    #[must_use]
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Look up a record field by name
    ///
    /// Returns `None` for primitive items.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            Self::Record(map) => map.get(name),
            Self::Number(_) | Self::Text(_) => None,
        }
    }

    /// Textual value of a record field, if present and usable as identity
    ///
    /// A field counts only when it is a non-empty string or a number.
    /// Numeric zero is a valid key; an empty string is treated as absent.
    fn text_field(&self, name: &str) -> Option<String> {
        match self.field(name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Derive the selection key under the configured key attribute
    ///
    /// Uses the named field when it yields a usable value, otherwise the
    /// item's own textual form.
    #[must_use]
    pub fn key_under(&self, key_attr: &str) -> String {
        self.text_field(key_attr)
            .unwrap_or_else(|| self.fallback_text())
    }

    /// Derive the display label under the configured label attribute
    #[must_use]
    pub fn label_under(&self, label_attr: &str) -> String {
        self.text_field(label_attr)
            .unwrap_or_else(|| self.fallback_text())
    }

    /// The item's own textual form, used when no field applies
    ///
    /// Records render as compact JSON so that distinct records stay
    /// distinct as keys.
    #[must_use]
    pub fn fallback_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Record(map) => Value::Object(map.clone()).to_string(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fallback_text())
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for Item {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_field_key() {
        let item = Item::record([("id", json!(5)), ("label", json!("x"))]);
        assert_eq!(item.key_under("id"), "5");
        assert_eq!(item.label_under("label"), "x");
    }

    #[test]
    fn test_primitive_fallback() {
        let item = Item::from("foo");
        assert_eq!(item.key_under("id"), "foo");
        assert_eq!(item.label_under("label"), "foo");

        let item = Item::from(42);
        assert_eq!(item.key_under("id"), "42");
    }

    #[test]
    fn test_missing_field_falls_back() {
        let item = Item::record([("name", json!("a"))]);
        let fallback = item.fallback_text();
        assert_eq!(item.key_under("id"), fallback);
    }

    #[test]
    fn test_zero_is_a_valid_key() {
        let item = Item::record([("id", json!(0))]);
        assert_eq!(item.key_under("id"), "0");
    }

    #[test]
    fn test_empty_string_field_is_absent() {
        let item = Item::record([("id", json!("")), ("label", json!("x"))]);
        assert_eq!(item.key_under("id"), item.fallback_text());
    }

    #[test]
    fn test_untagged_json_shapes() {
        let items: Vec<Item> =
            serde_json::from_str(r#"["foo", 7, {"id": 1, "label": "one"}]"#).unwrap();
        assert_eq!(items[0], Item::from("foo"));
        assert_eq!(items[1], Item::from(7));
        assert_eq!(items[2].key_under("id"), "1");
        assert_eq!(items[2].label_under("label"), "one");
    }
}
