//! Untyped signal bag as it arrives from a URL or a JSON request

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::answers::AnswerSet;

/// A single raw value.
///
/// Query strings may repeat a key; JSON callers may send an array. Anything
/// that is neither a string nor an array of strings is kept as `Other` so that
/// deserialization of an object never fails; it normalizes to absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    One(String),
    Many(Vec<String>),
    Other(Value),
}

impl RawValue {
    /// Returns the value that counts: the string itself, or the first element.
    pub fn first(&self) -> Option<&str> {
        match self {
            RawValue::One(v) => Some(v.as_str()),
            RawValue::Many(vs) => vs.first().map(String::as_str),
            RawValue::Other(_) => None,
        }
    }
}

/// Raw key/value bag, keys unvalidated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSignals(BTreeMap<String, RawValue>);

impl RawSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value under `key`. A repeated key keeps every value in arrival
    /// order; only the first one is ever read.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        let key = key.into();
        match self.0.remove(&key) {
            None | Some(RawValue::Other(_)) => {
                self.0.insert(key, RawValue::One(value));
            }
            Some(RawValue::One(existing)) => {
                self.0.insert(key, RawValue::Many(vec![existing, value]));
            }
            Some(RawValue::Many(mut existing)) => {
                existing.push(value);
                self.0.insert(key, RawValue::Many(existing));
            }
        }
    }

    /// Parses a form-urlencoded query string. A leading `?` is tolerated.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        url::form_urlencoded::parse(query.as_bytes())
            .fold(Self::new(), |mut raw, (k, v)| {
                raw.push(k.into_owned(), v.into_owned());
                raw
            })
    }

    /// First value for `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(RawValue::first)
    }

    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawSignals
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |mut raw, (k, v)| {
            raw.push(k, v);
            raw
        })
    }
}

impl From<&AnswerSet> for RawSignals {
    fn from(answers: &AnswerSet) -> Self {
        answers.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_key_keeps_first() {
        let raw = RawSignals::from_query("scalp=oily&scalp=normal");
        assert_eq!(raw.first("scalp"), Some("oily"));
        assert!(matches!(raw.get("scalp"), Some(RawValue::Many(v)) if v.len() == 2));
    }

    #[test]
    fn test_query_decoding() {
        let raw = RawSignals::from_query("?scene=rush-morning&note=a%20b&empty=");
        assert_eq!(raw.first("scene"), Some("rush-morning"));
        assert_eq!(raw.first("note"), Some("a b"));
        assert_eq!(raw.first("empty"), Some(""));
        assert_eq!(raw.first("missing"), None);
    }

    #[test]
    fn test_json_shapes() {
        let raw: RawSignals = serde_json::from_str(
            r#"{"q1":"A","q2":["B","C"],"q3":null,"q4":7,"q5":[]}"#,
        )
        .unwrap();
        assert_eq!(raw.first("q1"), Some("A"));
        assert_eq!(raw.first("q2"), Some("B"));
        assert_eq!(raw.first("q3"), None);
        assert_eq!(raw.first("q4"), None);
        assert_eq!(raw.first("q5"), None);
    }
}
