//! Flat, string-keyed URL parameter store

use std::collections::BTreeMap;
use std::fmt;

use crate::codec::{self, RESERVED_KEYS};
use crate::query_state::QueryState;

/// Query-string parameters of a list route.
///
/// Keys are unique; the last occurrence wins when parsing a query string
/// with repeated keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams(BTreeMap<String, String>);

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without the leading `?`
    pub fn try_parse(query: &str) -> Result<Self, serde_urlencoded::de::Error> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(Self(pairs.into_iter().collect()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Re-encode `state` over these params, keeping keys the codec does not own
    pub fn with_state(&self, state: &QueryState) -> Self {
        let mut next: BTreeMap<String, String> = self
            .0
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        next.extend(codec::encode(state).0);
        Self(next)
    }

    /// Percent-encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}

/// Lenient parse for router query segments: malformed input yields no params
impl From<&str> for ListParams {
    fn from(query: &str) -> Self {
        Self::try_parse(query).unwrap_or_default()
    }
}

impl fmt::Display for ListParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl FromIterator<(String, String)> for ListParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_serialize() {
        let params = ListParams::from("?page=2&q=red%20shoes&per=25");
        assert_eq!(params.get("page"), Some("2"));
        assert_eq!(params.get("q"), Some("red shoes"));
        let reparsed = ListParams::from(params.to_query_string().as_str());
        assert_eq!(reparsed, params);
    }

    #[test]
    fn test_json_value_survives_encoding() {
        let mut params = ListParams::new();
        params.insert("filter", r#"{"code":{"contains":"a&b=c"}}"#);
        let query = params.to_string();
        assert!(!query.contains('{'));
        assert_eq!(
            ListParams::from(query.as_str()).get("filter"),
            Some(r#"{"code":{"contains":"a&b=c"}}"#)
        );
    }

    #[test]
    fn test_empty_query() {
        assert!(ListParams::from("").is_empty());
        assert!(ListParams::from("?").is_empty());
        assert_eq!(ListParams::new().to_string(), "");
    }

    #[test]
    fn test_with_state_keeps_foreign_keys() {
        let params = ListParams::from("tab=drafts&page=7&q=old");
        let state = QueryState::new(10).with_search("new");
        let next = params.with_state(&state);
        assert_eq!(next.get("tab"), Some("drafts"));
        assert_eq!(next.get("q"), Some("new"));
        // page 1 is the default and is not written
        assert_eq!(next.get("page"), None);
    }
}
