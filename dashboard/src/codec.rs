//! Conversion between wire maps and the ordered rows the metadata editor works on.

use std::collections::{HashMap, HashSet};

/// One editable `key = value` row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// an unfilled editor row, carries no metadata
    pub fn is_blank(&self) -> bool {
        self.key.is_empty() && self.value.is_empty()
    }
}

/// One editable secret row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SecretName {
    pub name: String,
}

impl SecretName {
    pub fn new<N: Into<String>>(name: N) -> Self {
        SecretName { name: name.into() }
    }
}

/// one row per entry, sorted by key so a conversion is stable
pub fn to_list(mapping: &HashMap<String, String>) -> Vec<KeyValue> {
    let mut list: Vec<KeyValue> = mapping
        .iter()
        .map(|(key, value)| KeyValue::new(key.as_str(), value.as_str()))
        .collect();
    list.sort_by(|a, b| a.key.cmp(&b.key));
    list
}

/// the last row wins on duplicate keys, blank rows are dropped
pub fn to_mapping(list: &[KeyValue]) -> HashMap<String, String> {
    list.iter()
        .filter(|row| !row.is_blank())
        .map(|row| (row.key.clone(), row.value.clone()))
        .collect()
}

pub fn secrets_to_list(secrets: &[String]) -> Vec<SecretName> {
    secrets.iter().map(|name| SecretName::new(name.as_str())).collect()
}

/// secret names in row order, without blanks or repeats
pub fn list_to_secrets(list: &[SecretName]) -> Vec<String> {
    let mut seen = HashSet::new();
    list.iter()
        .map(|row| row.name.trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.to_string()))
        .map(|name| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn round_trip_keeps_every_entry() {
        let cases = vec![
            mapping(&[]),
            mapping(&[("com.openfaas.ui.ext", "png")]),
            mapping(&[("a", "1"), ("b", ""), ("c", "3"), ("topic", "cron-function")]),
        ];
        for m in cases {
            assert_eq!(to_mapping(&to_list(&m)), m);
        }
    }

    #[test]
    fn list_is_sorted_by_key() {
        let list = to_list(&mapping(&[("z", "1"), ("a", "2"), ("m", "3")]));
        let keys: Vec<&str> = list.iter().map(|row| row.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }

    #[test]
    fn last_duplicate_wins() {
        let list = vec![KeyValue::new("k", "first"), KeyValue::new("k", "second")];
        assert_eq!(to_mapping(&list), mapping(&[("k", "second")]));
    }

    #[test]
    fn blank_rows_are_dropped() {
        let list = vec![
            KeyValue::default(),
            KeyValue::new("k", "v"),
            KeyValue::new("", "orphan value"),
            KeyValue::new("flag", ""),
        ];
        assert_eq!(
            to_mapping(&list),
            mapping(&[("k", "v"), ("", "orphan value"), ("flag", "")])
        );
    }

    #[test]
    fn secrets_drop_blanks_and_repeats() {
        let list = vec![
            SecretName::new("db-password"),
            SecretName::default(),
            SecretName::new(" api-key "),
            SecretName::new("db-password"),
        ];
        assert_eq!(
            list_to_secrets(&list),
            vec!["db-password".to_string(), "api-key".to_string()]
        );
        assert_eq!(
            secrets_to_list(&["a".to_string()]),
            vec![SecretName::new("a")]
        );
    }
}
