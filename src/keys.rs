//! Typed view over a loaded key config.
//!
//! Entries are either a bare key string or an object with an `api_key`
//! field. Anything else is kept as raw JSON so nothing in the file is lost.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One provider entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProviderCredential {
    Key(String),
    Detailed(CredentialRecord),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CredentialRecord {
    pub api_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProviderCredential {
    pub fn api_key(&self) -> Option<&str> {
        match self {
            ProviderCredential::Key(key) => Some(key),
            ProviderCredential::Detailed(record) => Some(&record.api_key),
            ProviderCredential::Other(_) => None,
        }
    }
}

/// Provider name to credential, sorted by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiKeys {
    entries: BTreeMap<String, ProviderCredential>,
}

impl ApiKeys {
    /// Build from a loaded mapping. Anything but an object gives an empty set.
    pub fn from_mapping(mapping: &Value) -> Self {
        let Some(object) = mapping.as_object() else {
            return Self::default();
        };

        let entries = object
            .iter()
            .map(|(provider, value)| {
                let credential = serde_json::from_value(value.clone())
                    .unwrap_or_else(|_| ProviderCredential::Other(value.clone()));
                (provider.clone(), credential)
            })
            .collect();

        Self { entries }
    }

    pub fn get(&self, provider: &str) -> Option<&ProviderCredential> {
        self.entries.get(provider)
    }

    pub fn api_key(&self, provider: &str) -> Option<&str> {
        self.get(provider).and_then(ProviderCredential::api_key)
    }

    pub fn providers(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ProviderCredential)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Hide the middle of a key for display.
///
/// Keys of eight characters or fewer are fully starred. Longer keys keep a
/// quarter of their length on each side, capped at four characters.
pub fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let shown = (chars.len() / 4).min(4);
    let head: String = chars[..shown].iter().collect();
    let tail: String = chars[chars.len() - shown..].iter().collect();
    format!("{}…{}", head, tail)
}
