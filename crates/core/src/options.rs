//! Option mapping types and merge semantics.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single highlighter option value.
///
/// Option values are scalars: switches (`linenos=false`), counts
/// (`linenostart=42`), or free-form text (`linenos=table`). Deserializes
/// untagged, so a `pygments_options` table reads straight into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptValue {
    /// Boolean switch.
    Bool(bool),
    /// Integer option.
    Int(i64),
    /// Free-form text option.
    Str(String),
}

impl OptValue {
    /// Returns the boolean value, if this is a switch.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer value, if this is a number.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            OptValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptValue::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl From<bool> for OptValue {
    fn from(value: bool) -> Self {
        OptValue::Bool(value)
    }
}

impl From<i64> for OptValue {
    fn from(value: i64) -> Self {
        OptValue::Int(value)
    }
}

impl From<&str> for OptValue {
    fn from(value: &str) -> Self {
        OptValue::Str(value.to_string())
    }
}

impl From<String> for OptValue {
    fn from(value: String) -> Self {
        OptValue::Str(value)
    }
}

impl std::fmt::Display for OptValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptValue::Bool(value) => write!(f, "{}", value),
            OptValue::Int(value) => write!(f, "{}", value),
            OptValue::Str(value) => f.write_str(value),
        }
    }
}

/// A mapping of option names to values for one highlight call.
///
/// Value-like and short-lived: built fresh for every tag occurrence, handed
/// to the renderer, then discarded. Iterates sorted by option name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionsMap(BTreeMap<String, OptValue>);

impl OptionsMap {
    /// Empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, returning the previous value for the name if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<OptValue>,
    ) -> Option<OptValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Look up an option by name.
    pub fn get(&self, name: &str) -> Option<&OptValue> {
        self.0.get(name)
    }

    /// Whether an option with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Number of options in the mapping.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the mapping has no options.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate options in name order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, OptValue> {
        self.0.iter()
    }

    /// Overwrite/insert every option from `other` into `self`.
    ///
    /// Last writer wins: names present in `other` replace those in `self`.
    pub fn overlay(&mut self, other: &OptionsMap) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for OptionsMap
where
    K: Into<String>,
    V: Into<OptValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a OptionsMap {
    type Item = (&'a String, &'a OptValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, OptValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Merge site-wide defaults with block-local options.
///
/// Starts from the site-wide mapping and overwrites/inserts every block-local
/// option, so the result carries the union of both and block-local values win
/// on conflicting names.
pub fn merge(site: &OptionsMap, block: &OptionsMap) -> OptionsMap {
    let mut merged = site.clone();
    merged.overlay(block);
    merged
}
