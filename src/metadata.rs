//! Ordered metadata.
//!
//! Tokens and documents carry a `key -> [values]` mapping where both the key order
//! and the value order are kept as inserted.
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Holds `key -> values` pairs.
///
/// Keys are unique and keep their insertion order.
/// Equality is structural: two [Meta] are equal if they hold the same keys
/// with the same values, regardless of key order.
#[derive(Debug, Clone, Default)]
pub struct Meta {
    entries: Vec<(String, Vec<String>)>,
}

impl Meta {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Get values associated with `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.position(key).map(|idx| self.entries[idx].1.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Replace the values of `key`, returning the previous ones.
    ///
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx].1, values)),
            None => {
                self.entries.push((key, values));
                None
            }
        }
    }

    /// Append a single value to `key`, creating it if needed.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.position(&key) {
            Some(idx) => self.entries[idx].1.push(value.into()),
            None => self.entries.push((key, vec![value.into()])),
        }
    }

    /// Union `other` into `self`.
    ///
    /// Values that are not already present are appended (in `other`'s order),
    /// unknown keys are appended at the end.
    pub fn merge(&mut self, other: &Meta) {
        for (key, values) in other.iter() {
            match self.position(key) {
                Some(idx) => {
                    let current = &mut self.entries[idx].1;
                    for value in values {
                        if !current.contains(value) {
                            current.push(value.clone());
                        }
                    }
                }
                None => self.entries.push((key.to_string(), values.to_vec())),
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Meta {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, values)| other.get(key) == Some(values))
    }
}

impl Eq for Meta {}

impl<K, V> FromIterator<(K, V)> for Meta
where
    K: Into<String>,
    V: IntoIterator,
    V::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut meta = Meta::new();
        for (key, values) in iter {
            meta.insert(key, values.into_iter().map(Into::into).collect());
        }
        meta
    }
}

impl Serialize for Meta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, values) in self.iter() {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

struct MetaVisitor;

impl<'de> Visitor<'de> for MetaVisitor {
    type Value = Meta;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of string keys to lists of strings")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Meta, M::Error> {
        let mut meta = Meta::new();
        while let Some((key, values)) = access.next_entry::<String, Vec<String>>()? {
            meta.insert(key, values);
        }
        Ok(meta)
    }
}

impl<'de> Deserialize<'de> for Meta {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MetaVisitor)
    }
}
