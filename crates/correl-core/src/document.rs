//! Output document: node list plus sparse upper-triangle correlations.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::OUTPUT_INDENT;
use crate::errors::WriteError;

/// String-keyed map that remembers insertion order.
///
/// Re-inserting an existing key replaces its value in place; the key keeps
/// the position of its first insertion. Serializes as an object in that order.
#[derive(Debug, Clone)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
    index: FxHashMap<String, usize>,
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Insert or replace `key`, returning the previous value.
    pub fn insert(&mut self, key: String, value: V) -> Option<V> {
        match self.index.get(&key).copied() {
            Some(pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Insert or replace `key` and hand back the stored value.
    pub fn insert_mut(&mut self, key: String, value: V) -> &mut V {
        let pos = match self.index.get(&key).copied() {
            Some(pos) => {
                self.entries[pos].1 = value;
                pos
            }
            None => {
                let pos = self.entries.len();
                self.index.insert(key.clone(), pos);
                self.entries.push((key, value));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

// Order-sensitive: two maps with the same entries in a different order differ.
impl<V: PartialEq> PartialEq for OrderedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = OrderedMap::new();
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    map.insert(key, value);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Row node name to (column node name to value).
pub type Correlations = OrderedMap<OrderedMap<f64>>;

/// The converted document: `{ "nodes": [...], "correlations": {...} }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<String>,
    pub correlations: Correlations,
}

impl Document {
    /// Value recorded for the pair `(row, column)`, if any.
    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        self.correlations.get(row)?.get(column).copied()
    }

    /// Total number of retained pairwise entries.
    pub fn entry_count(&self) -> usize {
        self.correlations.values().map(OrderedMap::len).sum()
    }

    /// Serialize as pretty JSON with 2-space indentation.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, WriteError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(OUTPUT_INDENT);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(|e| WriteError::Serialize {
            message: e.to_string(),
        })?;
        Ok(buf)
    }

    pub fn to_json_string(&self) -> Result<String, WriteError> {
        let bytes = self.to_json_bytes()?;
        String::from_utf8(bytes).map_err(|e| WriteError::Serialize {
            message: e.to_string(),
        })
    }

    /// Serialize fully in memory, then create `path` and write it.
    ///
    /// Nothing touches the filesystem unless serialization succeeded.
    pub fn write_to_path(&self, path: &Path) -> Result<(), WriteError> {
        let bytes = self.to_json_bytes()?;
        std::fs::write(path, &bytes).map_err(|source| WriteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "document written");
        Ok(())
    }

    /// Parse a previously written document.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
