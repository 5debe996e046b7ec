//! Map type stored as parallel key and value lists.
//!
//! Save files store dictionaries as two arrays, `keys` and `values`, rather
//! than as a JSON object. This keeps non-string keys representable. [`SerializableDictionary`] reads and writes that
//! shape and otherwise behaves like a hash map.
//!
//! Deserialization fails when the two lists differ in length or a key
//! appears twice.

use rustc_hash::FxHashMap;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// Hash map serialized as `{ "keys": [...], "values": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializableDictionary<K: Eq + Hash, V> {
    entries: FxHashMap<K, V>,
}

impl<K: Eq + Hash, V> Default for SerializableDictionary<K, V> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<K: Eq + Hash, V> SerializableDictionary<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_inner(self) -> FxHashMap<K, V> {
        self.entries
    }
}

impl<K: Eq + Hash, V> Deref for SerializableDictionary<K, V> {
    type Target = FxHashMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.entries
    }
}

impl<K: Eq + Hash, V> DerefMut for SerializableDictionary<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.entries
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for SerializableDictionary<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[derive(Serialize)]
struct KeyValueListsRef<'a, K, V> {
    keys: Vec<&'a K>,
    values: Vec<&'a V>,
}

#[derive(Deserialize)]
struct KeyValueLists<K, V> {
    keys: Vec<K>,
    values: Vec<V>,
}

impl<K, V> Serialize for SerializableDictionary<K, V>
where
    K: Eq + Hash + Serialize,
    V: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (keys, values) = self.entries.iter().unzip();
        KeyValueListsRef { keys, values }.serialize(serializer)
    }
}

impl<'de, K, V> Deserialize<'de> for SerializableDictionary<K, V>
where
    K: Eq + Hash + Deserialize<'de> + std::fmt::Debug,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let lists = KeyValueLists::<K, V>::deserialize(deserializer)?;
        if lists.keys.len() != lists.values.len() {
            return Err(de::Error::custom(format!(
                "there are {} keys and {} values; both lists must have the same length",
                lists.keys.len(),
                lists.values.len()
            )));
        }

        let mut entries = FxHashMap::default();
        for (key, value) in lists.keys.into_iter().zip(lists.values) {
            if entries.contains_key(&key) {
                return Err(de::Error::custom(format!("duplicate key {:?}", key)));
            }
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }
}
