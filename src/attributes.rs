//! Attribute storage for element nodes
//!
//! Keys are unique and case-sensitive. Iteration follows insertion order so
//! serialization is deterministic; equality and hashing ignore order.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;

/// Insertion-ordered `key -> value` map with overwrite-only mutation
#[derive(Debug, Clone, Default)]
pub struct AttributeStore {
    entries: IndexMap<String, String>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; returns the previous value if the key existed
    ///
    /// An overwritten key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Hash of a single entry, independent of the outer hasher's state
    #[inline]
    fn entry_hash(key: &str, value: &str) -> u64 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        value.hash(&mut hasher);
        hasher.finish()
    }
}

// IndexMap equality is already order-independent
impl PartialEq for AttributeStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AttributeStore {}

impl Hash for AttributeStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Commutative combine so insertion order does not matter
        let combined = self
            .iter()
            .fold(0u64, |acc, (k, v)| acc.wrapping_add(Self::entry_hash(k, v)));
        self.len().hash(state);
        combined.hash(state);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = AttributeStore::new();
        for (k, v) in iter {
            store.set(k, v);
        }
        store
    }
}
