use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::key::Key;
use crate::merge::Merge;

pub mod nonblocking;

/// A mapping from [`Key`] to values of one element type, with array-style
/// traversal helpers on top.
///
/// The backing map is insertion-ordered, and that order is a guarantee:
/// iteration, the `index` handed to callbacks, [`get_as_array`] and the
/// winner of "first match" operations all follow the order entries were
/// inserted. `delete` preserves the order of the remaining entries.
///
/// Transformations (`map`, `filter`, `find_all` and their async variants)
/// build a brand new collection and never touch the receiver; only `set`,
/// `delete` and `update` mutate in place.
///
/// [`get_as_array`]: KeyedCollection::get_as_array
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyedCollection<T> {
    items: IndexMap<Key, T>,
}

impl<T> KeyedCollection<T> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Wraps an existing map. The map is moved in, not copied.
    pub fn from_items(items: IndexMap<Key, T>) -> Self {
        Self { items }
    }

    // Start of setters, getters, updaters, and get-infoers.

    /// Returns the value at `key`, or `None` if there is no entry.
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&T> {
        self.items.get(&key.into())
    }

    /// Sets the value at `key`, overwriting any previously-existing value.
    pub fn set<K: Into<Key>>(&mut self, key: K, value: T) {
        self.items.insert(key.into(), value);
    }

    /// Removes the entry at `key`. Does nothing if there is no entry.
    pub fn delete<K: Into<Key>>(&mut self, key: K) {
        self.items.shift_remove(&key.into());
    }

    /// Returns true if an entry exists at `key`.
    ///
    /// Presence is a property of the key alone; a stored default such as
    /// an empty string or zero still counts as present.
    pub fn has<K: Into<Key>>(&self, key: K) -> bool {
        self.items.contains_key(&key.into())
    }

    /// Merges `patch` onto the value at `key` in place, field by field.
    /// Does nothing if there is no entry at `key`.
    pub fn update<K: Into<Key>>(&mut self, key: K, patch: T::Patch)
    where
        T: Merge,
    {
        if let Some(item) = self.items.get_mut(&key.into()) {
            item.merge(patch);
        }
    }

    /// Returns the values as a vector, in insertion order.
    pub fn get_as_array(&self) -> Vec<&T> {
        self.items.values().collect()
    }

    /// Number of entries.
    pub fn get_length(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.items.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &T)> {
        self.items.iter()
    }

    // Start of traversal helpers.

    /// Returns true if every value passes the callback's check. True on an
    /// empty collection; stops at the first failure.
    pub fn every<F>(&self, mut callback: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        for (index, item) in self.items.values().enumerate() {
            if !callback(item, index) {
                return false;
            }
        }

        true
    }

    /// Returns true if at least one value passes the callback's check.
    /// False on an empty collection; stops at the first match.
    pub fn some<F>(&self, mut callback: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        for (index, item) in self.items.values().enumerate() {
            if callback(item, index) {
                return true;
            }
        }

        false
    }

    /// Same check as [`some`](KeyedCollection::some), kept as its own
    /// method for contract compatibility.
    pub fn includes<F>(&self, callback: F) -> bool
    where
        F: FnMut(&T, usize) -> bool,
    {
        self.some(callback)
    }

    /// Returns a new collection containing only the entries whose value
    /// passes the callback's check. Always returns a collection, possibly
    /// an empty one.
    pub fn filter<F>(&self, mut callback: F) -> KeyedCollection<T>
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        let mut kept = IndexMap::new();

        for (index, (key, item)) in self.items.iter().enumerate() {
            if callback(item, index) {
                kept.insert(key.clone(), item.clone());
            }
        }

        KeyedCollection { items: kept }
    }

    /// Returns the first value, in insertion order, that passes the
    /// callback's check. Stops at the first match.
    pub fn find<F>(&self, mut callback: F) -> Option<&T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        for (index, item) in self.items.values().enumerate() {
            if callback(item, index) {
                return Some(item);
            }
        }

        None
    }

    /// Returns a new collection of every entry whose value passes the
    /// callback's check, or `None` when nothing matches. Unlike
    /// [`filter`](KeyedCollection::filter), zero matches yields `None`
    /// rather than an empty collection.
    pub fn find_all<F>(&self, callback: F) -> Option<KeyedCollection<T>>
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        let found = self.filter(callback);

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// Invokes the callback once per value, in insertion order, for its
    /// side effects.
    pub fn for_each<F>(&self, mut callback: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, item) in self.items.values().enumerate() {
            callback(item, index);
        }
    }

    /// Returns a new collection with the same keys, each value replaced by
    /// the callback's result. The callback returns the same element type;
    /// this is a deliberate constraint of the contract, not an oversight.
    pub fn map<F>(&self, mut callback: F) -> KeyedCollection<T>
    where
        F: FnMut(&T, usize) -> T,
    {
        let mut mapped = IndexMap::new();

        for (index, (key, item)) in self.items.iter().enumerate() {
            mapped.insert(key.clone(), callback(item, index));
        }

        KeyedCollection { items: mapped }
    }
}

impl<T> Default for KeyedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<IndexMap<Key, T>> for KeyedCollection<T> {
    fn from(items: IndexMap<Key, T>) -> Self {
        Self::from_items(items)
    }
}

impl<K: Into<Key>, T> FromIterator<(K, T)> for KeyedCollection<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(entries: I) -> Self {
        Self {
            items: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl<K: Into<Key>, T, const N: usize> From<[(K, T); N]> for KeyedCollection<T> {
    fn from(entries: [(K, T); N]) -> Self {
        entries.into_iter().collect()
    }
}
