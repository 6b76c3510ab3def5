//! Async variants of the traversal helpers.
//!
//! Each helper comes in two flavors. `*_async_each` awaits one callback's
//! future at a time, in insertion order, so callback N+1 is never invoked
//! before callback N's result is known; the short-circuiting helpers stop
//! invoking callbacks as soon as the outcome is decided. `*_async_all`
//! invokes the callback for every entry first, joins the whole batch
//! concurrently, then inspects the resolved results in insertion order,
//! so the callback always runs once per entry even when the logical
//! short-circuit would have fired early.

use std::future::Future;

use futures::future::join_all;
use indexmap::IndexMap;

use super::KeyedCollection;

impl<T> KeyedCollection<T> {
    /// Same as [`every`](KeyedCollection::every), awaiting each future one
    /// at a time.
    pub async fn every_async_each<'a, F, Fut>(&'a self, mut callback: F) -> bool
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        for (index, item) in self.items.values().enumerate() {
            if !callback(item, index).await {
                return false;
            }
        }

        true
    }

    /// Same as [`every`](KeyedCollection::every), dispatching every
    /// callback before joining the batch.
    pub async fn every_async_all<'a, F, Fut>(&'a self, mut callback: F) -> bool
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        let pending: Vec<_> = self
            .items
            .values()
            .enumerate()
            .map(|(index, item)| callback(item, index))
            .collect();

        for passed in join_all(pending).await {
            if !passed {
                return false;
            }
        }

        true
    }

    /// Same as [`some`](KeyedCollection::some), awaiting each future one
    /// at a time.
    pub async fn some_async_each<'a, F, Fut>(&'a self, mut callback: F) -> bool
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        for (index, item) in self.items.values().enumerate() {
            if callback(item, index).await {
                return true;
            }
        }

        false
    }

    /// Same as [`some`](KeyedCollection::some), dispatching every callback
    /// before joining the batch.
    pub async fn some_async_all<'a, F, Fut>(&'a self, mut callback: F) -> bool
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        let pending: Vec<_> = self
            .items
            .values()
            .enumerate()
            .map(|(index, item)| callback(item, index))
            .collect();

        for passed in join_all(pending).await {
            if passed {
                return true;
            }
        }

        false
    }

    /// Same as [`includes`](KeyedCollection::includes), awaiting each
    /// future one at a time.
    pub async fn includes_async_each<'a, F, Fut>(&'a self, callback: F) -> bool
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.some_async_each(callback).await
    }

    /// Same as [`includes`](KeyedCollection::includes), dispatching every
    /// callback before joining the batch.
    pub async fn includes_async_all<'a, F, Fut>(&'a self, callback: F) -> bool
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        self.some_async_all(callback).await
    }

    /// Same as [`filter`](KeyedCollection::filter), awaiting each future
    /// one at a time.
    pub async fn filter_async_each<'a, F, Fut>(&'a self, mut callback: F) -> KeyedCollection<T>
    where
        T: Clone,
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        let mut kept = IndexMap::new();

        for (index, (key, item)) in self.items.iter().enumerate() {
            if callback(item, index).await {
                kept.insert(key.clone(), item.clone());
            }
        }

        KeyedCollection { items: kept }
    }

    /// Same as [`filter`](KeyedCollection::filter), dispatching every
    /// callback before joining the batch.
    pub async fn filter_async_all<'a, F, Fut>(&'a self, mut callback: F) -> KeyedCollection<T>
    where
        T: Clone,
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        let pending: Vec<_> = self
            .items
            .values()
            .enumerate()
            .map(|(index, item)| callback(item, index))
            .collect();

        let resolved = join_all(pending).await;
        let mut kept = IndexMap::new();

        for ((key, item), passed) in self.items.iter().zip(resolved) {
            if passed {
                kept.insert(key.clone(), item.clone());
            }
        }

        KeyedCollection { items: kept }
    }

    /// Same as [`find`](KeyedCollection::find), awaiting each future one
    /// at a time.
    pub async fn find_async_each<'a, F, Fut>(&'a self, mut callback: F) -> Option<&'a T>
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        for (index, item) in self.items.values().enumerate() {
            if callback(item, index).await {
                return Some(item);
            }
        }

        None
    }

    /// Same as [`find`](KeyedCollection::find), dispatching every callback
    /// before joining the batch. The winner is still the first match in
    /// insertion order, whatever order the futures resolved in.
    pub async fn find_async_all<'a, F, Fut>(&'a self, mut callback: F) -> Option<&'a T>
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        let pending: Vec<_> = self
            .items
            .values()
            .enumerate()
            .map(|(index, item)| callback(item, index))
            .collect();

        let resolved = join_all(pending).await;

        for (item, passed) in self.items.values().zip(resolved) {
            if passed {
                return Some(item);
            }
        }

        None
    }

    /// Same as [`find_all`](KeyedCollection::find_all), awaiting each
    /// future one at a time.
    pub async fn find_all_async_each<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> Option<KeyedCollection<T>>
    where
        T: Clone,
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        let found = self.filter_async_each(callback).await;

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// Same as [`find_all`](KeyedCollection::find_all), dispatching every
    /// callback before joining the batch.
    pub async fn find_all_async_all<'a, F, Fut>(
        &'a self,
        callback: F,
    ) -> Option<KeyedCollection<T>>
    where
        T: Clone,
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = bool>,
    {
        let found = self.filter_async_all(callback).await;

        if found.is_empty() {
            None
        } else {
            Some(found)
        }
    }

    /// Same as [`for_each`](KeyedCollection::for_each), awaiting each
    /// future one at a time. Useful when the side effects of one item must
    /// not interleave with the next.
    pub async fn for_each_async_each<'a, F, Fut>(&'a self, mut callback: F)
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = ()>,
    {
        for (index, item) in self.items.values().enumerate() {
            callback(item, index).await;
        }
    }

    /// Same as [`for_each`](KeyedCollection::for_each), dispatching every
    /// callback before joining the batch.
    pub async fn for_each_async_all<'a, F, Fut>(&'a self, mut callback: F)
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = ()>,
    {
        let pending: Vec<_> = self
            .items
            .values()
            .enumerate()
            .map(|(index, item)| callback(item, index))
            .collect();

        join_all(pending).await;
    }

    /// Same as [`map`](KeyedCollection::map), awaiting each future one at
    /// a time.
    pub async fn map_async_each<'a, F, Fut>(&'a self, mut callback: F) -> KeyedCollection<T>
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = T>,
    {
        let mut mapped = IndexMap::new();

        for (index, (key, item)) in self.items.iter().enumerate() {
            mapped.insert(key.clone(), callback(item, index).await);
        }

        KeyedCollection { items: mapped }
    }

    /// Same as [`map`](KeyedCollection::map), dispatching every callback
    /// before joining the batch. Results are re-associated with their keys
    /// in insertion order.
    pub async fn map_async_all<'a, F, Fut>(&'a self, mut callback: F) -> KeyedCollection<T>
    where
        F: FnMut(&'a T, usize) -> Fut,
        Fut: Future<Output = T>,
    {
        let pending: Vec<_> = self
            .items
            .values()
            .enumerate()
            .map(|(index, item)| callback(item, index))
            .collect();

        let resolved = join_all(pending).await;
        let mut mapped = IndexMap::new();

        for (key, value) in self.items.keys().zip(resolved) {
            mapped.insert(key.clone(), value);
        }

        KeyedCollection { items: mapped }
    }
}
