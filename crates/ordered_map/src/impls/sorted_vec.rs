use std::fmt;

use crate::OrderedMap;
use crate::compare::{Compare, Natural};

/// Sorted vector of entries; O(log n) lookup, O(n) insertion and removal.
pub struct SortedVecMap<K, V, C = Natural<K>> {
    data: Vec<(K, V)>,
    cmp: C,
}

type EntryRef<K, V> = fn(&(K, V)) -> (&K, &V);
type EntryMut<K, V> = fn(&mut (K, V)) -> (&K, &mut V);

fn entry_ref<K, V>((k, v): &(K, V)) -> (&K, &V) {
    (k, v)
}

fn entry_mut<K, V>((k, v): &mut (K, V)) -> (&K, &mut V) {
    (k, v)
}

impl<K, V, C: Compare<K>> SortedVecMap<K, V, C> {
    fn search(&self, key: &K) -> Result<usize, usize> {
        self.data.binary_search_by(|(k, _)| self.cmp.compare(k, key))
    }
}

impl<K, V, C: Compare<K>> OrderedMap for SortedVecMap<K, V, C> {
    type Key = K;
    type Value = V;
    type Cmp = C;
    type Iter<'a>
        = std::iter::Map<std::slice::Iter<'a, (K, V)>, EntryRef<K, V>>
    where
        Self: 'a;
    type IterMut<'a>
        = std::iter::Map<std::slice::IterMut<'a, (K, V)>, EntryMut<K, V>>
    where
        Self: 'a;

    fn with_cmp(cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
        }
    }

    fn cmp(&self) -> &C {
        &self.cmp
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let idx = self.search(key).ok()?;
        self.data.get(idx).map(|(k, v)| (k, v))
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.search(key).ok()?;
        self.data.get_mut(idx).map(|(_, v)| v)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.search(&key) {
            Ok(idx) => Some(std::mem::replace(&mut self.data[idx].1, value)),
            Err(idx) => {
                self.data.insert(idx, (key, value));
                None
            }
        }
    }

    fn try_insert(&mut self, key: K, value: V) -> (&mut V, bool) {
        match self.search(&key) {
            Ok(idx) => (&mut self.data[idx].1, false),
            Err(idx) => {
                self.data.insert(idx, (key, value));
                (&mut self.data[idx].1, true)
            }
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.search(key).ok()?;
        Some(self.data.remove(idx).1)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.data.iter().map(entry_ref as EntryRef<K, V>)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.data.iter_mut().map(entry_mut as EntryMut<K, V>)
    }

    fn iter_after(&self, key: &K) -> Self::Iter<'_> {
        let idx = self
            .data
            .partition_point(|(k, _)| !self.cmp.compares_lt(key, k));
        self.data[idx..].iter().map(entry_ref as EntryRef<K, V>)
    }

    fn last_key_value(&self) -> Option<(&K, &V)> {
        self.data.last().map(|(k, v)| (k, v))
    }
}

impl<K, V, C: Compare<K> + Default> Default for SortedVecMap<K, V, C> {
    fn default() -> Self {
        Self::with_cmp(C::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for SortedVecMap<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.data.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}
