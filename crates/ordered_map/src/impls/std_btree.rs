use std::collections::BTreeMap;
use std::collections::btree_map::{self, Entry};
use std::ops::Bound;

use crate::OrderedMap;
use crate::compare::Natural;

/// `std::collections::BTreeMap` behind the [`OrderedMap`] interface.
///
/// Only the natural key order is available, so this is the baseline the
/// comparator-driven maps are measured and tested against.
pub struct StdBTreeMap<K: Ord, V> {
    inner: BTreeMap<K, V>,
    cmp: Natural<K>,
}

impl<K: Ord, V> OrderedMap for StdBTreeMap<K, V> {
    type Key = K;
    type Value = V;
    type Cmp = Natural<K>;
    type Iter<'a>
        = btree_map::Range<'a, K, V>
    where
        Self: 'a;
    type IterMut<'a>
        = btree_map::IterMut<'a, K, V>
    where
        Self: 'a;

    fn with_cmp(cmp: Natural<K>) -> Self {
        Self {
            inner: BTreeMap::new(),
            cmp,
        }
    }

    fn cmp(&self) -> &Natural<K> {
        &self.cmp
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.inner.get_key_value(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    fn try_insert(&mut self, key: K, value: V) -> (&mut V, bool) {
        match self.inner.entry(key) {
            Entry::Vacant(entry) => (entry.insert(value), true),
            Entry::Occupied(entry) => (entry.into_mut(), false),
        }
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.inner.range::<K, _>(..)
    }

    fn iter_mut(&mut self) -> Self::IterMut<'_> {
        self.inner.iter_mut()
    }

    fn iter_after(&self, key: &K) -> Self::Iter<'_> {
        self.inner
            .range::<K, _>((Bound::Excluded(key), Bound::Unbounded))
    }

    fn last_key_value(&self) -> Option<(&K, &V)> {
        self.inner.last_key_value()
    }
}
