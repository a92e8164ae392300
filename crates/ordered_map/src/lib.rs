pub mod compare;
pub mod impls;

use compare::Compare;

/// Ordered map interface.
///
/// - Keys are unique and ordered by the comparator bound in `with_cmp`.
/// - `insert` overwrites the existing value and returns the old one.
/// - `try_insert` never overwrites; the flag reports whether it inserted.
/// - Lookups return `None` where a cursor API would return its end position.
///
/// Iterators borrow the map, so the structure cannot change while one is
/// alive. `iter_mut` hands out values only; keys stay immutable.
pub trait OrderedMap: Sized {
    type Key;
    type Value;
    type Cmp: Compare<Self::Key>;
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;
    type IterMut<'a>: Iterator<Item = (&'a Self::Key, &'a mut Self::Value)>
    where
        Self: 'a;

    fn with_cmp(cmp: Self::Cmp) -> Self;

    fn new() -> Self
    where
        Self::Cmp: Default,
    {
        Self::with_cmp(Self::Cmp::default())
    }

    fn cmp(&self) -> &Self::Cmp;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get_key_value(&self, key: &Self::Key) -> Option<(&Self::Key, &Self::Value)>;

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    fn get_mut(&mut self, key: &Self::Key) -> Option<&mut Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get_key_value(key).is_some()
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    /// Inserts only if `key` is absent.
    ///
    /// Returns the value now stored under `key` and whether it was inserted.
    /// On `false` the given value is dropped and the stored one is untouched.
    fn try_insert(&mut self, key: Self::Key, value: Self::Value) -> (&mut Self::Value, bool);

    /// Returns the value under `key`, inserting `Default::default()` first if absent.
    ///
    /// The default is built even when the key exists; prefer `insert` or
    /// `try_insert` when the final value is already at hand.
    fn get_or_insert_default(&mut self, key: Self::Key) -> &mut Self::Value
    where
        Self::Value: Default,
    {
        self.try_insert(key, Self::Value::default()).0
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn iter(&self) -> Self::Iter<'_>;

    fn iter_mut(&mut self) -> Self::IterMut<'_>;

    /// Entries strictly after `key` in map order; `key` need not be present.
    fn iter_after(&self, key: &Self::Key) -> Self::Iter<'_>;

    fn keys(&self) -> impl Iterator<Item = &Self::Key> {
        self.iter().map(|(k, _)| k)
    }

    fn values(&self) -> impl Iterator<Item = &Self::Value> {
        self.iter().map(|(_, v)| v)
    }

    fn values_mut(&mut self) -> impl Iterator<Item = &mut Self::Value> {
        self.iter_mut().map(|(_, v)| v)
    }

    fn first_key_value(&self) -> Option<(&Self::Key, &Self::Value)> {
        self.iter().next()
    }

    fn last_key_value(&self) -> Option<(&Self::Key, &Self::Value)>;

    /// First entry in key order whose value satisfies `pred`. Linear.
    fn find_by_value<P>(&self, mut pred: P) -> Option<(&Self::Key, &Self::Value)>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        self.iter().find(|(_, v)| pred(v))
    }

    fn find_value(&self, value: &Self::Value) -> Option<(&Self::Key, &Self::Value)>
    where
        Self::Value: PartialEq,
    {
        self.find_by_value(|v| v == value)
    }

    /// Resumes a value scan strictly after `key`.
    fn find_value_after<P>(
        &self,
        key: &Self::Key,
        mut pred: P,
    ) -> Option<(&Self::Key, &Self::Value)>
    where
        P: FnMut(&Self::Value) -> bool,
    {
        self.iter_after(key).find(|(_, v)| pred(v))
    }

    /// Moves the value under `old` to `new`, replacing whatever `new` held.
    ///
    /// Returns `false` and leaves the map unchanged if `old` is absent.
    fn rename_key(&mut self, old: &Self::Key, new: Self::Key) -> bool {
        match self.remove(old) {
            Some(value) => {
                self.insert(new, value);
                true
            }
            None => false,
        }
    }
}

pub use compare::{Natural, Rev, TotalOrd};
pub use impls::{SortedVecMap, StdBTreeMap, TreeMap};
