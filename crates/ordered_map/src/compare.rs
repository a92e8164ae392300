use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// Ordering policy over keys.
///
/// Implementations must be a strict weak ordering: irreflexive, transitive
/// and consistent across calls. A map binds one comparator at construction
/// and never replaces it.
pub trait Compare<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;

    fn compares_lt(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    fn compares_eq(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    fn rev(self) -> Rev<Self>
    where
        Self: Sized,
    {
        Rev(self)
    }
}

impl<K: ?Sized, F> Compare<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Ascending natural order of `K`.
pub struct Natural<K: ?Sized>(PhantomData<fn(&K)>);

impl<K: ?Sized> Natural<K> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K: ?Sized> Default for Natural<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized> Clone for Natural<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for Natural<K> {}

impl<K: ?Sized> fmt::Debug for Natural<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Natural")
    }
}

impl<K: Ord + ?Sized> Compare<K> for Natural<K> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Reverses the wrapped comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rev<C>(pub C);

impl<K: ?Sized, C: Compare<K>> Compare<K> for Rev<C> {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Total order for floating point keys (`-0.0 < +0.0`, NaNs at the ends).
#[derive(Clone, Copy, Debug, Default)]
pub struct TotalOrd;

impl Compare<f32> for TotalOrd {
    fn compare(&self, a: &f32, b: &f32) -> Ordering {
        a.total_cmp(b)
    }
}

impl Compare<f64> for TotalOrd {
    fn compare(&self, a: &f64, b: &f64) -> Ordering {
        a.total_cmp(b)
    }
}
