//! Shared ordering functions.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A cheap-to-clone, thread-safe ordering function over `&T`.
///
/// Clones share one allocation, so a comparer handed out by the registry
/// and every copy of it are [`ptr_eq`](Comparer::ptr_eq).
pub struct Comparer<T: ?Sized> {
    f: Arc<CompareFn<T>>,
}

impl<T: ?Sized> Clone for Comparer<T> {
    fn clone(&self) -> Self {
        Comparer {
            f: Arc::clone(&self.f),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Comparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparer")
            .field("over", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Comparer<T> {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        Comparer { f: Arc::new(f) }
    }

    /// Wrap a plain function. Generated dispatchers build every arm this way.
    pub fn from_fn(f: fn(&T, &T) -> Ordering) -> Self {
        Comparer::new(f)
    }

    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b)
    }

    /// Borrow as a closure for `sort_by` and friends.
    pub fn as_fn(&self) -> impl Fn(&T, &T) -> Ordering + '_ {
        move |a, b| self.compare(a, b)
    }

    #[must_use]
    pub fn reversed(&self) -> Self {
        let inner = self.clone();
        Comparer::new(move |a, b| inner.compare(b, a))
    }

    /// Break ties with `next`.
    #[must_use]
    pub fn then(&self, next: &Comparer<T>) -> Self {
        let (first, next) = (self.clone(), next.clone());
        Comparer::new(move |a, b| first.compare(a, b).then_with(|| next.compare(a, b)))
    }

    /// Compare `U`s by the `T` that `key` projects out of them.
    pub fn by_key<U: ?Sized + 'static>(&self, key: fn(&U) -> &T) -> Comparer<U> {
        let inner = self.clone();
        Comparer::new(move |a, b| inner.compare(key(a), key(b)))
    }

    /// Whether both comparers share the same underlying function.
    pub fn ptr_eq(&self, other: &Comparer<T>) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }
}
