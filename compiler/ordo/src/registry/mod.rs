//! Process-wide cache of comparers.
//!
//! Two levels of `DashMap`: one table per type, keyed by `TypeId`, each
//! mapping property names to comparers. The first lookup of a (type,
//! property) pair asks the type's dispatcher and caches the result; every
//! later lookup clones the cached comparer. Misses are not cached, so a
//! lookup for a name the type does not have costs one dispatcher call.
//! Cached entries are never replaced or evicted.

use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

use crate::{Comparer, ComparisonError, PropertyComparisonProvider};

type Table<T> = DashMap<Box<str>, Comparer<T>, FxBuildHasher>;

/// Type-erased view of one type's table.
trait ErasedTable: Send + Sync {
    fn len(&self) -> usize;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: 'static> ErasedTable for Table<T> {
    fn len(&self) -> usize {
        DashMap::len(self)
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Concurrent (type, property) → comparer cache.
///
/// Safe to share across threads. Construction of an entry happens at most
/// once; concurrent first lookups of the same pair all receive the same
/// comparer.
#[derive(Default)]
pub struct ComparisonRegistry {
    tables: DashMap<TypeId, Arc<dyn ErasedTable>, FxBuildHasher>,
}

static GLOBAL: OnceLock<ComparisonRegistry> = OnceLock::new();

impl ComparisonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry.
    pub fn global() -> &'static ComparisonRegistry {
        GLOBAL.get_or_init(ComparisonRegistry::new)
    }

    /// The cached comparer for `property` on `T`, building it on first use.
    pub fn get_comparer<T: PropertyComparisonProvider>(&self, property: &str) -> Option<Comparer<T>> {
        let table = self.table::<T>()?;

        // Fast path: already cached
        if let Some(comparer) = table.get(property) {
            return Some(comparer.value().clone());
        }

        let found = match table.entry(property.into()) {
            Entry::Occupied(entry) => Some(entry.get().clone()),
            Entry::Vacant(entry) => {
                let comparer = T::get_comparison(property)?;
                tracing::debug!(
                    ty = std::any::type_name::<T>(),
                    property,
                    "cached new comparer"
                );
                Some(entry.insert(comparer).value().clone())
            }
        };
        found
    }

    /// Like [`get_comparer`](Self::get_comparer), but a miss is an error.
    pub fn require_comparer<T: PropertyComparisonProvider>(
        &self,
        property: &str,
    ) -> Result<Comparer<T>, ComparisonError> {
        self.get_comparer::<T>(property)
            .ok_or_else(|| ComparisonError::not_found::<T>(property))
    }

    /// Whether a comparer for `property` on `T` is cached.
    pub fn contains<T: PropertyComparisonProvider>(&self, property: &str) -> bool {
        self.tables
            .get(&TypeId::of::<T>())
            .and_then(|table| Arc::clone(table.value()).into_any().downcast::<Table<T>>().ok())
            .is_some_and(|table| table.contains_key(property))
    }

    /// Number of cached comparers across all types.
    pub fn len(&self) -> usize {
        self.tables.iter().map(|table| table.value().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table<T: 'static>(&self) -> Option<Arc<Table<T>>> {
        let key = TypeId::of::<T>();
        let erased = match self.tables.get(&key) {
            Some(table) => Arc::clone(table.value()),
            None => Arc::clone(
                self.tables
                    .entry(key)
                    .or_insert_with(|| Arc::new(Table::<T>::default()) as Arc<dyn ErasedTable>)
                    .value(),
            ),
        };
        erased.into_any().downcast::<Table<T>>().ok()
    }
}

/// [`ComparisonRegistry::get_comparer`] on the global registry.
pub fn get_comparer<T: PropertyComparisonProvider>(property: &str) -> Option<Comparer<T>> {
    ComparisonRegistry::global().get_comparer::<T>(property)
}

/// [`ComparisonRegistry::require_comparer`] on the global registry.
pub fn require_comparer<T: PropertyComparisonProvider>(
    property: &str,
) -> Result<Comparer<T>, ComparisonError> {
    ComparisonRegistry::global().require_comparer::<T>(property)
}
