//! Ambient text collation.
//!
//! Locale-text comparers do not capture a collator. They ask for the
//! current one on every call: the thread's override if one is active,
//! otherwise the process default. A comparer built once can therefore
//! order the same strings differently under different collators.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// A string ordering, typically a locale's.
pub trait Collator: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Code point order.
#[derive(Copy, Clone, Default, Debug)]
pub struct OrdinalCollator;

impl Collator for OrdinalCollator {
    fn name(&self) -> &str {
        "ordinal"
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Culture-neutral order: case-insensitive first, lowercase before
/// uppercase on ties, code point order last.
#[derive(Copy, Clone, Default, Debug)]
pub struct InvariantCollator;

impl Collator for InvariantCollator {
    fn name(&self) -> &str {
        "invariant"
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        fold(a)
            .cmp(fold(b))
            .then_with(|| case_key(a).cmp(case_key(b)))
            .then_with(|| a.cmp(b))
    }
}

/// A named alphabet. Letters are ranked by their position in the alphabet;
/// letters outside it sort after every ranked letter, in code point order.
#[derive(Clone, Debug)]
pub struct TailoredCollator {
    name: String,
    ranks: FxHashMap<char, u32>,
}

impl TailoredCollator {
    /// Build from the alphabet's lowercase letters in collation order.
    pub fn new(name: impl Into<String>, alphabet: &str) -> Self {
        let mut ranks = FxHashMap::default();
        for (rank, letter) in (0u32..).zip(alphabet.chars()) {
            ranks.entry(letter).or_insert(rank);
        }
        TailoredCollator {
            name: name.into(),
            ranks,
        }
    }

    /// `a`–`z` followed by `å`, `ä`, `ö`.
    pub fn swedish() -> Self {
        TailoredCollator::new("sv", "abcdefghijklmnopqrstuvwxyzåäö")
    }

    /// Each umlaut ranks directly after its base letter.
    pub fn german() -> Self {
        TailoredCollator::new("de", "aäbcdefghijklmnoöpqrsßtuüvwxyz")
    }

    fn key(&self, c: char) -> (u8, u32) {
        match self.ranks.get(&c) {
            Some(&rank) => (0, rank),
            None => (1, u32::from(c)),
        }
    }
}

impl Collator for TailoredCollator {
    fn name(&self) -> &str {
        &self.name
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        fold(a)
            .map(|c| self.key(c))
            .cmp(fold(b).map(|c| self.key(c)))
            .then_with(|| case_key(a).cmp(case_key(b)))
            .then_with(|| a.cmp(b))
    }
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

static DEFAULT: OnceLock<RwLock<Arc<dyn Collator>>> = OnceLock::new();

thread_local! {
    static OVERRIDES: RefCell<Vec<Arc<dyn Collator>>> = const { RefCell::new(Vec::new()) };
}

fn default_slot() -> &'static RwLock<Arc<dyn Collator>> {
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(InvariantCollator)))
}

/// The process-wide collator. [`InvariantCollator`] until replaced.
pub fn default_collator() -> Arc<dyn Collator> {
    Arc::clone(&default_slot().read())
}

/// Replace the process-wide collator, returning the previous one.
pub fn set_default_collator(collator: Arc<dyn Collator>) -> Arc<dyn Collator> {
    tracing::debug!(collator = collator.name(), "default collator replaced");
    std::mem::replace(&mut *default_slot().write(), collator)
}

/// The collator text comparisons on this thread use right now.
pub fn current() -> Arc<dyn Collator> {
    OVERRIDES
        .with(|stack| stack.borrow().last().cloned())
        .unwrap_or_else(default_collator)
}

/// Run `f` with `collator` active on this thread. Overrides nest; the
/// previous collator is restored when `f` returns or unwinds.
pub fn with_collator<R>(collator: Arc<dyn Collator>, f: impl FnOnce() -> R) -> R {
    struct Restore;

    impl Drop for Restore {
        fn drop(&mut self) {
            OVERRIDES.with(|stack| {
                stack.borrow_mut().pop();
            });
        }
    }

    OVERRIDES.with(|stack| stack.borrow_mut().push(collator));
    let _restore = Restore;
    f()
}

/// Compare under the current collator.
pub fn compare(a: &str, b: &str) -> Ordering {
    current().compare(a, b)
}
