//! The tree's working memory.
//!
//! A string-keyed heterogeneous store.  Values are type-erased; a read asks
//! for a concrete type and gets `None` when the key is missing *or* holds a
//! different type, so a stale key of the wrong shape behaves exactly like an
//! absent one (and surfaces as a plain `Failure` in the tree).  Last write
//! wins, including across types.
//!
//! Player references deliberately do not go in here — store `PlayerId` and
//! re-resolve against the current snapshot each tick.

use std::any::Any;

use rustc_hash::FxHashMap;

#[derive(Default)]
pub struct Blackboard {
    values: FxHashMap<String, Box<dyn Any + Send>>,
}

impl Blackboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, overwriting any previous value of any
    /// type.
    pub fn set<T: Any + Send>(&mut self, key: impl Into<String>, value: T) {
        self.values.insert(key.into(), Box::new(value));
    }

    /// Copy out the value under `key`, if present with exactly type `T`.
    pub fn get<T: Any + Send + Clone>(&self, key: &str) -> Option<T> {
        self.values.get(key)?.downcast_ref::<T>().cloned()
    }

    /// Borrow the value under `key`, if present with exactly type `T`.
    pub fn get_ref<T: Any + Send>(&self, key: &str) -> Option<&T> {
        self.values.get(key)?.downcast_ref::<T>()
    }

    /// [`get`](Self::get) with a fallback for missing/mismatched keys.
    pub fn get_or<T: Any + Send + Clone>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Key presence regardless of stored type.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remove `key`; removing an absent key is a no-op.
    pub fn erase(&mut self, key: &str) {
        self.values.remove(key);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}
