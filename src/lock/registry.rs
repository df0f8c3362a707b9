//! Lock Registry
//!
//! Maps collection names to their exclusive locks.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

/// Exclusive lock guarding one collection's directory
pub type CollectionLock = Arc<Mutex<()>>;

/// Registry of per-collection locks
///
/// ## Concurrency:
/// - `locks`: Protected by a Mutex held only for the check-and-insert step
/// - Returned locks are shared handles; acquiring them is the caller's job
/// - Entries are never removed (bounded by distinct collections touched)
#[derive(Debug, Default)]
pub struct LockRegistry {
    locks: Mutex<HashMap<String, CollectionLock>>,
}

impl LockRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the lock for a collection, creating it on first use
    ///
    /// The returned lock is NOT acquired. Two callers asking for the same
    /// new collection concurrently always receive the same lock.
    pub fn lock_for(&self, collection: &str) -> CollectionLock {
        let mut locks = self.locks.lock();

        if let Some(lock) = locks.get(collection) {
            return Arc::clone(lock);
        }

        let lock = Arc::new(Mutex::new(()));
        locks.insert(collection.to_string(), Arc::clone(&lock));
        lock
    }

    /// Number of collections with a registered lock
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    /// True if no lock has been handed out yet
    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }

    /// True if a lock exists for the collection
    pub fn contains(&self, collection: &str) -> bool {
        self.locks.lock().contains_key(collection)
    }
}
