//! Per-run lookup cache.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

use fwaudit_core::AdvisoryResult;

/// Memoized lookup outcomes, failures included.
///
/// The lock is only held for the map access, never across an `.await`.
pub struct LookupCache<K> {
    entries: Mutex<HashMap<K, AdvisoryResult<Vec<String>>>>,
}

impl<K> Default for LookupCache<K> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<K: Eq + Hash> LookupCache<K> {
    pub fn get(&self, key: &K) -> Option<AdvisoryResult<Vec<String>>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn insert(&self, key: K, outcome: AdvisoryResult<Vec<String>>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, outcome);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
