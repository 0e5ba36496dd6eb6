//! Preference store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use log::warn;

use crate::errors::Result;

/// Key-value store for UI preferences.
///
/// Implementations map onto whatever persistence the host offers (browser
/// local storage, a settings table, a file). Callers treat failures as
/// "use defaults", so implementations should prefer returning errors over
/// panicking.
pub trait PreferenceStore: Send + Sync {
    /// Get a stored value. `Ok(None)` when the key has never been set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under a key, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory preference store.
///
/// Used in tests and as the fallback when no persistent backend is
/// configured.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the entries mutex, recovering from poison if necessary.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("preference store mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock_entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock_entries().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
