//! Per-table column visibility, persisted through a preference store.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::store::PreferenceStore;

/// Which columns of one table are visible.
///
/// Columns that were never toggled are visible by default. Load and save
/// both fail silently: a missing, corrupt, or unavailable preference only
/// means the table renders with defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnVisibility {
    columns: BTreeMap<String, bool>,
}

impl ColumnVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load visibility for `key`, falling back to defaults on any failure.
    pub fn load(store: &dyn PreferenceStore, key: &str) -> Self {
        match store.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                debug!("ignoring corrupt column visibility for '{}': {}", key, e);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                debug!("preference store unavailable for '{}', using defaults: {}", key, e);
                Self::default()
            }
        }
    }

    /// Persist visibility under `key`, swallowing store failures.
    pub fn save(&self, store: &dyn PreferenceStore, key: &str) {
        let raw = match serde_json::to_string(self) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("failed to encode column visibility for '{}': {}", key, e);
                return;
            }
        };
        if let Err(e) = store.set(key, &raw) {
            debug!("failed to persist column visibility for '{}': {}", key, e);
        }
    }

    /// Whether a column is visible. Untracked columns default to visible.
    pub fn is_visible(&self, column: &str) -> bool {
        self.columns.get(column).copied().unwrap_or(true)
    }

    pub fn set_visible(&mut self, column: impl Into<String>, visible: bool) {
        self.columns.insert(column.into(), visible);
    }

    pub fn toggle(&mut self, column: &str) {
        let visible = self.is_visible(column);
        self.columns.insert(column.to_string(), !visible);
    }
}
