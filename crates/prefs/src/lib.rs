//! Folioscope Prefs - UI preference persistence.
//!
//! Small key-value persistence layer for per-table UI preferences such as
//! column visibility. The store is injected configuration with explicit
//! load/save functions, never a module-level singleton, and every failure
//! path degrades silently to defaults: losing a column layout must never
//! break a dashboard page.

pub mod errors;

mod columns;
mod store;

pub use columns::ColumnVisibility;
pub use errors::{PrefsError, Result};
pub use store::{MemoryPreferenceStore, PreferenceStore};
