//! Form field integrations embedding the resolver.
//!
//! - `symbol` - symbol -> company-name auto-fill for the add-stock form
//! - `catalog` - mutual fund catalog search with a selectable dropdown
//!
//! Each field owns its form state exclusively; the resolver only reaches
//! it through the session handle the field installs.

mod catalog;
mod symbol;

use std::sync::{Mutex, MutexGuard};

use log::warn;

pub use catalog::{FundSearchField, FundSearchState, SearchDisplay};
pub use symbol::{SymbolFormState, SymbolLookupField};

/// Lock form state, recovering from poison if necessary.
///
/// Losing one interleaved mutation is preferable to panicking inside a
/// timer or completion callback.
pub(crate) fn lock_or_recover<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(|poisoned| {
        warn!("form state mutex was poisoned, recovering");
        poisoned.into_inner()
    })
}
