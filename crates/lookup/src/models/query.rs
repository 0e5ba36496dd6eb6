//! Query snapshots and single-field lookup results.

use serde::{Deserialize, Serialize};

use super::filters::{Exchange, PlanFilter, TypeFilter};

/// Snapshot of a symbol lookup query, taken from form state at dispatch time.
///
/// The symbol is already normalized (trimmed, upper-cased) so the call site
/// can re-check text equality against the live input when the response lands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolQuery {
    /// Normalized symbol text (e.g., "RELIANCE")
    pub symbol: String,

    /// Exchange selected at dispatch time
    pub exchange: Exchange,
}

/// Snapshot of a catalog search query, combining free text with both filters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// Free-text fund name fragment
    pub text: String,

    /// Plan filter selected at dispatch time
    pub plan: PlanFilter,

    /// Scheme type filter selected at dispatch time
    pub scheme_type: TypeFilter,
}

/// Result of a company-name lookup for a symbol.
///
/// `None` means "no match" and must not overwrite the target field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub name: Option<String>,
}
