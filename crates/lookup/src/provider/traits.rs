//! Lookup provider trait definition.

use async_trait::async_trait;

use crate::errors::LookupError;
use crate::models::{Exchange, FundMatch, LookupResult, PlanFilter, TypeFilter};

/// Remote lookup/search endpoint.
///
/// Implementations must be catchable at the call site: the resolver
/// swallows every error and surfaces only success/no-match states, since
/// lookups are a convenience overlaid on forms the user can always fill
/// manually.
#[async_trait]
pub trait LookupProvider: Send + Sync {
    /// Resolve a stock symbol to its company name on the given exchange.
    ///
    /// Returns `LookupResult { name: None }` for an unknown symbol; that is
    /// a successful "no match", not an error.
    async fn lookup_name(
        &self,
        symbol: &str,
        exchange: Exchange,
    ) -> Result<LookupResult, LookupError>;

    /// Search the mutual fund catalog.
    ///
    /// Ranking is delegated to the backend; results come back in backend
    /// order. An empty vector is a valid "no matches" result.
    async fn search_catalog(
        &self,
        query: &str,
        plan: PlanFilter,
        scheme_type: TypeFilter,
    ) -> Result<Vec<FundMatch>, LookupError>;
}
