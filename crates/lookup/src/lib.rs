//! Folioscope Lookup Crate
//!
//! Debounced, staleness-guarded lookup resolution for the Folioscope
//! add-instrument forms.
//!
//! # Overview
//!
//! Two instances of one reusable pattern live here:
//! - **Symbol resolver**: keystrokes in a stock symbol field drive a
//!   delayed auto-fill of a dependent company-name field
//! - **Catalog search resolver**: keystrokes in a fund name field plus two
//!   filter toggles drive a delayed multi-result search feeding a
//!   selectable dropdown
//!
//! Both tolerate slow and out-of-order network responses without
//! corrupting the input the user is currently looking at.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    Form field    | --> |  LookupSession   |  (query building, apply)
//! +------------------+     +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  LookupResolver  |  (debounce + staleness guard)
//!                          +------------------+
//!                                  |
//!                                  v
//!                          +------------------+
//!                          |  LookupProvider  |  (REST backend)
//!                          +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`LookupResolver`] - the debounce/staleness state machine
//! - [`LookupSession`] - call-site hooks the resolver drives
//! - [`SymbolLookupField`] / [`FundSearchField`] - the two call sites
//! - [`LookupProvider`] - the remote endpoint seam
//!
//! Cancellation is logical, not transport-level: teardown hard-cancels the
//! pending debounce timer and soft-cancels in-flight requests by dropping
//! their results on arrival.

pub mod errors;
pub mod fields;
pub mod models;
pub mod provider;
pub mod resolver;

// Re-export the public surface used by the form layer
pub use errors::LookupError;
pub use fields::{
    FundSearchField, FundSearchState, SearchDisplay, SymbolFormState, SymbolLookupField,
};
pub use models::{
    CatalogQuery, Exchange, FundMatch, FundSelection, LookupResult, PlanFilter, SymbolQuery,
    TypeFilter,
};
pub use provider::{HttpLookupProvider, LookupProvider};
pub use resolver::{
    DebouncedDelay, LookupResolver, LookupSession, ResolverConfig, SequenceGuard,
    DEFAULT_DEBOUNCE, DEFAULT_MIN_QUERY_LEN,
};
