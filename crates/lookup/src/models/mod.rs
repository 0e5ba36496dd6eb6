//! Lookup and search models
//!
//! This module contains the core data types for lookup operations:
//! - `filters` - Exchange and catalog filter enums (Exchange, PlanFilter, TypeFilter)
//! - `query` - Query snapshots taken at dispatch time (SymbolQuery, CatalogQuery, LookupResult)
//! - `fund` - Catalog search hits and pick snapshots (FundMatch, FundSelection)

mod filters;
mod fund;
mod query;

pub use filters::{Exchange, PlanFilter, TypeFilter};
pub use fund::{FundMatch, FundSelection};
pub use query::{CatalogQuery, LookupResult, SymbolQuery};
