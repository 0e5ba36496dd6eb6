//! Remote lookup/search endpoint abstractions and implementations.
//!
//! The resolver core depends on two logical operations: a single-symbol
//! company-name lookup and a filter-parameterized catalog search. Both are
//! behind the [`LookupProvider`] trait so call sites can be driven by the
//! HTTP backend in the application and by scripted providers in tests.

mod traits;

pub mod http;

pub use http::HttpLookupProvider;
pub use traits::LookupProvider;
