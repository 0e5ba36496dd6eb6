//! Debounced lookup resolver.
//!
//! This module contains, leaves first:
//! - `delay` - the cancellable delay primitive (at most one pending timer)
//! - `sequence` - the monotonic staleness guard for dispatched queries
//! - `core` - the resolver state machine combining both, parameterized by
//!   a [`LookupSession`] supplied by each call site

mod core;
mod delay;
mod sequence;

pub use self::core::{
    LookupResolver, LookupSession, ResolverConfig, DEFAULT_DEBOUNCE, DEFAULT_MIN_QUERY_LEN,
};
pub use delay::DebouncedDelay;
pub use sequence::SequenceGuard;
