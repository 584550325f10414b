//! cachesim: fixed-capacity lookup caches in front of a slower backing store.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod cache;
pub mod error;
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod slot;
pub mod store;
pub mod traits;
