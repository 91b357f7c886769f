//! packmate-core: duplicate detection and similarity scoring.
//!
//! Pure-function library used by the packmate item-creation flow (warn the
//! user before inserting a likely duplicate) and by list cleanup tooling
//! (surface clusters of similar items for manual merge review).

pub mod deduplication;

pub use deduplication::*;
