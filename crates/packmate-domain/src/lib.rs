//! Domain types shared across the packmate suite.
//!
//! - PackingItem: a single thing to pack, with quantity and packed state
//! - PackingList: a named list of items, optionally reusable as a template
//! - Category: grouping of items within a list

pub mod category;
pub mod item;
pub mod list;

pub use category::*;
pub use item::*;
pub use list::*;
