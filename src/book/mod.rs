//! In-memory catalog of named, pre-parsed rules

mod rule;
mod store;

pub use rule::*;
pub use store::*;
