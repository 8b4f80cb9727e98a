//! Subject records that rules are evaluated against

mod data;
mod field;

pub use data::*;
pub use field::*;
