//! Sequences synthesized without backing storage

pub mod create;
pub mod range;

pub use create::{Create, create};
pub use range::{Range, RangeCursor, range};
