//! Adapters that expose existing data as sequences

pub mod iter;
pub mod slice;

pub use iter::{IterCursor, IterSequence, from_iter};
pub use slice::{AsSequence, SliceSequence, from_slice};
