//! # SeqComb - Lazy Sequence Combinators
//!
//! Composable, deferred queries over sequences: filter, project, window and
//! then consume them with a terminal operation.
//!
//! A sequence value only describes a traversal. Nothing runs until a terminal
//! operation (`count`, `first`, `to_vec`, ...) asks for a fresh cursor, and the
//! same value can be traversed again. The library emphasizes:
//!
//! - **No hidden allocation**: operators are plain generic structs composed on
//!   the stack; only materializing operations allocate
//! - **Fusion**: chained filters and projections collapse into a single cursor
//! - **Capability passthrough**: projections and windows over a counted,
//!   indexable source stay counted and indexable
//!
//! ```
//! use seqcomb::prelude::*;
//! use seqcomb::{from_slice, range};
//!
//! let data = [1, 2, 3, 4, 5, 6];
//! let tens = from_slice(&data).filter(|x| **x % 2 == 0).map(|x| x * 10);
//! assert_eq!(tens.to_vec(), vec![20, 40, 60]);
//! assert_eq!(tens.count(), 3);
//!
//! let window = range(0, 100)?.skip(10).take(3);
//! assert_eq!(window.to_vec(), vec![10, 11, 12]);
//! # Ok::<(), seqcomb::SeqError>(())
//! ```

pub mod cursor;
pub mod cursors;
pub mod error;
pub mod filter;
pub mod filter_at;
pub mod filter_map;
pub mod fusion;
pub mod generation;
pub mod map;
pub mod map_at;
pub mod ops;
pub mod partition;
pub mod sequence;
pub mod sources;
pub mod window;

pub use cursor::Cursor;
pub use cursors::{CursorIter, Scoped, SliceCursor};
pub use error::{SeqError, SeqResult};
pub use filter::{Filter, FilterExt, filter};
pub use filter_at::{FilterAt, FilterAtExt, filter_at};
pub use filter_map::FilterMap;
pub use generation::{Create, Range, create, range};
pub use map::{Map, MapExt, map};
pub use map_at::{MapAt, MapAtExt, map_at};
pub use partition::{Partition, PartitionExt, skip, take};
pub use sequence::Sequence;
pub use sources::{AsSequence, IterSequence, SliceSequence, from_iter, from_slice};
pub use window::Window;

/// Traits needed to compose and consume sequences with method syntax
pub mod prelude {
    pub use crate::cursor::Cursor;
    pub use crate::filter::FilterExt;
    pub use crate::filter_at::FilterAtExt;
    pub use crate::map::MapExt;
    pub use crate::map_at::MapAtExt;
    pub use crate::partition::PartitionExt;
    pub use crate::sequence::Sequence;
    pub use crate::sources::AsSequence;
}
