use crate::cursor::Cursor;
use crate::partition::{Partition, PartitionExt};
use crate::sequence::Sequence;
use crate::window::Window;

/// A sequence that defers to a cursor factory at traversal time
///
/// Every call to [`cursor`](Sequence::cursor) invokes the factory again. The
/// sequence restarts cleanly only when the factory hands out equivalent
/// cursors on every call.
#[derive(Clone, Copy)]
pub struct Create<F> {
    factory: F,
}

impl<F> Create<F> {
    /// Create a new sequence with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<F, C> Sequence for Create<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    type Item = C::Item;
    type Cursor<'s>
        = C
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        (self.factory)()
    }
}

impl<F, C> PartitionExt for Create<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    type Partitioned = Partition<Self>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Partition::new(self, window)
    }
}

/// Create a sequence from a cursor factory function
pub fn create<F, C>(factory: F) -> Create<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    Create::new(factory)
}
