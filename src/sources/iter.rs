use crate::cursor::Cursor;
use crate::partition::{Partition, PartitionExt};
use crate::sequence::Sequence;
use crate::window::Window;

/// Any cloneable iterable viewed as a sequence
///
/// Each traversal clones the iterable and walks the clone, so the sequence
/// restarts as long as cloning reproduces the same elements. No count is
/// known ahead of a traversal, even when the iterator could report one.
#[derive(Debug, Clone, Copy)]
pub struct IterSequence<I> {
    source: I,
}

impl<I> IterSequence<I> {
    pub fn new(source: I) -> Self {
        Self { source }
    }
}

impl<I> Sequence for IterSequence<I>
where
    I: IntoIterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;
    type Cursor<'s>
        = IterCursor<I::IntoIter>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        IterCursor::new(self.source.clone().into_iter())
    }
}

impl<I> PartitionExt for IterSequence<I>
where
    I: IntoIterator + Clone,
    I::Item: Clone,
{
    type Partitioned = Partition<Self>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Partition::new(self, window)
    }
}

/// View a cloneable iterable as a sequence
pub fn from_iter<I>(source: I) -> IterSequence<I>
where
    I: IntoIterator + Clone,
    I::Item: Clone,
{
    IterSequence::new(source)
}

/// Cursor over an iterator, holding the element it is positioned on
#[derive(Debug, Clone)]
pub struct IterCursor<It: Iterator> {
    iter: It,
    current: Option<It::Item>,
}

impl<It: Iterator> IterCursor<It> {
    pub fn new(iter: It) -> Self {
        Self {
            iter,
            current: None,
        }
    }
}

impl<It> Cursor for IterCursor<It>
where
    It: Iterator,
    It::Item: Clone,
{
    type Item = It::Item;

    fn advance(&mut self) -> bool {
        self.current = self.iter.next();
        self.current.is_some()
    }

    fn current(&self) -> Self::Item {
        match &self.current {
            Some(item) => item.clone(),
            None => panic!("cursor is not positioned on an element"),
        }
    }
}
