use crate::cursor::Cursor;
use crate::filter_map::FilterMap;
use crate::filter_at::FilterAt;
use crate::fusion::{And, AndThenAt, Predicate};
use crate::partition::{Partition, PartitionExt};
use crate::sequence::Sequence;
use crate::window::Window;

/// Sequence of the source elements accepted by a predicate
///
/// Calling `.filter()` again on a `Filter` does not stack a second filtering
/// cursor; the predicates are fused into one [`And`] and run in call order.
/// `.filter_at()` fuses into a [`FilterAt`] whose index is the position in
/// the source, and `.map()` produces a single [`FilterMap`].
#[derive(Clone, Copy)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filter<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    pub fn filter<Q>(self, predicate: Q) -> Filter<S, And<P, Q>>
    where
        Q: Fn(&S::Item) -> bool,
    {
        log::trace!("fusing filter predicates");
        Filter::new(self.source, And::new(self.predicate, predicate))
    }

    pub fn filter_at<Q>(self, predicate: Q) -> FilterAt<S, AndThenAt<P, Q>>
    where
        Q: Fn(&S::Item, usize) -> bool,
    {
        log::trace!("fusing filter predicate with index-aware predicate");
        FilterAt::new(self.source, AndThenAt::new(self.predicate, predicate))
    }

    pub fn map<F, U>(self, selector: F) -> FilterMap<S, P, F>
    where
        F: Fn(S::Item) -> U,
    {
        FilterMap::new(self.source, self.predicate, selector)
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    type Item = S::Item;
    type Cursor<'s>
        = FilterCursor<'s, S::Cursor<'s>, P>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterCursor {
            cursor: self.source.cursor(),
            predicate: &self.predicate,
        }
    }
}

pub struct FilterCursor<'s, C, P> {
    cursor: C,
    predicate: &'s P,
}

impl<'s, C, P> Cursor for FilterCursor<'s, C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        while self.cursor.advance() {
            if self.predicate.test(&self.cursor.current()) {
                return true;
            }
        }
        false
    }

    #[inline]
    fn current(&self) -> Self::Item {
        self.cursor.current()
    }
}

impl<S, P> PartitionExt for Filter<S, P>
where
    S: Sequence,
    P: Predicate<S::Item>,
{
    type Partitioned = Partition<Self>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Partition::new(self, window)
    }
}

/// Extension trait to add filter method to all sequences
pub trait FilterExt: Sequence + Sized {
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }
}

impl<S: Sequence> FilterExt for S {}

/// Convenience function to create a filtered sequence
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Sequence,
    P: Fn(&S::Item) -> bool,
{
    Filter::new(source, predicate)
}
