use crate::cursor::Cursor;
use crate::fusion::{Compose, Predicate, Selector};
use crate::partition::{Partition, PartitionExt};
use crate::sequence::Sequence;
use crate::window::Window;

/// Filter followed by a projection, driven by a single cursor
///
/// The predicate sees source elements; the selector only runs for the ones
/// it accepts. Built by calling `.map()` on a [`Filter`](crate::Filter).
#[derive(Clone, Copy)]
pub struct FilterMap<S, P, F> {
    source: S,
    predicate: P,
    selector: F,
}

impl<S, P, F> FilterMap<S, P, F> {
    pub fn new(source: S, predicate: P, selector: F) -> Self {
        Self {
            source,
            predicate,
            selector,
        }
    }
}

impl<S, P, F> FilterMap<S, P, F>
where
    S: Sequence,
    P: Predicate<S::Item>,
    F: Selector<S::Item>,
{
    pub fn map<G, V>(self, selector: G) -> FilterMap<S, P, Compose<F, G>>
    where
        G: Fn(<F as Selector<S::Item>>::Output) -> V,
    {
        log::trace!("fusing selectors after filter");
        FilterMap::new(
            self.source,
            self.predicate,
            Compose::new(self.selector, selector),
        )
    }
}

impl<S, P, F> Sequence for FilterMap<S, P, F>
where
    S: Sequence,
    P: Predicate<S::Item>,
    F: Selector<S::Item>,
{
    type Item = F::Output;
    type Cursor<'s>
        = FilterMapCursor<'s, S::Cursor<'s>, P, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterMapCursor {
            cursor: self.source.cursor(),
            predicate: &self.predicate,
            selector: &self.selector,
        }
    }
}

pub struct FilterMapCursor<'s, C, P, F> {
    cursor: C,
    predicate: &'s P,
    selector: &'s F,
}

impl<'s, C, P, F> Cursor for FilterMapCursor<'s, C, P, F>
where
    C: Cursor,
    P: Predicate<C::Item>,
    F: Selector<C::Item>,
{
    type Item = F::Output;

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
        self.selector.apply(self.cursor.current())
    }
}

impl<S, P, F> PartitionExt for FilterMap<S, P, F>
where
    S: Sequence,
    P: Predicate<S::Item>,
    F: Selector<S::Item>,
{
    type Partitioned = Partition<Self>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Partition::new(self, window)
    }
}
