use crate::cursor::Cursor;
use crate::fusion::{ComposeAt, SelectorAt};
use crate::partition::{Partition, PartitionExt};
use crate::sequence::Sequence;
use crate::window::Window;

/// Sequence of the source elements passed through an index-aware selector
///
/// Indices start at 0 for the first element the source yields. A plain
/// `.map()` afterwards fuses into a [`ComposeAt`].
#[derive(Clone, Copy)]
pub struct MapAt<S, F> {
    source: S,
    selector: F,
}

impl<S, F> MapAt<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F> MapAt<S, F>
where
    S: Sequence,
    F: SelectorAt<S::Item>,
{
    pub fn map<G, V>(self, selector: G) -> MapAt<S, ComposeAt<F, G>>
    where
        G: Fn(<F as SelectorAt<S::Item>>::Output) -> V,
    {
        log::trace!("fusing index-aware selector with plain selector");
        MapAt::new(self.source, ComposeAt::new(self.selector, selector))
    }
}

impl<S, F> Sequence for MapAt<S, F>
where
    S: Sequence,
    F: SelectorAt<S::Item>,
{
    type Item = F::Output;
    type Cursor<'s>
        = MapAtCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapAtCursor {
            cursor: self.source.cursor(),
            selector: &self.selector,
            advanced: 0,
        }
    }

    fn count_hint(&self) -> Option<usize> {
        self.source.count_hint()
    }

    fn count(&self) -> usize {
        self.source.count()
    }

    fn any(&self) -> bool {
        self.source.any()
    }

    fn try_element_at(&self, index: usize) -> Option<Self::Item> {
        self.source
            .try_element_at(index)
            .map(|item| self.selector.apply_at(item, index))
    }
}

pub struct MapAtCursor<'s, C, F> {
    cursor: C,
    selector: &'s F,
    /// Successful advances so far; the current element's index is one less
    advanced: usize,
}

impl<'s, C, F> Cursor for MapAtCursor<'s, C, F>
where
    C: Cursor,
    F: SelectorAt<C::Item>,
{
    type Item = F::Output;

    fn advance(&mut self) -> bool {
        if self.cursor.advance() {
            self.advanced += 1;
            true
        } else {
            false
        }
    }

    fn current(&self) -> Self::Item {
        self.selector
            .apply_at(self.cursor.current(), self.advanced.wrapping_sub(1))
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let advanced = self.cursor.advance_by(n);
        self.advanced += advanced;
        advanced
    }
}

impl<S, F> PartitionExt for MapAt<S, F>
where
    S: Sequence,
    F: SelectorAt<S::Item>,
{
    type Partitioned = Partition<Self>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Partition::new(self, window)
    }
}

/// Extension trait to add map_at method to all sequences
pub trait MapAtExt: Sequence + Sized {
    fn map_at<F, U>(self, selector: F) -> MapAt<Self, F>
    where
        F: Fn(Self::Item, usize) -> U,
    {
        MapAt::new(self, selector)
    }
}

impl<S: Sequence> MapAtExt for S {}

/// Convenience function to create an index-aware projected sequence
pub fn map_at<S, F, U>(source: S, selector: F) -> MapAt<S, F>
where
    S: Sequence,
    F: Fn(S::Item, usize) -> U,
{
    MapAt::new(source, selector)
}
