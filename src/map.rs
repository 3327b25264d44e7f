use crate::cursor::Cursor;
use crate::fusion::{Compose, ComposeIntoAt, Selector};
use crate::map_at::MapAt;
use crate::partition::PartitionExt;
use crate::sequence::Sequence;
use crate::window::Window;

/// Sequence of the source elements passed through a selector
///
/// A projection keeps the shape of its source: counts, emptiness checks and
/// positional access go straight to the source and only the returned element
/// is projected. Partitioning pushes the window below the projection.
#[derive(Clone, Copy)]
pub struct Map<S, F> {
    source: S,
    selector: F,
}

impl<S, F> Map<S, F> {
    pub fn new(source: S, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<S, F> Map<S, F>
where
    S: Sequence,
    F: Selector<S::Item>,
{
    pub fn map<G, V>(self, selector: G) -> Map<S, Compose<F, G>>
    where
        G: Fn(<F as Selector<S::Item>>::Output) -> V,
    {
        log::trace!("fusing selectors");
        Map::new(self.source, Compose::new(self.selector, selector))
    }

    pub fn map_at<G, V>(self, selector: G) -> MapAt<S, ComposeIntoAt<F, G>>
    where
        G: Fn(<F as Selector<S::Item>>::Output, usize) -> V,
    {
        log::trace!("fusing selector into index-aware selector");
        MapAt::new(self.source, ComposeIntoAt::new(self.selector, selector))
    }
}

impl<S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: Selector<S::Item>,
{
    type Item = F::Output;
    type Cursor<'s>
        = MapCursor<'s, S::Cursor<'s>, F>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        MapCursor {
            cursor: self.source.cursor(),
            selector: &self.selector,
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
            .map(|item| self.selector.apply(item))
    }
}

pub struct MapCursor<'s, C, F> {
    cursor: C,
    selector: &'s F,
}

impl<'s, C, F> Cursor for MapCursor<'s, C, F>
where
    C: Cursor,
    F: Selector<C::Item>,
{
    type Item = F::Output;

    #[inline]
    fn advance(&mut self) -> bool {
        self.cursor.advance()
    }

    #[inline]
    fn current(&self) -> Self::Item {
        self.selector.apply(self.cursor.current())
    }

    fn advance_by(&mut self, n: usize) -> usize {
        self.cursor.advance_by(n)
    }
}

impl<S, F> PartitionExt for Map<S, F>
where
    S: PartitionExt,
    F: Selector<S::Item>,
{
    type Partitioned = Map<S::Partitioned, F>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Map::new(self.source.partition(window), self.selector)
    }
}

/// Extension trait to add map method to all sequences
pub trait MapExt: Sequence + Sized {
    fn map<F, U>(self, selector: F) -> Map<Self, F>
    where
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, selector)
    }

    /// Clone each referenced element, so the sequence yields owned values
    ///
    /// The result is a [`Map`], so counts, element access and windows still
    /// go to the source. This is also how the `*_or_default` operations
    /// become available on sources of references such as slices.
    fn cloned<'a, T>(self) -> Map<Self, fn(&'a T) -> T>
    where
        Self: Sequence<Item = &'a T>,
        T: Clone + 'a,
    {
        Map::new(self, T::clone as fn(&'a T) -> T)
    }

    /// Copy each referenced element
    fn copied<'a, T>(self) -> Map<Self, fn(&'a T) -> T>
    where
        Self: Sequence<Item = &'a T>,
        T: Copy + 'a,
    {
        Map::new(self, copy_item as fn(&'a T) -> T)
    }
}

fn copy_item<T: Copy>(item: &T) -> T {
    *item
}

impl<S: Sequence> MapExt for S {}

/// Convenience function to create a projected sequence
pub fn map<S, F, U>(source: S, selector: F) -> Map<S, F>
where
    S: Sequence,
    F: Fn(S::Item) -> U,
{
    Map::new(source, selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::range;
    use crate::sources::{SliceSequence, from_iter, from_slice};
    use std::cell::Cell;

    #[test]
    fn test_map_projects_in_order() {
        let data = [1, 2, 3];
        let seq = from_slice(&data).map(|x| x * 10);
        assert_eq!(seq.to_vec(), vec![10, 20, 30]);
    }

    #[test]
    fn test_chained_maps_fuse() {
        let data = [1, 2, 3];
        let seq: Map<SliceSequence<'_, i32>, Compose<_, _>> = from_slice(&data)
            .map(|x| x + 1)
            .map(|x| x.to_string());
        assert_eq!(seq.to_vec(), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_count_and_any_skip_selector() {
        let data = [1, 2, 3, 4];
        let calls = Cell::new(0);
        let seq = from_slice(&data).map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(seq.count_hint(), Some(4));
        assert_eq!(seq.count(), 4);
        assert!(seq.any());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_element_at_projects_one_element() {
        let data = [1, 2, 3, 4];
        let calls = Cell::new(0);
        let seq = from_slice(&data).map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(seq.element_at(2), Ok(6));
        assert_eq!(calls.get(), 1);
        assert_eq!(
            seq.element_at(4),
            Err(crate::SeqError::IndexOutOfRange {
                index: 4,
                len: Some(4)
            })
        );
    }

    #[test]
    fn test_partition_pushes_below_projection() {
        let squares = range(0, 10).unwrap().map(|x| x * x);
        let seq: Map<crate::generation::Range, _> = squares.skip(2).take(3);
        assert_eq!(seq.to_vec(), vec![4, 9, 16]);
        assert_eq!(seq.count_hint(), Some(3));
    }

    #[test]
    fn test_map_at_after_map_fuses() {
        let data = [10, 20, 30];
        let seq = from_slice(&data)
            .map(|x| x / 10)
            .map_at(|x, index| x * 100 + index as i32);
        assert_eq!(seq.to_vec(), vec![100, 201, 302]);
    }

    #[test]
    fn test_map_over_uncounted_source() {
        let seq = map(from_iter(vec!["a", "bb"]), |s: &str| s.len());
        assert_eq!(seq.count_hint(), None);
        assert_eq!(seq.count(), 2);
        assert_eq!(seq.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_copied_enables_or_default() {
        let empty: [i32; 0] = [];
        assert_eq!(from_slice(&empty).copied().first_or_default(), 0);
        assert_eq!(from_slice(&empty).copied().single_or_default(), Ok(0));

        let data = [3, 4];
        let seq = from_slice(&data).copied();
        assert_eq!(seq.count_hint(), Some(2));
        assert_eq!(seq.element_at_or_default(1), 4);
        assert_eq!(seq.element_at_or_default(2), 0);
        assert_eq!(seq.skip(1).to_vec(), vec![4]);
    }

    #[test]
    fn test_cloned_yields_owned_values() {
        let data = [String::from("a"), String::from("b")];
        let seq = from_slice(&data).cloned();
        assert_eq!(seq.to_vec(), vec![String::from("a"), String::from("b")]);
        assert_eq!(seq.element_at_or_default(5), String::new());
        assert_eq!(seq.take(1).single_or_default(), Ok(String::from("a")));
    }

    #[test]
    fn test_selector_runs_per_read() {
        let data = [7];
        let calls = Cell::new(0);
        let seq = from_slice(&data).map(|x| {
            calls.set(calls.get() + 1);
            *x
        });

        let mut cursor = seq.cursor();
        assert!(cursor.advance());
        assert_eq!(cursor.current(), 7);
        assert_eq!(cursor.current(), 7);
        assert_eq!(calls.get(), 2);
    }
}
