use crate::cursor::Cursor;
use crate::fusion::{AndAt, PredicateAt};
use crate::partition::{Partition, PartitionExt};
use crate::sequence::Sequence;
use crate::window::Window;

/// Sequence of the source elements accepted by an index-aware predicate
///
/// The index counts every source element the predicate has been offered,
/// starting at 0 from the front of the source (after any window the source
/// applies itself).
///
/// A plain `.filter()` afterwards fuses into an [`AndAt`]. Another
/// `.filter_at()` wraps this sequence instead, so its index counts only the
/// elements this one accepts.
#[derive(Clone, Copy)]
pub struct FilterAt<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> FilterAt<S, P> {
    pub fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> FilterAt<S, P>
where
    S: Sequence,
    P: PredicateAt<S::Item>,
{
    pub fn filter<Q>(self, predicate: Q) -> FilterAt<S, AndAt<P, Q>>
    where
        Q: Fn(&S::Item) -> bool,
    {
        log::trace!("fusing index-aware filter with plain predicate");
        FilterAt::new(self.source, AndAt::new(self.predicate, predicate))
    }
}

impl<S, P> Sequence for FilterAt<S, P>
where
    S: Sequence,
    P: PredicateAt<S::Item>,
{
    type Item = S::Item;
    type Cursor<'s>
        = FilterAtCursor<'s, S::Cursor<'s>, P>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        FilterAtCursor {
            cursor: self.source.cursor(),
            predicate: &self.predicate,
            index: 0,
        }
    }
}

pub struct FilterAtCursor<'s, C, P> {
    cursor: C,
    predicate: &'s P,
    /// Index handed to the predicate for the next source element
    index: usize,
}

impl<'s, C, P> Cursor for FilterAtCursor<'s, C, P>
where
    C: Cursor,
    P: PredicateAt<C::Item>,
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        while self.cursor.advance() {
            let index = self.index;
            self.index += 1;
            if self.predicate.test_at(&self.cursor.current(), index) {
                return true;
            }
        }
        false
    }

    fn current(&self) -> Self::Item {
        self.cursor.current()
    }
}

impl<S, P> PartitionExt for FilterAt<S, P>
where
    S: Sequence,
    P: PredicateAt<S::Item>,
{
    type Partitioned = Partition<Self>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Partition::new(self, window)
    }
}

/// Extension trait to add filter_at method to all sequences
pub trait FilterAtExt: Sequence + Sized {
    fn filter_at<P>(self, predicate: P) -> FilterAt<Self, P>
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        FilterAt::new(self, predicate)
    }
}

impl<S: Sequence> FilterAtExt for S {}

/// Convenience function to create an index-aware filtered sequence
pub fn filter_at<S, P>(source: S, predicate: P) -> FilterAt<S, P>
where
    S: Sequence,
    P: Fn(&S::Item, usize) -> bool,
{
    FilterAt::new(source, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterExt;
    use crate::sources::{SliceSequence, from_iter, from_slice};

    #[test]
    fn test_filter_at_even_positions() {
        let data = ["a", "b", "c", "d", "e"];
        let seq = from_slice(&data).filter_at(|_, index| index % 2 == 0);
        assert_eq!(seq.to_vec(), vec![&"a", &"c", &"e"]);
    }

    #[test]
    fn test_index_counts_from_window_start() {
        let data = [10, 11, 12, 13, 14, 15];
        let seq = from_slice(&data).skip(2).filter_at(|_, index| index < 2);
        assert_eq!(seq.to_vec(), vec![&12, &13]);
    }

    #[test]
    fn test_plain_filter_fuses() {
        let data = [1, 2, 3, 4, 5, 6];
        let seq: FilterAt<SliceSequence<'_, i32>, AndAt<_, _>> = from_slice(&data)
            .filter_at(|_, index| index >= 1)
            .filter(|x| **x % 2 == 1);
        assert_eq!(seq.to_vec(), vec![&3, &5]);
    }

    #[test]
    fn test_filter_at_twice_nests() {
        let data = [10, 11, 12, 13, 14, 15];
        // The second index counts 10, 12, 14: the elements the first one accepted.
        let seq: FilterAt<FilterAt<SliceSequence<'_, i32>, _>, _> = from_slice(&data)
            .filter_at(|_, index| index % 2 == 0)
            .filter_at(|_, index| index >= 1);
        assert_eq!(seq.to_vec(), vec![&12, &14]);
    }

    #[test]
    fn test_filter_at_restarts_index_per_cursor() {
        let seq = filter_at(from_iter(vec![5, 6, 7]), |_, index| index == 0);
        assert_eq!(seq.to_vec(), vec![5]);
        assert_eq!(seq.to_vec(), vec![5]);
        assert_eq!(seq.count(), 1);
    }

    #[test]
    fn test_element_at_counts_accepted() {
        let data = [0, 1, 2, 3, 4, 5, 6];
        let seq = from_slice(&data).filter_at(|x, index| **x == index as i32 && index % 3 == 0);
        assert_eq!(seq.element_at(1), Ok(&3));
        assert_eq!(seq.try_element_at(3), None);
    }
}
