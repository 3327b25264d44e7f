use crate::cursor::Cursor;
use crate::sequence::Sequence;
use crate::window::Window;

/// Sequence restricted to a [`Window`] of its source
///
/// Nothing is skipped until the first `advance()`. The skip is then delegated
/// to the source cursor's `advance_by`, which jumps directly for counted
/// sources and discards elements one by one otherwise. Skipped elements are
/// never read.
#[derive(Debug, Clone, Copy)]
pub struct Partition<S> {
    source: S,
    window: Window,
}

impl<S> Partition<S> {
    pub fn new(source: S, window: Window) -> Self {
        Self { source, window }
    }

    pub fn window(&self) -> Window {
        self.window
    }
}

impl<S: Sequence> Sequence for Partition<S> {
    type Item = S::Item;
    type Cursor<'s>
        = PartitionCursor<S::Cursor<'s>>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        PartitionCursor {
            cursor: self.source.cursor(),
            pending_skip: self.window.skip,
            remaining: self.window.take,
        }
    }

    fn count_hint(&self) -> Option<usize> {
        self.source.count_hint().map(|len| self.window.len(len))
    }

    fn try_element_at(&self, index: usize) -> Option<Self::Item> {
        if index >= self.window.take {
            return None;
        }
        let position = index.checked_add(self.window.skip)?;
        self.source.try_element_at(position)
    }
}

#[derive(Debug, Clone)]
pub struct PartitionCursor<C> {
    cursor: C,
    pending_skip: usize,
    remaining: usize,
}

impl<C: Cursor> PartitionCursor<C> {
    /// Apply the skip once; false when the source ran out while skipping
    fn skip_pending(&mut self) -> bool {
        if self.pending_skip == 0 {
            return true;
        }
        let skip = std::mem::take(&mut self.pending_skip);
        if self.cursor.advance_by(skip) < skip {
            self.remaining = 0;
            return false;
        }
        true
    }
}

impl<C: Cursor> Cursor for PartitionCursor<C> {
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if self.remaining == 0 || !self.skip_pending() {
            return false;
        }
        if self.cursor.advance() {
            self.remaining -= 1;
            true
        } else {
            self.remaining = 0;
            false
        }
    }

    fn current(&self) -> Self::Item {
        self.cursor.current()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        if self.remaining == 0 || !self.skip_pending() {
            return 0;
        }
        let wanted = n.min(self.remaining);
        let advanced = self.cursor.advance_by(wanted);
        self.remaining -= advanced;
        if advanced < wanted {
            self.remaining = 0;
        }
        advanced
    }
}

/// Skip and take for every sequence type
///
/// Each sequence decides what a window over it looks like: counted sources
/// re-slice themselves arithmetically, a [`Partition`] composes the new
/// window into its own, projections push the window under the selector, and
/// everything else is wrapped in a [`Partition`].
pub trait PartitionExt: Sequence + Sized {
    type Partitioned: Sequence<Item = Self::Item>;

    /// Restrict to the elements `window` selects from this sequence
    fn partition(self, window: Window) -> Self::Partitioned;

    fn skip(self, count: usize) -> Self::Partitioned {
        self.partition(Window::skipping(count))
    }

    fn take(self, count: usize) -> Self::Partitioned {
        self.partition(Window::taking(count))
    }
}

impl<S: Sequence> PartitionExt for Partition<S> {
    type Partitioned = Partition<S>;

    fn partition(self, window: Window) -> Self::Partitioned {
        let composed = self.window.then(window);
        log::trace!("composing window {:?} into {:?}", window, self.window);
        Partition::new(self.source, composed)
    }
}

impl<'r, S: Sequence + ?Sized> PartitionExt for &'r S {
    type Partitioned = Partition<&'r S>;

    fn partition(self, window: Window) -> Self::Partitioned {
        Partition::new(self, window)
    }
}

/// Convenience function to skip over any sequence, including ones without
/// a [`PartitionExt`] implementation
pub fn skip<S: Sequence>(source: S, count: usize) -> Partition<S> {
    Partition::new(source, Window::skipping(count))
}

/// Convenience function to take from any sequence
pub fn take<S: Sequence>(source: S, count: usize) -> Partition<S> {
    Partition::new(source, Window::taking(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MapExt;
    use crate::sources::{from_iter, from_slice};
    use std::cell::Cell;

    #[test]
    fn test_skip_uncounted() {
        let seq = from_iter(vec![1, 2, 3, 4, 5]).skip(2);
        assert_eq!(seq.to_vec(), vec![3, 4, 5]);
        assert_eq!(seq.count_hint(), None);
        assert_eq!(seq.count(), 3);
    }

    #[test]
    fn test_take_uncounted_stops_early() {
        let seq = from_iter(vec![1, 2, 3, 4, 5]).take(2);
        assert_eq!(seq.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_skip_past_end() {
        let seq = from_iter(vec![1, 2]).skip(5);
        assert!(!seq.any());
        assert_eq!(seq.count(), 0);
        assert_eq!(seq.try_first(), None);
    }

    #[test]
    fn test_repeated_calls_compose_windows() {
        let seq = from_iter(0..20).skip(2).take(10).skip(3).take(4);
        assert_eq!(seq.window(), Window::new(5, 4));
        assert_eq!(seq.to_vec(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn test_take_then_skip_beyond_take() {
        let seq = from_iter(0..20).take(3).skip(5);
        assert_eq!(seq.window(), Window::new(5, 0));
        assert!(seq.to_vec().is_empty());
    }

    #[test]
    fn test_counted_source_counts_arithmetically() {
        let data = [1, 2, 3, 4, 5, 6];
        let seq = take(skip(from_slice(&data), 4), 10);
        assert_eq!(seq.count_hint(), Some(2));
        assert_eq!(seq.count(), 2);
        assert_eq!(seq.element_at(1), Ok(&6));
        assert!(seq.element_at(2).is_err());
    }

    #[test]
    fn test_element_at_uncounted() {
        let seq = from_iter(vec!['a', 'b', 'c', 'd']).skip(1).take(2);
        assert_eq!(seq.try_element_at(0), Some('b'));
        assert_eq!(seq.try_element_at(1), Some('c'));
        assert_eq!(seq.try_element_at(2), None);
    }

    #[test]
    fn test_skipped_elements_are_never_read() {
        let data = [1, 2, 3, 4, 5];
        let reads = Cell::new(0);
        let projected = from_slice(&data).map(|x| {
            reads.set(reads.get() + 1);
            *x * 10
        });
        let seq = skip(projected, 3);

        assert_eq!(seq.to_vec(), vec![40, 50]);
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_cursor_advance_by_respects_take() {
        let seq = from_iter(0..10).skip(1).take(3);
        let mut cursor = seq.cursor();
        assert_eq!(cursor.advance_by(5), 3);
        assert_eq!(cursor.current(), 3);
        assert!(!cursor.advance());
    }

    #[test]
    fn test_restartable() {
        let seq = from_iter(vec![1, 2, 3]).skip(1);
        assert_eq!(seq.to_vec(), seq.to_vec());
    }
}
