use crate::cursors::SliceCursor;
use crate::partition::PartitionExt;
use crate::sequence::Sequence;
use crate::window::Window;

/// A borrowed slice viewed as a counted, indexable sequence
#[derive(Debug)]
pub struct SliceSequence<'a, T> {
    data: &'a [T],
}

impl<'a, T> Clone for SliceSequence<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SliceSequence<'a, T> {}

impl<'a, T> SliceSequence<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.data
    }

    /// Whether `value` is one of the elements
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(value)
    }
}

impl<'a, T> Sequence for SliceSequence<'a, T> {
    type Item = &'a T;
    type Cursor<'s>
        = SliceCursor<'a, T>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        SliceCursor::new(self.data)
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.data.len())
    }

    fn any(&self) -> bool {
        !self.data.is_empty()
    }

    fn try_element_at(&self, index: usize) -> Option<Self::Item> {
        self.data.get(index)
    }

    fn try_first(&self) -> Option<Self::Item> {
        self.data.first()
    }
}

impl<'a, T> PartitionExt for SliceSequence<'a, T> {
    type Partitioned = SliceSequence<'a, T>;

    fn partition(self, window: Window) -> Self::Partitioned {
        let window = window.clamp(self.data.len());
        SliceSequence::new(&self.data[window.skip..window.skip + window.take])
    }
}

/// View a slice as a sequence
pub fn from_slice<T>(data: &[T]) -> SliceSequence<'_, T> {
    SliceSequence::new(data)
}

/// Extension trait to view slices, arrays and vectors as sequences
pub trait AsSequence<T> {
    fn as_seq(&self) -> SliceSequence<'_, T>;
}

impl<T> AsSequence<T> for [T] {
    fn as_seq(&self) -> SliceSequence<'_, T> {
        SliceSequence::new(self)
    }
}
