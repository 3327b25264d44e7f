use crate::cursor::Cursor;

/// Cursor over a borrowed slice, yielding references into it
#[derive(Debug, Copy, Clone)]
pub struct SliceCursor<'a, T> {
    data: &'a [T],
    /// Index of the next element; the current element sits just before it
    position: usize,
}

impl<'a, T> SliceCursor<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data, position: 0 }
    }

    /// Elements not yet reached by `advance()`
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

impl<'a, T> Cursor for SliceCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn advance(&mut self) -> bool {
        if self.position < self.data.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    fn current(&self) -> Self::Item {
        // Before the first advance this wraps to an out-of-bounds index and panics.
        &self.data[self.position.wrapping_sub(1)]
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let advanced = n.min(self.remaining());
        self.position += advanced;
        advanced
    }
}
