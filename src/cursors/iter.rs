use crate::cursor::Cursor;
use std::iter::FusedIterator;

/// Bridges a [`Cursor`] into a standard [`Iterator`]
///
/// Each `next()` advances the cursor and reads `current()` exactly once.
#[derive(Debug, Clone)]
pub struct CursorIter<C> {
    cursor: C,
    done: bool,
}

impl<C> CursorIter<C> {
    pub fn new(cursor: C) -> Self {
        Self {
            cursor,
            done: false,
        }
    }
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.cursor.advance() {
            Some(self.cursor.current())
        } else {
            self.done = true;
            None
        }
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if n > 0 && self.cursor.advance_by(n) < n {
            self.done = true;
            return None;
        }
        self.next()
    }
}

impl<C: Cursor> FusedIterator for CursorIter<C> {}
