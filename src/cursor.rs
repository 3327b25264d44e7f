use crate::error::{SeqError, SeqResult};

/// Single-pass traversal state over a sequence
///
/// A cursor starts positioned before the first element. Each successful
/// `advance()` moves it onto the next element; once `advance()` returns false
/// the cursor stays past the end. `current()` is only meaningful between a
/// successful `advance()` and the next call to `advance()`.
///
/// Cursors cannot be rewound. A fresh cursor is obtained from the sequence
/// value instead, see [`Sequence::cursor`](crate::Sequence::cursor).
pub trait Cursor {
    /// The type of elements this cursor yields
    type Item;

    /// Move to the next element
    ///
    /// Returns false when the sequence is exhausted. Calling `advance()` again
    /// after that keeps returning false.
    fn advance(&mut self) -> bool;

    /// Get the element the cursor is positioned on
    ///
    /// The value is computed on every call. Projection cursors run their
    /// selector each time, so read it once per element if the selector is
    /// costly or has side effects.
    ///
    /// # Panics
    ///
    /// Implementations may panic when the cursor is before the first element
    /// or past the last one.
    fn current(&self) -> Self::Item;

    /// Advance up to `n` times, returning how many advances succeeded
    ///
    /// After a return value `k > 0` the cursor is positioned on the `k`-th
    /// element from where it started. Counted cursors jump directly.
    fn advance_by(&mut self, n: usize) -> usize {
        let mut advanced = 0;
        while advanced < n && self.advance() {
            advanced += 1;
        }
        advanced
    }

    /// Rewind to before the first element
    ///
    /// Cursors are single-pass, so this always fails.
    fn reset(&mut self) -> SeqResult<()> {
        Err(SeqError::UnsupportedOperation("reset"))
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> Self::Item {
        (**self).current()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        (**self).advance_by(n)
    }
}
