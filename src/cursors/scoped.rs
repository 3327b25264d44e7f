use crate::cursor::Cursor;
use std::fmt;

/// Cursor that owns a resource and releases it exactly once
///
/// The release hook runs on whichever exit comes first: the `advance()` that
/// reports exhaustion, or drop. Drop covers abandoning the traversal early and
/// unwinding out of a panicking predicate or selector.
pub struct Scoped<C, F>
where
    F: FnOnce(),
{
    cursor: C,
    release: Option<F>,
}

impl<C, F> Scoped<C, F>
where
    F: FnOnce(),
{
    pub fn new(cursor: C, release: F) -> Self {
        Self {
            cursor,
            release: Some(release),
        }
    }

    /// Whether the release hook has already run
    pub fn is_released(&self) -> bool {
        self.release.is_none()
    }

    fn release(&mut self) {
        if let Some(release) = self.release.take() {
            log::trace!("releasing scoped cursor");
            release();
        }
    }
}

impl<C, F> Cursor for Scoped<C, F>
where
    C: Cursor,
    F: FnOnce(),
{
    type Item = C::Item;

    fn advance(&mut self) -> bool {
        if self.is_released() {
            return false;
        }
        if self.cursor.advance() {
            true
        } else {
            self.release();
            false
        }
    }

    fn current(&self) -> Self::Item {
        self.cursor.current()
    }

    fn advance_by(&mut self, n: usize) -> usize {
        if self.is_released() {
            return 0;
        }
        let advanced = self.cursor.advance_by(n);
        if advanced < n {
            self.release();
        }
        advanced
    }
}

impl<C, F> Iterator for Scoped<C, F>
where
    C: Cursor,
    F: FnOnce(),
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.current())
        } else {
            None
        }
    }
}

impl<C, F> Drop for Scoped<C, F>
where
    F: FnOnce(),
{
    fn drop(&mut self) {
        self.release();
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Scoped<C, F>
where
    F: FnOnce(),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scoped")
            .field("cursor", &self.cursor)
            .field("released", &self.is_released())
            .finish()
    }
}
