//! Clamped `(skip, take)` arithmetic shared by every partitioning operator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A sub-range of a sequence: drop `skip` elements, then yield at most `take`
///
/// An unbounded take is `usize::MAX`. Composition never needs the source
/// length; `clamp` applies it once at the end and gives the same result as
/// clamping after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window {
    pub skip: usize,
    pub take: usize,
}

impl Window {
    /// Window covering the whole sequence
    pub const ALL: Window = Window {
        skip: 0,
        take: usize::MAX,
    };

    pub fn new(skip: usize, take: usize) -> Self {
        Self { skip, take }
    }

    pub fn skipping(skip: usize) -> Self {
        Self {
            skip,
            take: usize::MAX,
        }
    }

    pub fn taking(take: usize) -> Self {
        Self { skip: 0, take }
    }

    /// Bound the window by a source of `len` elements
    ///
    /// Afterwards `skip <= len` and `skip + take <= len`.
    pub fn clamp(self, len: usize) -> Self {
        let skip = self.skip.min(len);
        let take = self.take.min(len - skip);
        Self { skip, take }
    }

    /// Drop `count` more elements from the front of this window
    pub fn then_skip(self, count: usize) -> Self {
        Self {
            skip: self.skip.saturating_add(count),
            take: self.take.saturating_sub(count),
        }
    }

    /// Keep at most `count` elements of this window
    pub fn then_take(self, count: usize) -> Self {
        Self {
            skip: self.skip,
            take: self.take.min(count),
        }
    }

    /// Apply `next` to the elements this window yields
    pub fn then(self, next: Window) -> Self {
        self.then_skip(next.skip).then_take(next.take)
    }

    /// Number of elements the window yields from a source of `len` elements
    pub fn len(self, len: usize) -> usize {
        self.clamp(len).take
    }
}

impl Default for Window {
    fn default() -> Self {
        Window::ALL
    }
}
