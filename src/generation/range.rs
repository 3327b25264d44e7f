use crate::cursor::Cursor;
use crate::error::{SeqError, SeqResult};
use crate::partition::PartitionExt;
use crate::sequence::Sequence;
use crate::window::Window;

/// Consecutive integers `start, start + 1, ..`, stopping before `end`
///
/// Counted and indexable: count, element access, membership and windows are
/// all answered arithmetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    start: i32,
    end: i32,
}

impl Range {
    pub fn start(&self) -> i32 {
        self.start
    }

    /// One past the last value
    pub fn end(&self) -> i32 {
        self.end
    }

    fn len(&self) -> usize {
        // end >= start and the span fits in i32 by construction
        (self.end - self.start) as usize
    }
}

/// Generate `count` consecutive integers starting at `start`
///
/// Fails with [`SeqError::ArgumentOutOfRange`] on `count` when `count` is
/// negative or `start + count` does not fit in an `i32`.
pub fn range(start: i32, count: i32) -> SeqResult<Range> {
    if count < 0 {
        log::debug!("rejecting range with negative count {}", count);
        return Err(SeqError::ArgumentOutOfRange { param: "count" });
    }
    let end = start.checked_add(count).ok_or_else(|| {
        log::debug!("rejecting range {} + {}: overflows i32", start, count);
        SeqError::ArgumentOutOfRange { param: "count" }
    })?;
    Ok(Range { start, end })
}

impl Sequence for Range {
    type Item = i32;
    type Cursor<'s> = RangeCursor;

    fn cursor(&self) -> Self::Cursor<'_> {
        RangeCursor {
            next: self.start,
            end: self.end,
        }
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.len())
    }

    fn any(&self) -> bool {
        self.end != self.start
    }

    fn contains(&self, value: &i32) -> bool
    where
        Self::Item: PartialEq,
    {
        (self.start..self.end).contains(value)
    }

    fn try_element_at(&self, index: usize) -> Option<i32> {
        if index < self.len() {
            Some(self.start + index as i32)
        } else {
            None
        }
    }

    fn to_vec(&self) -> Vec<i32> {
        (self.start..self.end).collect()
    }
}

impl PartitionExt for Range {
    type Partitioned = Range;

    fn partition(self, window: Window) -> Self::Partitioned {
        let window = window.clamp(self.len());
        let start = self.start + window.skip as i32;
        Range {
            start,
            end: start + window.take as i32,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RangeCursor {
    next: i32,
    end: i32,
}

impl Cursor for RangeCursor {
    type Item = i32;

    #[inline]
    fn advance(&mut self) -> bool {
        if self.next < self.end {
            self.next += 1;
            true
        } else {
            false
        }
    }

    /// Before the first advance this is `start - 1`; not an element
    #[inline]
    fn current(&self) -> i32 {
        self.next.wrapping_sub(1)
    }

    fn advance_by(&mut self, n: usize) -> usize {
        let advanced = n.min((self.end - self.next) as usize);
        self.next += advanced as i32;
        advanced
    }
}
