use crate::cursor::Cursor;
use crate::error::{SeqError, SeqResult};

pub fn try_first<C: Cursor>(mut cursor: C) -> Option<C::Item> {
    if cursor.advance() {
        Some(cursor.current())
    } else {
        None
    }
}

/// The only element of `cursor`, or `None` when it has none
///
/// A second element is detected by advancing once past the first, so a
/// filtering cursor keeps scanning until it finds another accepted element
/// or runs out.
pub fn single<C: Cursor>(mut cursor: C) -> SeqResult<Option<C::Item>> {
    if !cursor.advance() {
        return Ok(None);
    }
    let first = cursor.current();
    if cursor.advance() {
        return Err(SeqError::MultipleMatches);
    }
    Ok(Some(first))
}

/// Element at `index` counted from the cursor's current position
///
/// Only elements the cursor yields are counted, so a filtering cursor skips
/// `index` accepted elements.
pub fn try_element_at<C: Cursor>(mut cursor: C, index: usize) -> Option<C::Item> {
    if cursor.advance_by(index) == index && cursor.advance() {
        Some(cursor.current())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::SliceCursor;

    #[test]
    fn test_try_first() {
        let data = [7, 8];
        assert_eq!(try_first(SliceCursor::new(&data)), Some(&7));

        let empty: [i32; 0] = [];
        assert_eq!(try_first(SliceCursor::new(&empty)), None);
    }

    #[test]
    fn test_single_one_element() {
        let data = [7];
        assert_eq!(single(SliceCursor::new(&data)), Ok(Some(&7)));
    }

    #[test]
    fn test_single_empty() {
        let empty: [i32; 0] = [];
        assert_eq!(single(SliceCursor::new(&empty)), Ok(None));
    }

    #[test]
    fn test_single_many() {
        let data = [7, 8];
        assert_eq!(
            single(SliceCursor::new(&data)),
            Err(SeqError::MultipleMatches)
        );
    }

    #[test]
    fn test_try_element_at() {
        let data = [10, 11, 12];
        assert_eq!(try_element_at(SliceCursor::new(&data), 0), Some(&10));
        assert_eq!(try_element_at(SliceCursor::new(&data), 2), Some(&12));
        assert_eq!(try_element_at(SliceCursor::new(&data), 3), None);
        assert_eq!(try_element_at(SliceCursor::new(&data), usize::MAX), None);
    }
}
