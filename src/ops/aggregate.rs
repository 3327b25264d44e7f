use crate::cursor::Cursor;

/// Count the elements left in `cursor` by advancing it to the end
///
/// `current()` is never read, so projections upstream are not evaluated.
pub fn count<C: Cursor>(mut cursor: C) -> usize {
    let mut count = 0;
    while cursor.advance() {
        count += 1;
    }
    count
}

pub fn for_each<C, A>(mut cursor: C, mut action: A)
where
    C: Cursor,
    A: FnMut(C::Item),
{
    while cursor.advance() {
        action(cursor.current());
    }
}

/// Like [`for_each`], also passing each element's position in the traversal
pub fn for_each_at<C, A>(mut cursor: C, mut action: A)
where
    C: Cursor,
    A: FnMut(C::Item, usize),
{
    let mut index = 0;
    while cursor.advance() {
        action(cursor.current(), index);
        index += 1;
    }
}
