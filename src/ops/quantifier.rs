use crate::cursor::Cursor;

pub fn any<C: Cursor>(mut cursor: C) -> bool {
    cursor.advance()
}

/// True as soon as one element satisfies `predicate`
pub fn any_by<C, P>(mut cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    while cursor.advance() {
        if predicate(&cursor.current()) {
            return true;
        }
    }
    false
}

pub fn any_at<C, P>(mut cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    let mut index = 0;
    while cursor.advance() {
        if predicate(&cursor.current(), index) {
            return true;
        }
        index += 1;
    }
    false
}

/// False as soon as one element fails `predicate`; true for an empty cursor
pub fn all<C, P>(mut cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    while cursor.advance() {
        if !predicate(&cursor.current()) {
            return false;
        }
    }
    true
}

pub fn all_at<C, P>(mut cursor: C, predicate: P) -> bool
where
    C: Cursor,
    P: Fn(&C::Item, usize) -> bool,
{
    let mut index = 0;
    while cursor.advance() {
        if !predicate(&cursor.current(), index) {
            return false;
        }
        index += 1;
    }
    true
}

pub fn contains_by<C, E>(mut cursor: C, value: &C::Item, eq: E) -> bool
where
    C: Cursor,
    E: Fn(&C::Item, &C::Item) -> bool,
{
    while cursor.advance() {
        if eq(&cursor.current(), value) {
            return true;
        }
    }
    false
}
