use seqcomb::prelude::*;
use seqcomb::{SeqError, from_slice, range};

#[test]
fn test_filter_then_project_to_strings() {
    let data = [1, 2, 3, 4, 5];
    let seq = from_slice(&data)
        .filter(|x| **x % 2 == 0)
        .map(|x| x.to_string());
    assert_eq!(seq.to_vec(), vec!["2", "4"]);
}

#[test]
fn test_empty_range() {
    let seq = range(0, 0).unwrap();
    assert!(!seq.any());
    assert_eq!(seq.count(), 0);

    let error = seq.element_at(0).unwrap_err();
    assert!(error.is_range_error());
    assert_eq!(seq.try_element_at(0), None);
}

#[test]
fn test_range_window() {
    let seq = range(10, 5).unwrap().skip(2).take(2);
    assert_eq!(seq.to_vec(), vec![12, 13]);
}

#[test]
fn test_first_on_empty() {
    let data: [i32; 0] = [];
    let seq = from_slice(&data).copied();

    assert_eq!(seq.first(), Err(SeqError::EmptySequence));
    assert_eq!(seq.first_or_default(), 0);
    assert_eq!(seq.try_first(), None);
}

#[test]
fn test_single_with_several_matches() {
    let data = [1, 1, 2];
    let seq = from_slice(&data).filter(|x| **x == 1);
    assert_eq!(seq.single(), Err(SeqError::MultipleMatches));
    assert_eq!(seq.try_single(), None);
    assert_eq!(seq.copied().single_or_default(), Err(SeqError::MultipleMatches));

    let none = from_slice(&data).filter(|x| **x == 7).copied();
    assert_eq!(none.single_or_default(), Ok(0));
}

#[test]
fn test_dictionary_duplicate_key() {
    let data = [(1, "a"), (1, "b")];
    let result = from_slice(&data).to_dictionary(|pair| pair.0);
    assert_eq!(result, Err(SeqError::DuplicateKey { index: 1 }));
}

#[test]
fn test_element_at_bounds_on_indexable_source() {
    // Negative indices cannot be expressed; the largest index stands in for them.
    let data = [3, 4, 5];
    let seq = from_slice(&data);
    assert!(seq.element_at(usize::MAX).is_err());
    assert!(seq.element_at(3).is_err());
    assert_eq!(seq.element_at(2), Ok(&5));
}

#[test]
fn test_scoped_release_on_early_abandon() {
    use std::cell::Cell;

    let released = Cell::new(0);
    let data = [1, 2, 3];
    let seq = from_slice(&data);
    {
        let mut cursor = seq.scoped(|| released.set(released.get() + 1));
        assert!(Cursor::advance(&mut cursor));
    }
    assert_eq!(released.get(), 1);

    let mut cursor = seq.scoped(|| released.set(released.get() + 1));
    while Cursor::advance(&mut cursor) {}
    drop(cursor);
    assert_eq!(released.get(), 2);
}

#[test]
fn test_scoped_release_when_selector_panics() {
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    let released = Cell::new(false);
    let data = [1, 2, 3];
    let seq = from_slice(&data).map(|x| {
        if *x == 2 {
            panic!("selector failure");
        }
        *x
    });

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        seq.scoped(|| released.set(true)).for_each(drop);
    }));
    assert!(outcome.is_err());
    assert!(released.get());
}
