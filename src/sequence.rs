use crate::cursor::Cursor;
use crate::cursors::{CursorIter, Scoped};
use crate::error::{SeqError, SeqResult};
use crate::ops::{aggregate, conversion, element, quantifier};
use std::collections::HashMap;
use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

/// An immutable, restartable description of a deferred traversal
///
/// A sequence value never changes after construction. Every call to
/// [`cursor`](Sequence::cursor) hands out independent traversal state, so the
/// same value can be walked any number of times.
///
/// The provided methods are the terminal operations. Each one is written once
/// against the cursor protocol; sources override them only when they can
/// answer faster (a known count, positional access), never to change the
/// result.
pub trait Sequence {
    /// The type of elements the sequence yields
    type Item;

    /// Traversal state borrowed from the sequence value
    type Cursor<'s>: Cursor<Item = Self::Item>
    where
        Self: 's;

    /// Start a fresh traversal, positioned before the first element
    fn cursor(&self) -> Self::Cursor<'_>;

    /// Number of elements, when it is known without traversing
    fn count_hint(&self) -> Option<usize> {
        None
    }

    /// Traverse through the standard [`Iterator`] interface
    fn iter(&self) -> CursorIter<Self::Cursor<'_>> {
        CursorIter::new(self.cursor())
    }

    /// Start a traversal that runs `release` exactly once when it ends
    ///
    /// See [`Scoped`] for when the hook runs.
    fn scoped<F>(&self, release: F) -> Scoped<Self::Cursor<'_>, F>
    where
        F: FnOnce(),
    {
        Scoped::new(self.cursor(), release)
    }

    fn count(&self) -> usize {
        match self.count_hint() {
            Some(count) => count,
            None => aggregate::count(self.cursor()),
        }
    }

    /// Whether the sequence has at least one element
    fn any(&self) -> bool {
        match self.count_hint() {
            Some(count) => count != 0,
            None => quantifier::any(self.cursor()),
        }
    }

    /// Whether at least one element satisfies `predicate`
    fn any_by<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        quantifier::any_by(self.cursor(), predicate)
    }

    /// Like [`any_by`](Sequence::any_by), also passing each element's position
    fn any_at<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        quantifier::any_at(self.cursor(), predicate)
    }

    /// Whether every element satisfies `predicate`; true when empty
    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        quantifier::all(self.cursor(), predicate)
    }

    fn all_at<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item, usize) -> bool,
    {
        quantifier::all_at(self.cursor(), predicate)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.contains_by(value, |a, b| a == b)
    }

    /// Like [`contains`](Sequence::contains) with caller-supplied equality
    ///
    /// An empty counted sequence answers without traversing.
    fn contains_by<E>(&self, value: &Self::Item, eq: E) -> bool
    where
        E: Fn(&Self::Item, &Self::Item) -> bool,
    {
        if self.count_hint() == Some(0) {
            return false;
        }
        quantifier::contains_by(self.cursor(), value, eq)
    }

    fn try_first(&self) -> Option<Self::Item> {
        element::try_first(self.cursor())
    }

    fn first(&self) -> SeqResult<Self::Item> {
        self.try_first().ok_or(SeqError::EmptySequence)
    }

    /// The first element, or `Default::default()` when there is none
    ///
    /// A default-valued first element and an empty sequence give the same
    /// answer; use [`try_first`](Sequence::try_first) to tell them apart.
    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.try_first().unwrap_or_default()
    }

    /// The only element, or `None` when there are zero or several
    fn try_single(&self) -> Option<Self::Item> {
        element::single(self.cursor()).ok().flatten()
    }

    fn single(&self) -> SeqResult<Self::Item> {
        element::single(self.cursor())?.ok_or(SeqError::EmptySequence)
    }

    /// The only element, or `Default::default()` when there is none
    ///
    /// Still fails with [`SeqError::MultipleMatches`] on several elements.
    fn single_or_default(&self) -> SeqResult<Self::Item>
    where
        Self::Item: Default,
    {
        Ok(element::single(self.cursor())?.unwrap_or_default())
    }

    fn try_element_at(&self, index: usize) -> Option<Self::Item> {
        if self.count_hint().is_some_and(|count| index >= count) {
            return None;
        }
        element::try_element_at(self.cursor(), index)
    }

    fn element_at(&self, index: usize) -> SeqResult<Self::Item> {
        self.try_element_at(index)
            .ok_or_else(|| SeqError::IndexOutOfRange {
                index,
                len: self.count_hint(),
            })
    }

    fn element_at_or_default(&self, index: usize) -> Self::Item
    where
        Self::Item: Default,
    {
        self.try_element_at(index).unwrap_or_default()
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        conversion::to_vec(self.cursor(), self.count_hint())
    }

    fn to_boxed_slice(&self) -> Box<[Self::Item]> {
        self.to_vec().into_boxed_slice()
    }

    /// Map each element by the key `key_selector` derives from it
    fn to_dictionary<K, KS>(&self, key_selector: KS) -> SeqResult<HashMap<K, Self::Item>>
    where
        K: Eq + Hash,
        KS: Fn(&Self::Item) -> K,
    {
        self.to_dictionary_with_hasher(key_selector, |item| item, RandomState::new())
    }

    fn to_dictionary_with<K, V, KS, ES>(
        &self,
        key_selector: KS,
        element_selector: ES,
    ) -> SeqResult<HashMap<K, V>>
    where
        K: Eq + Hash,
        KS: Fn(&Self::Item) -> K,
        ES: Fn(Self::Item) -> V,
    {
        self.to_dictionary_with_hasher(key_selector, element_selector, RandomState::new())
    }

    /// Build a map using `hasher`, which decides key equality together with
    /// the key's `Eq` implementation
    fn to_dictionary_with_hasher<K, V, H, KS, ES>(
        &self,
        key_selector: KS,
        element_selector: ES,
        hasher: H,
    ) -> SeqResult<HashMap<K, V, H>>
    where
        K: Eq + Hash,
        H: BuildHasher,
        KS: Fn(&Self::Item) -> K,
        ES: Fn(Self::Item) -> V,
    {
        conversion::to_dictionary(
            self.cursor(),
            self.count_hint(),
            key_selector,
            element_selector,
            hasher,
        )
    }

    fn for_each<A>(&self, action: A)
    where
        A: FnMut(Self::Item),
    {
        aggregate::for_each(self.cursor(), action)
    }

    fn for_each_at<A>(&self, action: A)
    where
        A: FnMut(Self::Item, usize),
    {
        aggregate::for_each_at(self.cursor(), action)
    }
}

impl<'r, S> Sequence for &'r S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;
    type Cursor<'s>
        = S::Cursor<'r>
    where
        Self: 's;

    fn cursor(&self) -> Self::Cursor<'_> {
        let inner: &'r S = *self;
        inner.cursor()
    }

    fn count_hint(&self) -> Option<usize> {
        (**self).count_hint()
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn any(&self) -> bool {
        (**self).any()
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        (**self).contains(value)
    }

    fn contains_by<E>(&self, value: &Self::Item, eq: E) -> bool
    where
        E: Fn(&Self::Item, &Self::Item) -> bool,
    {
        (**self).contains_by(value, eq)
    }

    fn try_first(&self) -> Option<Self::Item> {
        (**self).try_first()
    }

    fn try_element_at(&self, index: usize) -> Option<Self::Item> {
        (**self).try_element_at(index)
    }

    fn to_vec(&self) -> Vec<Self::Item> {
        (**self).to_vec()
    }
}
