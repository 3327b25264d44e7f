//! Predicate and selector combinators
//!
//! Chained `filter`/`map` calls are fused into one of these values when the
//! operator is built, so a chain of N filters still runs through a single
//! filtering cursor.
//!
//! The traits are implemented for plain closures, which is what callers pass
//! in. The combinator structs implement them by delegating to their parts.

/// Element test used by filtering cursors
pub trait Predicate<T> {
    fn test(&self, item: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, item: &T) -> bool {
        self(item)
    }
}

/// Element test that also receives the element's position
///
/// The position counts elements the filtering cursor has seen, starting at 0
/// after any window has already been skipped.
pub trait PredicateAt<T> {
    fn test_at(&self, item: &T, index: usize) -> bool;
}

impl<T, F> PredicateAt<T> for F
where
    F: Fn(&T, usize) -> bool,
{
    #[inline]
    fn test_at(&self, item: &T, index: usize) -> bool {
        self(item, index)
    }
}

/// Element transform used by projection cursors
pub trait Selector<T> {
    type Output;

    fn apply(&self, item: T) -> Self::Output;
}

impl<T, U, F> Selector<T> for F
where
    F: Fn(T) -> U,
{
    type Output = U;

    #[inline]
    fn apply(&self, item: T) -> U {
        self(item)
    }
}

/// Element transform that also receives the element's position
pub trait SelectorAt<T> {
    type Output;

    fn apply_at(&self, item: T, index: usize) -> Self::Output;
}

impl<T, U, F> SelectorAt<T> for F
where
    F: Fn(T, usize) -> U,
{
    type Output = U;

    #[inline]
    fn apply_at(&self, item: T, index: usize) -> U {
        self(item, index)
    }
}

/// Logical AND of two predicates, in call order
///
/// `second` is only evaluated when `first` accepts.
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> And<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Self { first, second }
    }
}

impl<T, P, Q> Predicate<T> for And<P, Q>
where
    P: Predicate<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn test(&self, item: &T) -> bool {
        self.first.test(item) && self.second.test(item)
    }
}

/// Index-aware predicate followed by a plain one
#[derive(Debug, Clone, Copy)]
pub struct AndAt<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> AndAt<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Self { first, second }
    }
}

impl<T, P, Q> PredicateAt<T> for AndAt<P, Q>
where
    P: PredicateAt<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn test_at(&self, item: &T, index: usize) -> bool {
        self.first.test_at(item, index) && self.second.test(item)
    }
}

/// Plain predicate followed by an index-aware one
///
/// The index is the element's position in the source, including elements
/// `first` rejected.
#[derive(Debug, Clone, Copy)]
pub struct AndThenAt<P, Q> {
    first: P,
    second: Q,
}

impl<P, Q> AndThenAt<P, Q> {
    pub fn new(first: P, second: Q) -> Self {
        Self { first, second }
    }
}

impl<T, P, Q> PredicateAt<T> for AndThenAt<P, Q>
where
    P: Predicate<T>,
    Q: PredicateAt<T>,
{
    #[inline]
    fn test_at(&self, item: &T, index: usize) -> bool {
        self.first.test(item) && self.second.test_at(item, index)
    }
}

/// Function composition `outer(inner(x))`
#[derive(Debug, Clone, Copy)]
pub struct Compose<F, G> {
    inner: F,
    outer: G,
}

impl<F, G> Compose<F, G> {
    pub fn new(inner: F, outer: G) -> Self {
        Self { inner, outer }
    }
}

impl<T, F, G> Selector<T> for Compose<F, G>
where
    F: Selector<T>,
    G: Selector<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn apply(&self, item: T) -> Self::Output {
        self.outer.apply(self.inner.apply(item))
    }
}

/// `outer(inner(x, i))`: an index-aware selector followed by a plain one
#[derive(Debug, Clone, Copy)]
pub struct ComposeAt<F, G> {
    inner: F,
    outer: G,
}

impl<F, G> ComposeAt<F, G> {
    pub fn new(inner: F, outer: G) -> Self {
        Self { inner, outer }
    }
}

impl<T, F, G> SelectorAt<T> for ComposeAt<F, G>
where
    F: SelectorAt<T>,
    G: Selector<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn apply_at(&self, item: T, index: usize) -> Self::Output {
        self.outer.apply(self.inner.apply_at(item, index))
    }
}

/// `outer(inner(x), i)`: a plain selector followed by an index-aware one
#[derive(Debug, Clone, Copy)]
pub struct ComposeIntoAt<F, G> {
    inner: F,
    outer: G,
}

impl<F, G> ComposeIntoAt<F, G> {
    pub fn new(inner: F, outer: G) -> Self {
        Self { inner, outer }
    }
}

impl<T, F, G> SelectorAt<T> for ComposeIntoAt<F, G>
where
    F: Selector<T>,
    G: SelectorAt<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn apply_at(&self, item: T, index: usize) -> Self::Output {
        self.outer.apply_at(self.inner.apply(item), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_and_short_circuits() {
        let second_calls = Cell::new(0);
        let predicate = And::new(
            |x: &i32| *x > 0,
            |x: &i32| {
                second_calls.set(second_calls.get() + 1);
                x % 2 == 0
            },
        );

        assert!(!predicate.test(&-2));
        assert_eq!(second_calls.get(), 0);
        assert!(predicate.test(&2));
        assert!(!predicate.test(&3));
        assert_eq!(second_calls.get(), 2);
    }

    #[test]
    fn test_and_at_passes_index_to_first() {
        let predicate = AndAt::new(|_: &i32, index: usize| index % 2 == 0, |x: &i32| *x > 10);
        assert!(predicate.test_at(&11, 0));
        assert!(!predicate.test_at(&11, 1));
        assert!(!predicate.test_at(&5, 2));
    }

    #[test]
    fn test_and_then_at_runs_plain_predicate_first() {
        let indexed_calls = Cell::new(0);
        let predicate = AndThenAt::new(|x: &i32| *x > 0, |_: &i32, index: usize| {
            indexed_calls.set(indexed_calls.get() + 1);
            index != 2
        });

        assert!(!predicate.test_at(&-1, 0));
        assert_eq!(indexed_calls.get(), 0);
        assert!(predicate.test_at(&1, 1));
        assert!(!predicate.test_at(&1, 2));
        assert_eq!(indexed_calls.get(), 2);
    }

    #[test]
    fn test_compose_applies_inner_first() {
        let selector = Compose::new(|x: i32| x + 1, |x: i32| x * 10);
        assert_eq!(selector.apply(2), 30);
    }

    #[test]
    fn test_compose_changes_types() {
        let selector = Compose::new(|x: i32| x * 2, |x: i32| format!("<{}>", x));
        assert_eq!(selector.apply(21), "<42>");
    }

    #[test]
    fn test_compose_at_variants() {
        let at_then_plain = ComposeAt::new(|x: i32, i: usize| x + i as i32, |x: i32| x * 2);
        assert_eq!(at_then_plain.apply_at(1, 3), 8);

        let plain_then_at = ComposeIntoAt::new(|x: i32| x * 2, |x: i32, i: usize| x + i as i32);
        assert_eq!(plain_then_at.apply_at(1, 3), 5);
    }

    #[test]
    fn test_nested_fusion() {
        let predicate = And::new(And::new(|x: &i32| *x > 0, |x: &i32| *x < 100), |x: &i32| {
            x % 5 == 0
        });
        assert!(predicate.test(&25));
        assert!(!predicate.test(&101));
        assert!(!predicate.test(&7));
    }
}
