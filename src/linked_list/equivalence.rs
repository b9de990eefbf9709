//! Equality policies deciding when two list elements are "the same item".

use core::fmt;
use core::marker::PhantomData;

/// Decides whether two elements identify the same item.
///
/// `SinglyLinkedList` uses its policy to reject duplicates on insert and
/// to match elements in `find` and `delete`. The relation should be an
/// equivalence (reflexive, symmetric, transitive); the list does not
/// check this.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `a` and `b` identify the same item.
    fn equivalent(&self, a: &T, b: &T) -> bool;
}

/// Whole-value equality through `PartialEq`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Natural;

impl<T: PartialEq + ?Sized> Equivalence<T> for Natural {
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Equality of a key extracted from each element.
///
/// ```
/// use ringlist::{ByKey, Equivalence};
///
/// struct Book { isbn: u64, title: &'static str }
///
/// let by_isbn = ByKey::new(|b: &Book| b.isbn);
/// let a = Book { isbn: 1, title: "Dune" };
/// let b = Book { isbn: 1, title: "Dune (2nd ed.)" };
/// assert!(by_isbn.equivalent(&a, &b));
/// ```
pub struct ByKey<F, K> {
    extract: F,
    _key: PhantomData<fn() -> K>,
}

impl<F, K> ByKey<F, K> {
    /// Wraps a key extraction function.
    pub fn new<T>(extract: F) -> Self
    where
        F: Fn(&T) -> K,
    {
        ByKey {
            extract,
            _key: PhantomData,
        }
    }

    /// Returns the key of `item`.
    #[inline]
    pub fn key_of<T>(&self, item: &T) -> K
    where
        F: Fn(&T) -> K,
    {
        (self.extract)(item)
    }
}

impl<T, F, K> Equivalence<T> for ByKey<F, K>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        self.key_of(a) == self.key_of(b)
    }
}

impl<F: Clone, K> Clone for ByKey<F, K> {
    fn clone(&self) -> Self {
        ByKey {
            extract: self.extract.clone(),
            _key: PhantomData,
        }
    }
}

impl<F, K> fmt::Debug for ByKey<F, K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ByKey")
    }
}

/// Equality given by an arbitrary binary predicate.
#[derive(Clone, Copy)]
pub struct ByPredicate<F>(
    /// The predicate, called as `f(a, b)`.
    pub F,
);

impl<T, F> Equivalence<T> for ByPredicate<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equivalent(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> fmt::Debug for ByPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("ByPredicate")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_is_partial_eq() {
        assert!(Natural.equivalent(&1, &1));
        assert!(!Natural.equivalent("a", "b"));
    }

    #[test]
    fn by_key_ignores_the_rest() {
        let by_len = ByKey::new(|s: &&str| s.len());
        assert!(by_len.equivalent(&"abc", &"xyz"));
        assert!(!by_len.equivalent(&"ab", &"xyz"));
        assert_eq!(by_len.key_of(&"abcd"), 4);
    }

    #[test]
    fn by_predicate() {
        let same_parity = ByPredicate(|a: &i32, b: &i32| a % 2 == b % 2);
        assert!(same_parity.equivalent(&2, &8));
        assert!(!same_parity.equivalent(&2, &7));
    }
}
