use core::fmt;

use super::{IntoIter, Iter, Natural, SinglyLinkedList};

impl<T> Default for SinglyLinkedList<T, Natural> {
    #[inline]
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T, E> Clone for SinglyLinkedList<T, E>
where
    T: Clone,
    E: Clone,
{
    fn clone(&self) -> Self {
        let mut cloned = SinglyLinkedList::with_equivalence(self.eq.clone());
        for item in self {
            cloned.link_back(item.clone());
        }
        cloned
    }
}

impl<T, E1, E2> PartialEq<SinglyLinkedList<T, E2>> for SinglyLinkedList<T, E1>
where
    T: PartialEq,
{
    fn eq(&self, other: &SinglyLinkedList<T, E2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, E> IntoIterator for SinglyLinkedList<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T, E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T, E> IntoIterator for &'a SinglyLinkedList<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, E> fmt::Debug for SinglyLinkedList<T, E>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
