use core::fmt;
use core::ops::Index;

use super::{IntoIter, Iter, RingBuffer};

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();

        // the boxed slots are `MaybeUninit`, so freeing the storage never
        // touches the elements again
    }
}

impl<T> Default for RingBuffer<T> {
    #[inline]
    fn default() -> Self {
        RingBuffer::new()
    }
}

impl<T> Clone for RingBuffer<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut cloned = RingBuffer::allocate(self.storage_len());
        for element in self {
            cloned.enqueue_expecting_space_available(element.clone());
        }
        cloned
    }
}

impl<T> PartialEq for RingBuffer<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for RingBuffer<T> where T: Eq {}

#[cfg(test)]
impl<T> PartialEq<Vec<T>> for RingBuffer<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Vec<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(element) => element,
            None => panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index
            ),
        }
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Debug for RingBuffer<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
