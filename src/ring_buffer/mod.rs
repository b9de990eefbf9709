use core::mem::MaybeUninit;

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::error::{InvalidCapacity, QueueEmpty, QueueFull};
use crate::utils::*;
use crate::RangeArgument;

mod iterator_impls;
mod trait_impls;

pub use self::iterator_impls::{Drain, IntoIter, Iter};

/// Capacity used by [`RingBuffer::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// A fixed capacity FIFO queue.
///
/// Use `enqueue` to add to the back of the queue and `dequeue` to take
/// from the front. Iterating over a `RingBuffer` goes front to back.
///
/// # Capacity
///
/// The backing storage always has `capacity() + 1` slots. One slot stays
/// empty so that a full buffer can be told apart from an empty one using
/// only the two indices.
/// [Read more]
///
/// [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
pub struct RingBuffer<T> {
    xs: Box<[MaybeUninit<T>]>,
    // slot before the oldest element
    front: usize,
    // slot of the newest element
    rear: usize,
    len: usize,
}

impl<T> RingBuffer<T> {
    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.storage_len())
    }

    #[inline]
    fn storage_len(&self) -> usize {
        self.xs.len()
    }

    /// Physical slot of the element at logical `index` (0 is the front).
    #[inline]
    fn slot(&self, index: usize) -> usize {
        self.wrap_add(self.front, index + 1)
    }

    /// Moves an element out of the buffer.
    ///
    /// The slot must be initialised and is considered uninitialised
    /// afterwards.
    #[inline]
    unsafe fn buffer_read(&mut self, off: usize) -> T {
        self.xs[off].assume_init_read()
    }

    /// Writes an element into an uninitialised slot.
    #[inline]
    fn buffer_write(&mut self, off: usize, value: T) {
        self.xs[off].write(value);
    }

    #[inline]
    unsafe fn buffer_ref(&self, off: usize) -> &T {
        self.xs[off].assume_init_ref()
    }

    #[inline]
    fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.capacity());
        self.len = len;
        self.rear = self.wrap_add(self.front, len);
    }

    fn allocate(storage_len: usize) -> Self {
        let xs: Vec<MaybeUninit<T>> = (0..storage_len).map(|_| MaybeUninit::uninit()).collect();
        RingBuffer {
            xs: xs.into_boxed_slice(),
            front: storage_len - 1,
            rear: storage_len - 1,
            len: 0,
        }
    }

    #[inline]
    fn enqueue_expecting_space_available(&mut self, element: T) {
        debug_assert!(!self.is_full());
        let rear = self.wrap_add(self.rear, 1);
        self.buffer_write(rear, element);
        self.rear = rear;
        self.len += 1;
        debug_assert_eq!(self.len, count(self.front, self.rear, self.storage_len()));
    }
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` with room for [`DEFAULT_CAPACITY`]
    /// elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let queue: RingBuffer<u32> = RingBuffer::new();
    /// assert_eq!(queue.capacity(), 10);
    /// ```
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY + 1)
    }

    /// Creates an empty `RingBuffer` with room for exactly `capacity`
    /// elements.
    ///
    /// Fails with `InvalidCapacity` if `capacity` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{InvalidCapacity, RingBuffer};
    ///
    /// let queue: RingBuffer<u32> = RingBuffer::with_capacity(3).unwrap();
    /// assert_eq!(queue.capacity(), 3);
    ///
    /// let err = RingBuffer::<u32>::with_capacity(0).unwrap_err();
    /// assert_eq!(err, InvalidCapacity { capacity: 0 });
    /// ```
    pub fn with_capacity(capacity: usize) -> Result<Self, InvalidCapacity> {
        match capacity.checked_add(1) {
            Some(storage_len) if capacity > 0 => Ok(Self::allocate(storage_len)),
            _ => {
                tracing::trace!(capacity, "rejected ring buffer capacity");
                Err(InvalidCapacity { capacity })
            }
        }
    }

    /// Return the capacity of the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let queue: RingBuffer<u8> = RingBuffer::with_capacity(4).unwrap();
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage_len() - 1
    }

    /// Returns the number of elements in the `RingBuffer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut v = RingBuffer::new();
    /// assert_eq!(v.len(), 0);
    /// v.enqueue(1).unwrap();
    /// assert_eq!(v.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer contains no elements
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut v = RingBuffer::new();
    /// assert!(v.is_empty());
    /// v.enqueue(1).unwrap();
    /// assert!(!v.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front == self.rear
    }

    /// Returns true if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut buf = RingBuffer::with_capacity(1).unwrap();
    ///
    /// assert!(!buf.is_full());
    ///
    /// buf.enqueue(1).unwrap();
    ///
    /// assert!(buf.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.wrap_add(self.rear, 1) == self.front
    }

    /// Adds an element to the back of the queue.
    ///
    /// If the queue is full the element is handed back inside `QueueFull`
    /// and the queue is not modified.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _] <-(+)- 1 => [1, _] -> Ok
    /// [1, _] <-(+)- 2 => [1, 2] -> Ok
    /// [1, 2] <-(+)- 3 => [1, 2] -> Err(QueueFull { element: 3 })
    /// ```
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut queue = RingBuffer::with_capacity(2).unwrap();
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// let overflow = queue.enqueue(3).unwrap_err();
    ///
    /// assert_eq!(overflow.into_inner(), 3);
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn enqueue(&mut self, element: T) -> Result<(), QueueFull<T>> {
        if self.is_full() {
            tracing::trace!(capacity = self.capacity(), "enqueue on a full ring buffer");
            return Err(QueueFull { element });
        }
        self.enqueue_expecting_space_available(element);
        Ok(())
    }

    /// Removes the element at the front of the queue and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{QueueEmpty, RingBuffer};
    ///
    /// let mut queue = RingBuffer::new();
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    ///
    /// assert_eq!(queue.dequeue(), Ok(1));
    /// assert_eq!(queue.dequeue(), Ok(2));
    /// assert_eq!(queue.dequeue(), Err(QueueEmpty));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, QueueEmpty> {
        if self.is_empty() {
            tracing::trace!("dequeue on an empty ring buffer");
            return Err(QueueEmpty);
        }
        let front = self.wrap_add(self.front, 1);
        self.front = front;
        self.len -= 1;
        unsafe { Ok(self.buffer_read(front)) }
    }

    /// Provides a reference to the element the next `dequeue` would
    /// return.
    ///
    /// Fails with `QueueEmpty` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{QueueEmpty, RingBuffer};
    ///
    /// let mut queue = RingBuffer::new();
    /// assert_eq!(queue.front(), Err(QueueEmpty));
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert_eq!(queue.front(), Ok(&1));
    /// ```
    pub fn front(&self) -> Result<&T, QueueEmpty> {
        if self.is_empty() {
            tracing::trace!("front of an empty ring buffer");
            return Err(QueueEmpty);
        }
        unsafe { Ok(self.buffer_ref(self.slot(0))) }
    }

    /// Provides a reference to the most recently enqueued element, or
    /// `None` if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new();
    /// assert_eq!(queue.back(), None);
    /// queue.enqueue(1).unwrap();
    /// queue.enqueue(2).unwrap();
    /// assert_eq!(queue.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            unsafe { Some(self.buffer_ref(self.rear)) }
        }
    }

    /// Retrieves an element in the `RingBuffer` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new();
    /// queue.enqueue(3).unwrap();
    /// queue.enqueue(4).unwrap();
    /// queue.enqueue(5).unwrap();
    /// assert_eq!(queue.get(1), Some(&4));
    /// assert_eq!(queue.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len() {
            unsafe { Some(self.buffer_ref(self.slot(index))) }
        } else {
            None
        }
    }

    /// Returns `true` if the `RingBuffer` contains an element equal to the
    /// given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new();
    ///
    /// queue.enqueue(0).unwrap();
    /// queue.enqueue(1).unwrap();
    ///
    /// assert_eq!(queue.contains(&1), true);
    /// assert_eq!(queue.contains(&10), false);
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().any(|e| e == x)
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new();
    /// queue.enqueue(5).unwrap();
    /// queue.enqueue(3).unwrap();
    /// queue.enqueue(4).unwrap();
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.xs, self.front, self.len)
    }

    /// Copies the contents of the queue, front to back, into a `Vec`.
    ///
    /// The queue is not modified.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut queue = RingBuffer::with_capacity(2).unwrap();
    /// assert!(queue.to_vec().is_empty());
    ///
    /// queue.enqueue('a').unwrap();
    /// queue.enqueue('b').unwrap();
    /// queue.dequeue().unwrap();
    /// queue.enqueue('c').unwrap();
    /// assert_eq!(queue.to_vec(), vec!['b', 'c']);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Create a draining iterator that removes the specified range in the
    /// `RingBuffer` and yields the removed items.
    ///
    /// Note 1: The element range is removed even if the iterator is not
    /// consumed until the end.
    ///
    /// Note 2: It is unspecified how many elements are removed from the
    /// queue, if the `Drain` value is not dropped, but the borrow it holds
    /// expires (eg. due to mem::forget).
    ///
    /// # Panics
    ///
    /// Panics if the starting point is greater than the end point or if
    /// the end point is greater than the length of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut queue = RingBuffer::new();
    /// for i in 1..4 {
    ///     queue.enqueue(i).unwrap();
    /// }
    /// let drain1: Vec<_> = queue.drain(2..).collect();
    /// assert_eq!(drain1, vec![3]);
    ///
    /// // A full range clears all contents
    /// let drain2: Vec<_> = queue.drain(..).collect();
    /// assert_eq!(drain2, vec![1, 2]);
    /// assert!(queue.is_empty());
    /// ```
    pub fn drain<R>(&mut self, range: R) -> Drain<T>
    where
        R: RangeArgument<usize>,
    {
        let len = self.len();
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(len);
        assert!(start <= end, "drain lower bound was too large");
        assert!(end <= len, "drain upper bound was too large");

        // Until the drain is dropped only the prefix is considered live, so
        // a leaked drain can only leak elements, never double drop them.
        self.set_len(start);

        Drain::new(self, start, end, len)
    }

    /// Clears the buffer, removing all values.
    ///
    /// Indices return to their initial position; the storage is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::RingBuffer;
    ///
    /// let mut v = RingBuffer::new();
    /// v.enqueue(1).unwrap();
    /// v.clear();
    /// assert!(v.is_empty());
    /// assert_eq!(v.len(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.drain(..);
        let initial = self.storage_len() - 1;
        self.front = initial;
        self.rear = initial;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        let mut tester = RingBuffer::with_capacity(7).unwrap();
        assert_eq!(tester.capacity(), 7);
        assert_eq!(tester.len(), 0);

        tester.enqueue(1).unwrap();
        tester.enqueue(2).unwrap();
        tester.enqueue(3).unwrap();
        tester.enqueue(4).unwrap();
        assert_eq!(tester.len(), 4);

        assert_eq!(tester.dequeue(), Ok(1));
        assert_eq!(tester.dequeue(), Ok(2));
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.dequeue(), Ok(3));
        assert_eq!(tester.dequeue(), Ok(4));
        assert_eq!(tester.dequeue(), Err(QueueEmpty));
    }

    #[test]
    fn default_capacity() {
        let tester: RingBuffer<u8> = RingBuffer::new();
        assert_eq!(tester.capacity(), DEFAULT_CAPACITY);
        assert_eq!(tester.storage_len(), DEFAULT_CAPACITY + 1);
        assert!(tester.is_empty());
        assert!(!tester.is_full());
    }

    #[test]
    fn zero_capacity() {
        assert_eq!(
            RingBuffer::<u8>::with_capacity(0).err(),
            Some(InvalidCapacity { capacity: 0 })
        );
        assert_eq!(
            RingBuffer::<u8>::with_capacity(usize::MAX).err(),
            Some(InvalidCapacity { capacity: usize::MAX })
        );
    }

    #[test]
    fn overflow() {
        let mut tester = RingBuffer::with_capacity(2).unwrap();
        assert_eq!(tester.enqueue(1), Ok(()));
        assert_eq!(tester.enqueue(2), Ok(()));
        assert!(tester.is_full());
        assert_eq!(tester.enqueue(3).unwrap_err().into_inner(), 3);
        assert_eq!(tester.len(), 2);
        assert_eq!(tester.to_vec(), vec![1, 2]);
    }

    #[test]
    fn pop_empty() {
        let mut tester = RingBuffer::with_capacity(2).unwrap();
        assert_eq!(tester.dequeue(), Err(QueueEmpty));
        assert_eq!(tester.enqueue(1), Ok(()));
        assert_eq!(tester.dequeue(), Ok(1));
        assert_eq!(tester.is_empty(), true);
        assert_eq!(tester.len(), 0);
        assert_eq!(tester.dequeue(), Err(QueueEmpty));
        assert_eq!(tester.front(), Err(QueueEmpty));
    }

    #[test]
    fn front_follows_dequeue() {
        let mut tester = RingBuffer::with_capacity(3).unwrap();
        for i in 0..3 {
            tester.enqueue(i).unwrap();
        }
        for i in 0..3 {
            assert_eq!(tester.front(), Ok(&i));
            assert_eq!(tester.dequeue(), Ok(i));
        }
        assert_eq!(tester.front(), Err(QueueEmpty));
    }

    #[test]
    fn wrap_around() {
        const CAP: usize = 5;
        let mut tester = RingBuffer::with_capacity(CAP).unwrap();
        for i in 0..4 * CAP {
            assert_eq!(tester.enqueue(i), Ok(()));
            assert_eq!(tester.front(), Ok(&i));
            assert_eq!(tester.dequeue(), Ok(i));
            assert!(tester.is_empty());
            assert!(tester.front < tester.storage_len());
            assert!(tester.rear < tester.storage_len());
        }
    }

    #[test]
    fn full_at_every_offset() {
        const CAP: usize = 4;
        let mut tester = RingBuffer::with_capacity(CAP).unwrap();
        for padding in 0..CAP + 1 {
            tester.clear();
            for i in 0..padding {
                tester.enqueue(i).unwrap();
                tester.dequeue().unwrap();
            }
            for i in 0..CAP {
                assert!(!tester.is_full());
                tester.enqueue(i).unwrap();
            }
            assert!(tester.is_full());
            assert_eq!(tester.len(), CAP);
            assert_eq!(tester.to_vec(), (0..CAP).collect::<Vec<_>>());
            assert_eq!(tester.back(), Some(&(CAP - 1)));
        }
    }

    #[test]
    fn index() {
        let mut tester = RingBuffer::with_capacity(3).unwrap();
        tester.enqueue(1).unwrap();
        tester.enqueue(2).unwrap();
        tester.enqueue(3).unwrap();
        assert_eq!(tester[0], 1);
        assert_eq!(tester.dequeue(), Ok(1));
        assert_eq!(tester[0], 2);
        tester.enqueue(4).unwrap();
        assert_eq!(tester[2], 4);
        assert_eq!(tester.get(3), None);
    }

    #[test]
    #[should_panic]
    fn index_overflow() {
        let mut tester = RingBuffer::with_capacity(3).unwrap();
        tester.enqueue(1).unwrap();
        tester.enqueue(2).unwrap();
        tester[2];
    }

    #[test]
    fn clear_resets_indices() {
        let mut tester = RingBuffer::with_capacity(3).unwrap();
        tester.enqueue(1).unwrap();
        tester.enqueue(2).unwrap();
        tester.dequeue().unwrap();
        tester.clear();
        assert_eq!(tester.front, tester.storage_len() - 1);
        assert_eq!(tester.rear, tester.storage_len() - 1);
        assert!(tester.is_empty());
        assert_eq!(tester.capacity(), 3);
        tester.enqueue(9).unwrap();
        assert_eq!(tester.to_vec(), vec![9]);
    }

    #[test]
    fn drain_middle() {
        const CAP: usize = 6;
        let mut tester = RingBuffer::with_capacity(CAP).unwrap();
        for padding in 0..CAP + 1 {
            tester.clear();
            for _ in 0..padding {
                tester.enqueue(0).unwrap();
                tester.dequeue().unwrap();
            }
            for i in 0..CAP {
                tester.enqueue(i).unwrap();
            }
            let drained: Vec<_> = tester.drain(1..4).collect();
            assert_eq!(drained, vec![1, 2, 3]);
            assert_eq!(tester.to_vec(), vec![0, 4, 5]);
            assert_eq!(tester.len(), 3);
            assert_eq!(tester.back(), Some(&5));
            tester.enqueue(6).unwrap();
            assert_eq!(tester.to_vec(), vec![0, 4, 5, 6]);
        }
    }

    #[test]
    fn drain_not_consumed() {
        let mut tester = RingBuffer::with_capacity(4).unwrap();
        for i in 0..4 {
            tester.enqueue(i).unwrap();
        }
        {
            let mut drain = tester.drain(..2);
            assert_eq!(drain.next(), Some(0));
        }
        assert_eq!(tester.to_vec(), vec![2, 3]);
    }

    #[test]
    fn drain_back() {
        let mut tester = RingBuffer::with_capacity(5).unwrap();
        for i in 0..5 {
            tester.enqueue(i).unwrap();
        }
        let drained: Vec<_> = tester.drain(1..4).rev().collect();
        assert_eq!(drained, vec![3, 2, 1]);
        assert_eq!(tester.to_vec(), vec![0, 4]);
    }

    #[test]
    #[should_panic]
    fn drain_past_len() {
        let mut tester = RingBuffer::with_capacity(5).unwrap();
        tester.enqueue(1).unwrap();
        tester.drain(..2);
    }

    #[test]
    fn drop_counts() {
        use std::cell::Cell;

        let flag = &Cell::new(0);

        struct Bump<'a>(&'a Cell<i32>);

        impl<'a> Drop for Bump<'a> {
            fn drop(&mut self) {
                let n = self.0.get();
                self.0.set(n + 1);
            }
        }

        {
            let mut tester = RingBuffer::with_capacity(128).unwrap();
            assert!(tester.enqueue(Bump(flag)).is_ok());
            assert!(tester.enqueue(Bump(flag)).is_ok());
        }
        assert_eq!(flag.get(), 2);

        flag.set(0);
        {
            let mut tester = RingBuffer::with_capacity(3).unwrap();
            assert!(tester.enqueue(vec![Bump(flag)]).is_ok());
            assert!(tester.enqueue(vec![Bump(flag), Bump(flag)]).is_ok());
            assert!(tester.enqueue(vec![]).is_ok());
            let rejected = tester.enqueue(vec![Bump(flag)]).unwrap_err();
            assert_eq!(flag.get(), 0);
            drop(rejected);
            assert_eq!(flag.get(), 1);
            drop(tester.dequeue());
            assert_eq!(flag.get(), 2);
            tester.clear();
            assert_eq!(flag.get(), 4);
        }
        assert_eq!(flag.get(), 4);
    }
}
