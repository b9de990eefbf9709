use core::iter::FusedIterator;
use core::mem::MaybeUninit;

use super::RingBuffer;
use crate::utils::wrap_add;

/// `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    ring: &'a [MaybeUninit<T>],
    // slot before the next element yielded from the front
    front: usize,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(ring: &'a [MaybeUninit<T>], front: usize, len: usize) -> Self {
        Iter {
            ring,
            front,
            remaining: len,
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            ring: self.ring,
            front: self.front,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.front = wrap_add(self.front, 1, self.ring.len());
        self.remaining -= 1;
        unsafe { Some(self.ring[self.front].assume_init_ref()) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = wrap_add(self.front, self.remaining, self.ring.len());
        self.remaining -= 1;
        unsafe { Some(self.ring[slot].assume_init_ref()) }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

/// A by-value `RingBuffer` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    pub(super) inner: RingBuffer<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.dequeue().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A draining `RingBuffer` iterator
///
/// While it lives, the buffer only owns the elements before the drained
/// range; the drained range and the elements after it are owned by the
/// `Drain` until it is dropped.
pub struct Drain<'a, T: 'a> {
    ring: &'a mut RingBuffer<T>,
    // next logical index yielded from the front
    head: usize,
    // one past the next logical index yielded from the back
    back: usize,
    // first logical index kept after the drained range
    after: usize,
    // length of the buffer before the drain started
    orig_len: usize,
}

impl<'a, T> Drain<'a, T> {
    pub(super) fn new(ring: &'a mut RingBuffer<T>, start: usize, end: usize, orig_len: usize) -> Self {
        Drain {
            ring,
            head: start,
            back: end,
            after: end,
            orig_len,
        }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.head == self.back {
            return None;
        }
        let slot = self.ring.slot(self.head);
        self.head += 1;
        unsafe { Some(self.ring.buffer_read(slot)) }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.head;
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Drain<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.head == self.back {
            return None;
        }
        self.back -= 1;
        let slot = self.ring.slot(self.back);
        unsafe { Some(self.ring.buffer_read(slot)) }
    }
}

impl<'a, T> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T> FusedIterator for Drain<'a, T> {}

impl<'a, T> Drop for Drain<'a, T> {
    fn drop(&mut self) {
        for _ in self.by_ref() {}

        // close the gap: move the kept suffix down to the start of the
        // drained range, oldest first
        let start = self.ring.len();
        let kept = self.orig_len - self.after;
        for i in 0..kept {
            let src = self.ring.slot(self.after + i);
            let dst = self.ring.slot(start + i);
            unsafe {
                let value = self.ring.buffer_read(src);
                self.ring.buffer_write(dst, value);
            }
        }
        self.ring.set_len(start + kept);
    }
}
