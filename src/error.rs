//! Error values returned by the containers.
//!
//! Every failing operation returns its own small error type so callers can
//! match on exactly what went wrong. All of them convert into [`Error`],
//! which is convenient when a caller only wants to propagate with `?`.

use core::fmt;

use thiserror::Error;

/// Error value indicating a ring buffer was asked for a capacity it cannot
/// hold.
///
/// Only a capacity of zero (or one so large the extra sentinel slot
/// overflows `usize`) is rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("invalid ring buffer capacity {capacity}, capacity must be positive")]
pub struct InvalidCapacity {
    /// The capacity that was requested.
    pub capacity: usize,
}

/// Error value indicating insufficient capacity.
///
/// Returned by `RingBuffer::enqueue`; the buffer is left untouched and the
/// rejected element is handed back.
#[derive(Clone, Copy, Eq, PartialEq, Error)]
#[error("queue is full")]
pub struct QueueFull<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

impl<T> QueueFull<T> {
    /// Returns the element that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T> fmt::Debug for QueueFull<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "QueueFull: queue is full")
    }
}

/// Error value indicating there is nothing to take from the queue.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("queue is empty")]
pub struct QueueEmpty;

/// Error value indicating the list already holds an equivalent element.
///
/// Which elements count as equivalent is decided by the list's
/// `Equivalence` policy.
#[derive(Clone, Copy, Eq, PartialEq, Error)]
#[error("an equivalent item is already in the list")]
pub struct DuplicateItem<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

impl<T> DuplicateItem<T> {
    /// Returns the element that was rejected.
    pub fn into_inner(self) -> T {
        self.element
    }
}

impl<T> fmt::Debug for DuplicateItem<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DuplicateItem: an equivalent item is already in the list")
    }
}

/// Error value indicating no element matched the search key.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("no matching item in the list")]
pub struct NotFound;

/// Error value indicating a positional access past the end of the list.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("index {index} out of range for list of length {len}")]
pub struct IndexOutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the list at the time of the request.
    pub len: usize,
}

/// Any error produced by this crate, with rejected elements dropped.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// See [`InvalidCapacity`].
    #[error(transparent)]
    InvalidCapacity(#[from] InvalidCapacity),
    /// See [`QueueFull`].
    #[error("queue is full")]
    QueueFull,
    /// See [`QueueEmpty`].
    #[error(transparent)]
    QueueEmpty(#[from] QueueEmpty),
    /// See [`DuplicateItem`].
    #[error("an equivalent item is already in the list")]
    DuplicateItem,
    /// See [`NotFound`].
    #[error(transparent)]
    NotFound(#[from] NotFound),
    /// See [`IndexOutOfRange`].
    #[error(transparent)]
    IndexOutOfRange(#[from] IndexOutOfRange),
}

impl<T> From<QueueFull<T>> for Error {
    fn from(_: QueueFull<T>) -> Self {
        Error::QueueFull
    }
}

impl<T> From<DuplicateItem<T>> for Error {
    fn from(_: DuplicateItem<T>) -> Self {
        Error::DuplicateItem
    }
}
