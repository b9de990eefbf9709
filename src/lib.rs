//! Two small containers for record keeping: a fixed capacity circular
//! queue and a keyed singly linked list with a stateful cursor.
//!
//! - [`RingBuffer`] is a FIFO queue over `capacity + 1` slots. Enqueueing
//!   into a full queue and dequeueing from an empty one are reported as
//!   errors, never as silent no-ops.
//! - [`SinglyLinkedList`] keeps distinct items in insertion order, with
//!   linear search and deletion, and a single cursor for position based
//!   walks.
//!
//! Every failing operation returns a typed error from [`error`]; all of
//! them convert into [`Error`].
//!
//! # Feature Flags
//! The **ringlist** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate only needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringlist = "0.1"
//! ```
//!
//! To use ringlist in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! ringlist = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! Note that a `RingBuffer` always allocates `capacity() + 1` slots; the
//! spare slot tells a full queue from an empty one.
//! [Read more]
//!
//! [Read more]: https://en.wikipedia.org/wiki/Circular_buffer
//!
//! # Queue
//! ```
//! use ringlist::{QueueEmpty, RingBuffer};
//!
//! let mut queue = RingBuffer::with_capacity(2).unwrap();
//! queue.enqueue("first").unwrap();
//! queue.enqueue("second").unwrap();
//! assert!(queue.enqueue("third").is_err());
//!
//! assert_eq!(queue.dequeue(), Ok("first"));
//! assert_eq!(queue.to_vec(), vec!["second"]);
//! assert_eq!(queue.dequeue(), Ok("second"));
//! assert_eq!(queue.dequeue(), Err(QueueEmpty));
//! ```
//!
//! # Catalog
//! ```
//! use ringlist::{NotFound, SinglyLinkedList};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Book {
//!     id: u32,
//!     title: String,
//! }
//!
//! let mut catalog = SinglyLinkedList::with_key(|b: &Book| b.id);
//! for (id, title) in [(1, "Emma"), (2, "Middlemarch"), (3, "Ulysses")] {
//!     catalog.insert(Book { id, title: title.to_string() }).unwrap();
//! }
//!
//! assert_eq!(catalog.at(1).map(|b| b.id), Ok(2));
//! assert_eq!(catalog.delete_key(&2).map(|b| b.title), Ok("Middlemarch".to_string()));
//! assert_eq!(catalog.delete_key(&2), Err(NotFound));
//!
//! catalog.reset_cursor();
//! let mut ids = Vec::new();
//! while let Some(book) = catalog.advance() {
//!     ids.push(book.id);
//! }
//! assert_eq!(ids, [1, 3]);
//! ```
//!
//! # Propagating errors
//! ```
//! use ringlist::{Error, RingBuffer, SinglyLinkedList};
//!
//! fn checkout(queue: &mut RingBuffer<u32>, shelf: &mut SinglyLinkedList<u32>) -> Result<u32, Error> {
//!     let id = queue.dequeue()?;
//!     shelf.delete(&id)?;
//!     Ok(id)
//! }
//!
//! let mut queue = RingBuffer::new();
//! let mut shelf = SinglyLinkedList::new();
//! shelf.insert(7).unwrap();
//! queue.enqueue(7).unwrap();
//! queue.enqueue(8).unwrap();
//!
//! assert_eq!(checkout(&mut queue, &mut shelf), Ok(7));
//! assert!(matches!(checkout(&mut queue, &mut shelf), Err(Error::NotFound(_))));
//! assert!(matches!(checkout(&mut queue, &mut shelf), Err(Error::QueueEmpty(_))));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub use odds::IndexRange as RangeArgument;

pub mod error;
mod linked_list;
mod ring_buffer;
mod utils;

pub use error::{DuplicateItem, Error, IndexOutOfRange, InvalidCapacity, NotFound, QueueEmpty, QueueFull};
pub use linked_list::{ByKey, ByPredicate, Equivalence, Natural, SinglyLinkedList};
pub use ring_buffer::{RingBuffer, DEFAULT_CAPACITY};

/// Iterators over the containers.
pub mod iter {
    pub use crate::linked_list::{IntoIter as ListIntoIter, Iter as ListIter};
    pub use crate::ring_buffer::{Drain, IntoIter, Iter};
}
