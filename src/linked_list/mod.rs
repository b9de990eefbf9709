use alloc::vec::Vec;

use crate::error::{DuplicateItem, IndexOutOfRange, NotFound};

use self::arena::{Arena, Node, NodeId};

mod arena;
mod equivalence;
mod iterator_impls;
mod trait_impls;

pub use self::equivalence::{ByKey, ByPredicate, Equivalence, Natural};
pub use self::iterator_impls::{IntoIter, Iter};

/// Position of the list's single iteration cursor.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Cursor {
    BeforeHead,
    At(NodeId),
    PastTail,
}

/// An unsorted singly linked list of distinct items with a stateful
/// cursor.
///
/// Items are kept in insertion order. Whether two items are "the same" is
/// decided by the list's [`Equivalence`] policy `E`: whole-value equality
/// for [`SinglyLinkedList::new`], a key for [`SinglyLinkedList::with_key`],
/// or any predicate. Inserting an item equivalent to one already present is
/// rejected.
///
/// Search and deletion are linear scans.
///
/// # Cursor
///
/// The list carries exactly one cursor, driven by `reset_cursor` and
/// `advance`. Structural changes (`insert`, a successful `delete`,
/// `pop_front`, `clear`) put it back before the head, so an iteration
/// interrupted by a mutation has to start over. `iter` is an independent,
/// borrowing alternative.
///
/// # Examples
///
/// ```
/// use ringlist::SinglyLinkedList;
///
/// let mut list = SinglyLinkedList::new();
/// list.insert("a").unwrap();
/// list.insert("b").unwrap();
/// assert!(list.insert("a").is_err());
///
/// list.reset_cursor();
/// assert_eq!(list.advance(), Some(&"a"));
/// assert_eq!(list.advance(), Some(&"b"));
/// assert_eq!(list.advance(), None);
/// ```
pub struct SinglyLinkedList<T, E = Natural> {
    nodes: Arena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    cursor: Cursor,
    eq: E,
}

impl<T> SinglyLinkedList<T, Natural> {
    /// Creates an empty list comparing items with `PartialEq`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let list: SinglyLinkedList<u32> = SinglyLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_equivalence(Natural)
    }
}

impl<T, F, K> SinglyLinkedList<T, ByKey<F, K>>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    /// Creates an empty list whose items are identified by the key `f`
    /// extracts.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Book { id: u32, title: &'static str }
    ///
    /// let mut shelf = SinglyLinkedList::with_key(|b: &Book| b.id);
    /// shelf.insert(Book { id: 7, title: "Emma" }).unwrap();
    /// assert!(shelf.insert(Book { id: 7, title: "Persuasion" }).is_err());
    ///
    /// assert_eq!(shelf.find_key(&7).map(|b| b.title), Some("Emma"));
    /// assert_eq!(shelf.delete_key(&7).map(|b| b.title), Ok("Emma"));
    /// assert!(shelf.find_key(&7).is_none());
    /// ```
    pub fn with_key(f: F) -> Self {
        Self::with_equivalence(ByKey::new(f))
    }

    /// Returns the first item whose key equals `key`.
    pub fn find_key(&self, key: &K) -> Option<&T> {
        self.find_by(|item| self.eq.key_of(item) == *key)
    }

    /// Removes and returns the first item whose key equals `key`.
    ///
    /// Fails with `NotFound`, leaving the list and its cursor untouched,
    /// if there is no such item.
    pub fn delete_key(&mut self, key: &K) -> Result<T, NotFound> {
        let found = self.position(|item| self.eq.key_of(item) == *key);
        self.delete_found(found)
    }
}

impl<T, F> SinglyLinkedList<T, ByPredicate<F>>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates an empty list whose items are the same when `f` says so.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::with_predicate(|a: &String, b: &String| {
    ///     a.eq_ignore_ascii_case(b)
    /// });
    /// list.insert("Dune".to_string()).unwrap();
    /// assert!(list.insert("DUNE".to_string()).is_err());
    /// ```
    pub fn with_predicate(f: F) -> Self {
        Self::with_equivalence(ByPredicate(f))
    }
}

impl<T, E> SinglyLinkedList<T, E> {
    /// Creates an empty list using `eq` to tell items apart.
    pub fn with_equivalence(eq: E) -> Self {
        SinglyLinkedList {
            nodes: Arena::new(),
            head: None,
            tail: None,
            len: 0,
            cursor: Cursor::BeforeHead,
            eq,
        }
    }

    /// Returns the list's equivalence policy.
    pub fn equivalence(&self) -> &E {
        &self.eq
    }

    /// Returns the number of items in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the list contains no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Removes every item and resets the cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert(1).unwrap();
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.advance(), None);
    /// ```
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
        self.cursor = Cursor::BeforeHead;
    }

    /// Provides a reference to the first item, or `None` if the list is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|id| &self.nodes[id].value)
    }

    /// Provides a reference to the last item, or `None` if the list is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(|id| &self.nodes[id].value)
    }

    /// Removes the first item and returns it, or `None` if the list is
    /// empty. Resets the cursor.
    pub fn pop_front(&mut self) -> Option<T> {
        let head = self.head?;
        Some(self.unlink(None, head))
    }

    /// Returns a front-to-back iterator that leaves the cursor alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert(5).unwrap();
    /// list.insert(3).unwrap();
    /// let c: Vec<&i32> = list.iter().collect();
    /// assert_eq!(c, [&5, &3]);
    /// ```
    pub fn iter(&self) -> Iter<T> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    /// Retrieves the item at `index` without moving the cursor.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.iter().nth(index)
    }

    /// Copies the items, front to back, into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the first item matching `pred`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert(4).unwrap();
    /// list.insert(9).unwrap();
    /// assert_eq!(list.find_by(|x| x % 3 == 0), Some(&9));
    /// assert_eq!(list.find_by(|x| *x > 10), None);
    /// ```
    pub fn find_by<P>(&self, mut pred: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(|item| pred(item))
    }

    /// Removes and returns the first item matching `pred`.
    ///
    /// On success the cursor is reset. Fails with `NotFound`, leaving the
    /// list and its cursor untouched, if no item matches.
    pub fn delete_by<P>(&mut self, pred: P) -> Result<T, NotFound>
    where
        P: FnMut(&T) -> bool,
    {
        let found = self.position(pred);
        self.delete_found(found)
    }

    /// Puts the cursor before the head, ready for a fresh iteration.
    #[inline]
    pub fn reset_cursor(&mut self) {
        self.cursor = Cursor::BeforeHead;
    }

    /// Moves the cursor to the next item and returns it.
    ///
    /// From the reset position the next item is the head. Once the tail
    /// has been passed the cursor stays past the end and `advance` keeps
    /// returning `None` until `reset_cursor` is called.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert('x').unwrap();
    /// list.insert('y').unwrap();
    ///
    /// let mut seen = Vec::new();
    /// list.reset_cursor();
    /// while let Some(c) = list.advance() {
    ///     seen.push(*c);
    /// }
    /// assert_eq!(seen, ['x', 'y']);
    /// assert_eq!(list.advance(), None);
    /// ```
    pub fn advance(&mut self) -> Option<&T> {
        let id = self.step()?;
        Some(&self.nodes[id].value)
    }

    /// Returns the item under the cursor, if the cursor is on one.
    pub fn current(&self) -> Option<&T> {
        match self.cursor {
            Cursor::At(id) => Some(&self.nodes[id].value),
            Cursor::BeforeHead | Cursor::PastTail => None,
        }
    }

    /// Returns the item at `index` by walking the cursor from the head.
    ///
    /// The cursor is left on the returned item. This is an O(n) walk, not
    /// random access.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{IndexOutOfRange, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::new();
    /// for x in [10, 11, 12] {
    ///     list.insert(x).unwrap();
    /// }
    /// assert_eq!(list.at(0), Ok(&10));
    /// assert_eq!(list.at(2), Ok(&12));
    /// assert_eq!(list.at(3), Err(IndexOutOfRange { index: 3, len: 3 }));
    /// ```
    pub fn at(&mut self, index: usize) -> Result<&T, IndexOutOfRange> {
        let len = self.len;
        if index >= len {
            tracing::trace!(index, len, "list index out of range");
            return Err(IndexOutOfRange { index, len });
        }
        self.reset_cursor();
        let mut visited = None;
        for _ in 0..=index {
            visited = self.step();
        }
        visited
            .map(|id| &self.nodes[id].value)
            .ok_or(IndexOutOfRange { index, len })
    }

    fn step(&mut self) -> Option<NodeId> {
        let next = match self.cursor {
            Cursor::BeforeHead => self.head,
            Cursor::At(id) => self.nodes[id].next,
            Cursor::PastTail => None,
        };
        self.cursor = match next {
            Some(id) => Cursor::At(id),
            None => Cursor::PastTail,
        };
        next
    }

    /// Finds the first node matching `pred` along with its predecessor.
    fn position<P>(&self, mut pred: P) -> Option<(Option<NodeId>, NodeId)>
    where
        P: FnMut(&T) -> bool,
    {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            let node = &self.nodes[id];
            if pred(&node.value) {
                return Some((prev, id));
            }
            prev = cur;
            cur = node.next;
        }
        None
    }

    fn delete_found(&mut self, found: Option<(Option<NodeId>, NodeId)>) -> Result<T, NotFound> {
        match found {
            Some((prev, id)) => Ok(self.unlink(prev, id)),
            None => {
                tracing::trace!(len = self.len, "no matching item to delete");
                Err(NotFound)
            }
        }
    }

    /// Unlinks `id`, whose predecessor is `prev`, and frees its node.
    fn unlink(&mut self, prev: Option<NodeId>, id: NodeId) -> T {
        let Node { value, next } = self.nodes.remove(id);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        if self.tail == Some(id) {
            self.tail = prev;
        }
        self.len -= 1;
        self.cursor = Cursor::BeforeHead;
        debug_assert_eq!(self.len, self.nodes.len());
        value
    }

    fn link_back(&mut self, value: T) {
        let id = self.nodes.insert(Node { value, next: None });
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
        self.cursor = Cursor::BeforeHead;
        debug_assert_eq!(self.len, self.nodes.len());
    }
}

impl<T, E> SinglyLinkedList<T, E>
where
    E: Equivalence<T>,
{
    /// Appends `item` at the tail of the list and resets the cursor.
    ///
    /// If an equivalent item is already present, the list is left
    /// untouched and `item` is handed back inside `DuplicateItem`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// assert!(list.insert(1).is_ok());
    /// assert!(list.insert(2).is_ok());
    /// let dup = list.insert(1).unwrap_err();
    /// assert_eq!(dup.into_inner(), 1);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn insert(&mut self, item: T) -> Result<(), DuplicateItem<T>> {
        if self.contains(&item) {
            tracing::trace!(len = self.len, "rejected duplicate list item");
            return Err(DuplicateItem { element: item });
        }
        self.link_back(item);
        Ok(())
    }

    /// Returns `true` if the list holds an item equivalent to `probe`.
    pub fn contains(&self, probe: &T) -> bool {
        self.find(probe).is_some()
    }

    /// Returns the first item equivalent to `probe`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::SinglyLinkedList;
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert(3).unwrap();
    /// assert_eq!(list.find(&3), Some(&3));
    /// assert_eq!(list.find(&4), None);
    /// ```
    pub fn find(&self, probe: &T) -> Option<&T> {
        self.find_by(|item| self.eq.equivalent(item, probe))
    }

    /// Removes and returns the item equivalent to `probe`.
    ///
    /// On success the cursor is reset. Fails with `NotFound`, leaving the
    /// list and its cursor untouched, if there is no such item.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringlist::{NotFound, SinglyLinkedList};
    ///
    /// let mut list = SinglyLinkedList::new();
    /// list.insert(3).unwrap();
    /// assert_eq!(list.delete(&3), Ok(3));
    /// assert_eq!(list.delete(&3), Err(NotFound));
    /// ```
    pub fn delete(&mut self, probe: &T) -> Result<T, NotFound> {
        let found = self.position(|item| self.eq.equivalent(item, probe));
        self.delete_found(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(items: &[i32]) -> SinglyLinkedList<i32> {
        let mut list = SinglyLinkedList::new();
        for &i in items {
            list.insert(i).unwrap();
        }
        list
    }

    fn walk<T: Clone, E>(list: &mut SinglyLinkedList<T, E>) -> Vec<T> {
        let mut seen = Vec::new();
        list.reset_cursor();
        while let Some(item) = list.advance() {
            seen.push(item.clone());
        }
        seen
    }

    #[test]
    fn simple() {
        let mut list = SinglyLinkedList::new();
        assert_eq!(list.len(), 0);
        assert!(list.is_empty());

        list.insert(1).unwrap();
        list.insert(2).unwrap();
        list.insert(3).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn rejects_duplicates() {
        let mut list = list_of(&[1, 2]);
        list.reset_cursor();
        list.advance();
        let err = list.insert(2).unwrap_err();
        assert_eq!(err.element, 2);
        assert_eq!(list.len(), 2);
        // a rejected insert is not a mutation
        assert_eq!(list.current(), Some(&1));
    }

    #[test]
    fn find_then_delete() {
        let mut list = list_of(&[5, 6, 7]);
        assert_eq!(list.find(&6), Some(&6));
        assert_eq!(list.delete(&6), Ok(6));
        assert_eq!(list.find(&6), None);
        assert_eq!(list.delete(&6), Err(NotFound));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn delete_head() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.delete(&1), Ok(1));
        assert_eq!(list.to_vec(), vec![2, 3]);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&3));
    }

    #[test]
    fn delete_tail() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.delete(&3), Ok(3));
        assert_eq!(list.to_vec(), vec![1, 2]);
        assert_eq!(list.back(), Some(&2));
        // the cached tail must follow the deletion
        list.insert(4).unwrap();
        assert_eq!(list.to_vec(), vec![1, 2, 4]);
    }

    #[test]
    fn delete_middle() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.delete(&2), Ok(2));
        assert_eq!(list.to_vec(), vec![1, 3]);
        assert_eq!(walk(&mut list), vec![1, 3]);
    }

    #[test]
    fn delete_only_item() {
        let mut list = list_of(&[1]);
        assert_eq!(list.delete(&1), Ok(1));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        list.insert(2).unwrap();
        assert_eq!(list.to_vec(), vec![2]);
    }

    #[test]
    fn slots_are_reused() {
        let mut list = list_of(&[1, 2, 3]);
        list.delete(&2).unwrap();
        list.insert(4).unwrap();
        list.delete(&1).unwrap();
        list.insert(5).unwrap();
        assert_eq!(list.to_vec(), vec![3, 4, 5]);
        assert_eq!(list.nodes.len(), 3);
    }

    #[test]
    fn cursor_walk() {
        let mut list = list_of(&[1, 2, 3]);
        assert_eq!(list.current(), None);
        assert_eq!(list.advance(), Some(&1));
        assert_eq!(list.current(), Some(&1));
        assert_eq!(list.advance(), Some(&2));
        assert_eq!(list.advance(), Some(&3));
        assert_eq!(list.advance(), None);
        assert_eq!(list.current(), None);
        // past the tail is sticky
        assert_eq!(list.advance(), None);
        list.reset_cursor();
        assert_eq!(list.advance(), Some(&1));
    }

    #[test]
    fn mutation_resets_cursor() {
        let mut list = list_of(&[1, 2, 3]);
        list.advance();
        list.advance();
        list.insert(4).unwrap();
        assert_eq!(list.advance(), Some(&1));

        list.advance();
        list.delete(&4).unwrap();
        assert_eq!(list.advance(), Some(&1));

        list.advance();
        assert_eq!(list.delete(&9), Err(NotFound));
        assert_eq!(list.current(), Some(&2));

        list.pop_front();
        assert_eq!(list.advance(), Some(&2));

        list.clear();
        assert_eq!(list.advance(), None);
    }

    #[test]
    fn at() {
        let mut list = list_of(&[10, 11, 12]);
        assert_eq!(list.at(0), Ok(&10));
        assert_eq!(list.at(2), Ok(&12));
        assert_eq!(list.current(), Some(&12));
        assert_eq!(list.at(1), Ok(&11));
        assert_eq!(list.advance(), Some(&12));
        assert_eq!(list.at(3), Err(IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(list.at(usize::MAX), Err(IndexOutOfRange { index: usize::MAX, len: 3 }));

        let mut empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
        assert_eq!(empty.at(0), Err(IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn get_leaves_cursor() {
        let mut list = list_of(&[10, 11, 12]);
        list.advance();
        assert_eq!(list.get(2), Some(&12));
        assert_eq!(list.get(3), None);
        assert_eq!(list.current(), Some(&10));
    }

    #[test]
    fn pop_front() {
        let mut list = list_of(&[1, 2]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.back(), None);
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Book {
        isbn: u64,
        title: &'static str,
    }

    #[test]
    fn keyed_records() {
        let mut shelf = SinglyLinkedList::with_key(|b: &Book| b.isbn);
        shelf.insert(Book { isbn: 1, title: "Emma" }).unwrap();
        shelf.insert(Book { isbn: 2, title: "Ulysses" }).unwrap();

        let dup = Book { isbn: 1, title: "Emma, annotated" };
        assert_eq!(shelf.insert(dup.clone()).unwrap_err().into_inner(), dup);

        // probes only need the key to match
        let probe = Book { isbn: 2, title: "" };
        assert_eq!(shelf.find(&probe).map(|b| b.title), Some("Ulysses"));
        assert_eq!(shelf.find_key(&1).map(|b| b.title), Some("Emma"));
        assert_eq!(shelf.delete_key(&3), Err(NotFound));
        assert_eq!(shelf.delete(&probe).map(|b| b.title), Ok("Ulysses"));
        assert_eq!(shelf.len(), 1);
    }

    #[test]
    fn delete_by_predicate() {
        let mut list = list_of(&[1, 2, 3, 4]);
        assert_eq!(list.delete_by(|x| x % 2 == 0), Ok(2));
        assert_eq!(list.to_vec(), vec![1, 3, 4]);
        assert_eq!(list.delete_by(|x| *x > 10), Err(NotFound));
    }

    #[test]
    fn custom_equivalence() {
        let mut list = SinglyLinkedList::with_predicate(|a: &i32, b: &i32| a.abs() == b.abs());
        list.insert(-3).unwrap();
        assert!(list.insert(3).is_err());
        assert_eq!(list.find(&3), Some(&-3));
        assert_eq!(walk(&mut list), vec![-3]);
    }
}
