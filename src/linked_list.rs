use core::hash::{Hash, Hasher};

use crate::array_list::ArrayList;
use crate::collection::{PrimitiveCollection, PrimitiveList};
use crate::error::{Error, Result};
use crate::into_iter::LinkedIntoIter;
use crate::iter::LinkedIter;
use crate::linked_cursor::LinkedListIter;
use crate::node::{Node, NodeArena, NodeId};
use crate::primitive::Primitive;

/// A doubly-linked list of primitive values.
///
/// Every element lives in its own node; positional operations walk the chain
/// from whichever end is closer to the target index.
/// Like [`ArrayList`](crate::ArrayList), every structural change advances a
/// modification counter watched by the list's cursors.
///
/// # Example
/// ```rust
/// use primitive_list::LinkedList;
///
/// let mut list: LinkedList<i64> = LinkedList::new();
/// list.add_last(2);
/// list.add_first(0);
/// list.insert(1, 1).unwrap();
///
/// assert_eq!(list.first(), Ok(0));
/// assert_eq!(list.get(1), Ok(1));
/// assert_eq!(list.last(), Ok(2));
///
/// assert_eq!(list.remove(1), Ok(1));
/// assert_eq!(list.remove_last(), Ok(2));
/// assert_eq!(list.remove_first(), Ok(0));
/// ```
pub struct LinkedList<T: Primitive> {
    pub(crate) nodes: NodeArena<T>,
    pub(crate) head: Option<NodeId>,
    pub(crate) tail: Option<NodeId>,
    len: usize,
    mod_count: u64,
}

impl<T: Primitive> LinkedList<T> {
    /// Creates a new, empty `LinkedList`.
    pub const fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
            mod_count: 0,
        }
    }

    /// Creates a list holding the elements of `collection`, in iteration order.
    pub fn from_collection<C>(collection: &C) -> Self
    where
        C: PrimitiveCollection<T> + ?Sized,
    {
        let mut this = Self::new();
        this.add_all(collection);
        this
    }

    /// Adds an element to the front of the list.
    pub fn add_first(&mut self, value: T) {
        match self.head {
            Some(head) => self.link_before(value, head),
            None => self.link_last(value),
        }
    }

    /// Adds an element to the back of the list.
    #[inline]
    pub fn add_last(&mut self, value: T) {
        self.link_last(value);
    }

    /// Appends an element to the back of the list.
    #[inline]
    pub fn add(&mut self, value: T) {
        self.link_last(value);
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index > len()`.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::LinkedList;
    ///
    /// let mut list = LinkedList::from([10i32, 30]);
    /// list.insert(1, 20).unwrap();
    ///
    /// assert_eq!(list, [10, 20, 30]);
    /// assert!(list.insert(4, 40).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        Error::check_position(index, self.len)?;

        match self.node(index) {
            Some(successor) => self.link_before(value, successor),
            None => self.link_last(value),
        }

        Ok(())
    }

    /// Appends every element of `other` to the back of the list, in the order
    /// `other` yields them.
    ///
    /// Returns whether the list changed.
    pub fn add_all<C>(&mut self, other: &C) -> bool
    where
        C: PrimitiveCollection<T> + ?Sized,
    {
        let elements = other.to_array_primitive(Box::default());
        if elements.is_empty() {
            return false;
        }

        elements.iter().for_each(|&value| self.push_node(value));
        self.mod_count += 1;
        true
    }

    /// Appends a copy of the current contents to the back of the list.
    ///
    /// Returns whether the list changed.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::LinkedList;
    ///
    /// let mut list = LinkedList::from(['a', 'b']);
    /// list.add_all_self();
    ///
    /// assert_eq!(list, ['a', 'b', 'a', 'b']);
    /// ```
    pub fn add_all_self(&mut self) -> bool {
        let snapshot = self.to_vec();
        self.add_all(&snapshot)
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        Error::check_index(index, self.len)?;

        let id = self.node(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })?;

        self.unlink(id).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len,
        })
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// - [`Error::NoSuchElement`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(Error::NoSuchElement)?;
        self.unlink(head).ok_or(Error::NoSuchElement)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// - [`Error::NoSuchElement`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::NoSuchElement)?;
        self.unlink(tail).ok_or(Error::NoSuchElement)
    }

    /// Removes all elements from the list.
    pub fn clear(&mut self) {
        self.mod_count += 1;
        self.nodes.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T> {
        Error::check_index(index, self.len)?;

        self.node(index)
            .and_then(|id| self.nodes.get(id))
            .map(|node| node.value)
            .ok_or(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Not a structural change: outstanding cursors stay valid.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Error::check_index(index, self.len)?;

        let len = self.len;
        self.node(index)
            .and_then(|id| self.nodes.get_mut(id))
            .map(|node| core::mem::replace(&mut node.value, value))
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// - [`Error::NoSuchElement`] if the list is empty.
    pub fn first(&self) -> Result<T> {
        self.head
            .and_then(|id| self.nodes.get(id))
            .map(|node| node.value)
            .ok_or(Error::NoSuchElement)
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// - [`Error::NoSuchElement`] if the list is empty.
    pub fn last(&self) -> Result<T> {
        self.tail
            .and_then(|id| self.nodes.get(id))
            .map(|node| node.value)
            .ok_or(Error::NoSuchElement)
    }

    pub fn index_of(&self, value: T) -> Option<usize> {
        self.iter().position(|element| element.same(value))
    }

    pub fn last_index_of(&self, value: T) -> Option<usize> {
        self.iter()
            .rev()
            .position(|element| element.same(value))
            .map(|from_back| self.len - 1 - from_back)
    }

    pub fn contains(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Provides an iterator over list's elements.
    #[inline]
    pub fn iter(&self) -> LinkedIter<'_, T> {
        LinkedIter::from_list(self)
    }

    /// Provides a fail-fast cursor resting before the first element.
    #[inline]
    pub fn list_iter(&self) -> LinkedListIter<T> {
        LinkedListIter::from_list(self, 0)
    }

    /// Provides a fail-fast cursor resting before the element at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index > len()`.
    pub fn list_iter_at(&self, index: usize) -> Result<LinkedListIter<T>> {
        Error::check_position(index, self.len)?;
        Ok(LinkedListIter::from_list(self, index))
    }

    #[inline]
    pub const fn mod_count(&self) -> u64 {
        self.mod_count
    }

    /// Returns the node at `index`, walking from the nearer end.
    pub(crate) fn node(&self, index: usize) -> Option<NodeId> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut current = self.head?;
            for _ in 0..index {
                current = self.nodes.get(current)?.next?;
            }

            return Some(current);
        }

        let mut current = self.tail?;
        for _ in index + 1..self.len {
            current = self.nodes.get(current)?.prev?;
        }

        Some(current)
    }

    pub(crate) fn link_last(&mut self, value: T) {
        self.push_node(value);
        self.mod_count += 1;
    }

    fn push_node(&mut self, value: T) {
        let tail = self.tail;
        let id = self.nodes.insert(Node::new(value, tail, None));

        match tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => self.head = Some(id),
        }

        self.tail = Some(id);
        self.len += 1;
        debug_assert_eq!(self.len, self.nodes.len());
    }

    /// Links `value` right before the linked node `successor`.
    pub(crate) fn link_before(&mut self, value: T, successor: NodeId) {
        let predecessor = self.nodes[successor].prev;
        let id = self
            .nodes
            .insert(Node::new(value, predecessor, Some(successor)));

        self.nodes[successor].prev = Some(id);
        match predecessor {
            Some(predecessor) => self.nodes[predecessor].next = Some(id),
            None => self.head = Some(id),
        }

        self.len += 1;
        self.mod_count += 1;
        debug_assert_eq!(self.len, self.nodes.len());
    }

    /// Unlinks the node `id`, returning its value, or `None` if `id` is not
    /// linked in this list.
    pub(crate) fn unlink(&mut self, id: NodeId) -> Option<T> {
        let Node { value, prev, next } = self.nodes.remove(id)?;

        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }

        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }

        self.len -= 1;
        self.mod_count += 1;
        debug_assert_eq!(self.len, self.nodes.len());
        Some(value)
    }
}

impl<T: Primitive> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Primitive, const M: usize> From<[T; M]> for LinkedList<T> {
    fn from(values: [T; M]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Primitive> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T: Primitive> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.link_last(value));
    }
}

impl<'a, T: Primitive> Extend<&'a T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Primitive> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl<T: Primitive> PrimitiveCollection<T> for LinkedList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter()
    }
}

impl<T: Primitive> PrimitiveList<T> for LinkedList<T> {
    type Cursor = LinkedListIter<T>;

    fn get(&self, index: usize) -> Result<T> {
        LinkedList::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        LinkedList::set(self, index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        LinkedList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        LinkedList::remove(self, index)
    }

    fn mod_count(&self) -> u64 {
        self.mod_count
    }

    fn cursor_at(&self, index: usize) -> Self::Cursor {
        LinkedListIter::from_list(self, index)
    }

    fn add(&mut self, value: T) -> Result<()> {
        self.link_last(value);
        Ok(())
    }
}

impl_list_eq!(LinkedList, ArrayList);

impl<T: Primitive> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash_into(state));
    }
}

impl<T: Primitive> core::fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Primitive> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedIntoIter::from_list(self)
    }
}

impl<'a, T: Primitive> IntoIterator for &'a LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::hash::{BuildHasher, BuildHasherDefault, DefaultHasher};

    use quickcheck_macros::quickcheck;

    use crate::cursor::ListCursor;
    use crate::error::Error;
    use crate::{ArrayList, LinkedList};

    #[test]
    fn test_new_creates_empty_linked_list() {
        let sut = LinkedList::<i64>::new();
        assert!(sut.is_empty());
        assert_eq!(sut.len(), 0);
        assert_eq!(sut.first(), Err(Error::NoSuchElement));
        assert_eq!(sut.last(), Err(Error::NoSuchElement));
    }

    #[test]
    fn test_deque_operations() {
        let mut sut = LinkedList::<i16>::new();
        assert_eq!(sut.remove_first(), Err(Error::NoSuchElement));
        assert_eq!(sut.remove_last(), Err(Error::NoSuchElement));
        assert_eq!(sut.mod_count(), 0);

        sut.add_first(20);
        sut.add_first(10);
        sut.add_last(30);
        assert_eq!(sut, [10, 20, 30]);
        assert_eq!(sut.first(), Ok(10));
        assert_eq!(sut.last(), Ok(30));

        assert_eq!(sut.remove_first(), Ok(10));
        assert_eq!(sut.remove_last(), Ok(30));
        assert_eq!(sut.remove_last(), Ok(20));
        assert!(sut.is_empty());
        assert_eq!(sut.mod_count(), 6);
    }

    #[test]
    fn test_node_walks_from_the_nearer_end() {
        let sut = LinkedList::from([0i32, 1, 2, 3, 4, 5, 6]);

        for index in 0..sut.len() {
            let id = sut.node(index).unwrap();
            assert_eq!(sut.nodes[id].value, index as i32);
        }

        assert_eq!(sut.node(sut.len()), None);
        assert_eq!(sut.node(0), sut.head);
        assert_eq!(sut.node(sut.len() - 1), sut.tail);
    }

    #[test]
    fn test_insert_and_remove_bounds() {
        let mut sut = LinkedList::<char>::new();

        assert_eq!(
            sut.insert(1, 'x'),
            Err(Error::IndexOutOfRange { index: 1, len: 0 })
        );

        sut.insert(0, 'c').unwrap(); // [c]
        sut.insert(0, 'a').unwrap(); // [a, c]
        sut.insert(1, 'b').unwrap(); // [a, b, c]
        sut.insert(3, 'd').unwrap(); // [a, b, c, d]
        assert_eq!(sut, ['a', 'b', 'c', 'd']);

        assert_eq!(
            sut.remove(4),
            Err(Error::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(sut.remove(2), Ok('c'));
        assert_eq!(sut.remove(0), Ok('a'));
        assert_eq!(sut, ['b', 'd']);
        assert_eq!(sut.first(), Ok('b'));
        assert_eq!(sut.last(), Ok('d'));
    }

    #[test]
    fn test_set_is_not_a_structural_change() {
        let mut sut = LinkedList::from([1.0f64, 2.0]);
        let before = sut.mod_count();

        assert_eq!(sut.set(0, 3.0), Ok(1.0));
        assert_eq!(
            sut.set(2, 3.0),
            Err(Error::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(sut.mod_count(), before);
        assert_eq!(sut, [3.0, 2.0]);
    }

    #[test]
    fn test_add_all_appends_like_array_list() {
        let head = [0i8; 7];
        let tail = vec![1i8; 4];

        let mut l1 = ArrayList::from_collection(&head);
        let mut l2 = LinkedList::from_collection(&head);
        let before = l2.mod_count();

        assert!(l1.add_all(&tail));
        assert!(l2.add_all(&tail));
        assert_eq!(l2.mod_count(), before + 1);
        assert_eq!(l1, l2);
        assert_eq!(l2.last(), Ok(1));

        assert!(!l2.add_all(&Vec::new()));
        assert_eq!(l2.mod_count(), before + 1);
    }

    #[test]
    fn test_add_all_self_appends_a_snapshot() {
        let mut sut = LinkedList::<bool>::new();
        assert!(!sut.add_all_self());

        sut.add(true);
        sut.add(false);
        assert!(sut.add_all_self());
        assert_eq!(sut, [true, false, true, false]);
    }

    #[test]
    fn test_index_of_and_last_index_of() {
        let sut = LinkedList::from([3i64, 1, 3, 2]);
        assert_eq!(sut.index_of(3), Some(0));
        assert_eq!(sut.last_index_of(3), Some(2));
        assert_eq!(sut.last_index_of(2), Some(3));
        assert_eq!(sut.index_of(4), None);
        assert!(sut.contains(1));
    }

    #[test]
    fn test_clear_resets_the_list() {
        let mut sut = LinkedList::from([1i32, 2, 3]);
        let mut cursor = sut.list_iter();

        sut.clear();
        assert!(sut.is_empty());
        assert_eq!(sut.first(), Err(Error::NoSuchElement));
        assert!(matches!(
            cursor.next(&sut),
            Err(Error::ConcurrentStructuralChange { .. })
        ));

        sut.add(4);
        assert_eq!(sut, [4]);
    }

    #[test]
    fn test_clone_is_independent() {
        let a = LinkedList::<i32>::from([0, 1, 2]);
        let mut b = a.clone();
        b.add(3);

        assert_eq!(a, [0, 1, 2]);
        assert_eq!(b, [0, 1, 2, 3]);
    }

    #[test]
    fn test_hash_works_correctly() {
        let bh = BuildHasherDefault::<DefaultHasher>::default();
        let a = LinkedList::<i32>::from([0, 1, 2]);
        let b = LinkedList::<i32>::from([4, 5, 6]);
        assert_ne!(bh.hash_one(&a), bh.hash_one(&b));
        assert_eq!(bh.hash_one(&a), bh.hash_one(&(a.clone())));
    }

    #[test]
    fn test_debug_works_correctly() {
        let sut = LinkedList::<char>::from(['a', 'b']);
        assert_eq!(format!("{sut:?}"), "['a', 'b']");
    }

    #[quickcheck]
    fn test_behaves_like_vec_deque(seed: Vec<i32>) {
        let mut expected = VecDeque::from(seed.clone());
        let mut actual = LinkedList::from_collection(&seed);

        for _ in 0..32 {
            let len = expected.len();

            assert_eq!(expected.is_empty(), actual.is_empty());
            assert_eq!(expected.len(), actual.len());
            assert_eq!(expected.front().copied(), actual.first().ok());
            assert_eq!(expected.back().copied(), actual.last().ok());
            assert_eq!(expected.get(len / 2).copied(), actual.get(len / 2).ok());
            assert_eq!(actual, expected.make_contiguous() as &[_]);

            match rand::random_range(0..=5) {
                0 => {
                    let value = rand::random();
                    expected.push_front(value);
                    actual.add_first(value);
                }
                1 => {
                    let index = rand::random_range(0..=len);
                    let value = rand::random();
                    expected.insert(index, value);
                    actual.insert(index, value).unwrap();
                }
                2 => {
                    let value = rand::random();
                    expected.push_back(value);
                    actual.add_last(value);
                }
                3 => assert_eq!(expected.pop_front(), actual.remove_first().ok()),
                4 => {
                    let index = rand::random_range(0..=len);
                    assert_eq!(expected.remove(index), actual.remove(index).ok())
                }
                5 => assert_eq!(expected.pop_back(), actual.remove_last().ok()),
                _ => unreachable!(),
            }
        }

        expected.clear();
        actual.clear();
        assert_eq!(expected.len(), actual.len());
        assert_eq!(expected.front().copied(), actual.first().ok());
    }
}
