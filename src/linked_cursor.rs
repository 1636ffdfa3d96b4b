use crate::cursor::{ListCursor, ModGuard};
use crate::error::{Error, Result};
use crate::linked_list::LinkedList;
use crate::node::NodeId;
use crate::primitive::Primitive;

/// A fail-fast [`ListCursor`] over a [`LinkedList`].
///
/// Unlike [`ListIter`](crate::ListIter) it remembers the node it rests on, so
/// stepping and editing around the cursor never walks the list.
///
/// # Example
/// ```rust
/// use primitive_list::{LinkedList, ListCursor};
///
/// let mut list = LinkedList::from([1.0f32, 3.0]);
/// let mut cursor = list.list_iter();
///
/// assert_eq!(cursor.next(&list), Ok(1.0));
/// cursor.add(&mut list, 2.0).unwrap();
/// assert_eq!(cursor.next(&list), Ok(3.0));
/// assert_eq!(list, [1.0, 2.0, 3.0]);
/// ```
#[derive(Clone, Debug)]
pub struct LinkedListIter<T: Primitive> {
    next: Option<NodeId>,
    next_index: usize,
    last_returned: Option<NodeId>,
    guard: ModGuard,
    marker: core::marker::PhantomData<fn() -> T>,
}

impl<T: Primitive> LinkedListIter<T> {
    pub(crate) fn from_list(list: &LinkedList<T>, index: usize) -> Self {
        Self {
            next: list.node(index),
            next_index: index,
            last_returned: None,
            guard: ModGuard::new(list.mod_count()),
            marker: core::marker::PhantomData,
        }
    }
}

impl<T: Primitive> ListCursor<T, LinkedList<T>> for LinkedListIter<T> {
    #[inline]
    fn has_next(&self, list: &LinkedList<T>) -> bool {
        self.next_index < list.len()
    }

    fn next(&mut self, list: &LinkedList<T>) -> Result<T> {
        self.guard.check(list.mod_count())?;

        if !self.has_next(list) {
            return Err(Error::NoSuchElement);
        }

        let id = self.next.ok_or(Error::NoSuchElement)?;
        let node = list.nodes.get(id).ok_or(Error::NoSuchElement)?;

        self.last_returned = Some(id);
        self.next = node.next;
        self.next_index += 1;
        Ok(node.value)
    }

    #[inline]
    fn has_previous(&self) -> bool {
        self.next_index > 0
    }

    fn previous(&mut self, list: &LinkedList<T>) -> Result<T> {
        self.guard.check(list.mod_count())?;

        if !self.has_previous() {
            return Err(Error::NoSuchElement);
        }

        let id = match self.next {
            Some(next) => list.nodes.get(next).and_then(|node| node.prev),
            None => list.tail,
        }
        .ok_or(Error::NoSuchElement)?;
        let node = list.nodes.get(id).ok_or(Error::NoSuchElement)?;

        self.last_returned = Some(id);
        self.next = Some(id);
        self.next_index -= 1;
        Ok(node.value)
    }

    #[inline]
    fn next_index(&self) -> usize {
        self.next_index
    }

    fn remove(&mut self, list: &mut LinkedList<T>) -> Result<()> {
        self.guard.check(list.mod_count())?;

        let last_returned = self.last_returned.ok_or(Error::IllegalCursorState)?;
        let last_next = list
            .nodes
            .get(last_returned)
            .ok_or(Error::IllegalCursorState)?
            .next;
        list.unlink(last_returned).ok_or(Error::IllegalCursorState)?;

        // removing the node just stepped back over moves the cursor's successor
        if self.next == Some(last_returned) {
            self.next = last_next;
        } else {
            self.next_index -= 1;
        }

        self.last_returned = None;
        self.guard.sync(list.mod_count());
        Ok(())
    }

    fn set(&mut self, list: &mut LinkedList<T>, value: T) -> Result<()> {
        self.guard.check(list.mod_count())?;

        let last_returned = self.last_returned.ok_or(Error::IllegalCursorState)?;
        let node = list
            .nodes
            .get_mut(last_returned)
            .ok_or(Error::IllegalCursorState)?;

        node.value = value;
        Ok(())
    }

    fn add(&mut self, list: &mut LinkedList<T>, value: T) -> Result<()> {
        self.guard.check(list.mod_count())?;

        match self.next {
            Some(next) if list.nodes.get(next).is_none() => {
                return Err(Error::IllegalCursorState);
            }
            Some(next) => list.link_before(value, next),
            None => list.link_last(value),
        }

        self.last_returned = None;
        self.next_index += 1;
        self.guard.sync(list.mod_count());
        Ok(())
    }
}
