use core::iter::FusedIterator;

use crate::linked_list::LinkedList;
use crate::node::NodeId;
use crate::primitive::Primitive;

/// An iterator over the elements of an ArrayList.
///
/// This struct is created by ArrayList::iter().
#[derive(Clone)]
pub struct Iter<'a, T: Primitive> {
    delegate: core::slice::Iter<'a, T>,
}

impl<'a, T: Primitive> Iter<'a, T> {
    pub(crate) fn from_slice(elements: &'a [T]) -> Self {
        Self {
            delegate: elements.iter(),
        }
    }
}

impl<T: Primitive> Default for Iter<'_, T> {
    fn default() -> Self {
        Self::from_slice(&[])
    }
}

impl<T: Primitive> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n).copied()
    }

    #[inline]
    fn last(self) -> Option<Self::Item> {
        self.delegate.last().copied()
    }
}

impl<T: Primitive> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.delegate.next_back().copied()
    }
}

impl<T: Primitive> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.delegate.len()
    }
}

impl<T: Primitive> FusedIterator for Iter<'_, T> {}

impl<T: Primitive> core::fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.delegate.as_slice())
            .field(&self.delegate.len())
            .finish()
    }
}

/// An iterator over the elements of a LinkedList.
///
/// This struct is created by LinkedList::iter().
pub struct LinkedIter<'a, T: Primitive> {
    list: Option<&'a LinkedList<T>>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    len: usize,
}

impl<'a, T: Primitive> LinkedIter<'a, T> {
    pub(crate) fn from_list(list: &'a LinkedList<T>) -> Self {
        Self {
            list: Some(list),
            front: list.head,
            back: list.tail,
            len: list.len(),
        }
    }
}

impl<T: Primitive> Default for LinkedIter<'_, T> {
    fn default() -> Self {
        Self {
            list: None,
            front: None,
            back: None,
            len: 0,
        }
    }
}

impl<T: Primitive> Clone for LinkedIter<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: Primitive> Iterator for LinkedIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.list?.nodes.get(self.front?)?;
        self.front = node.next;
        self.len -= 1;
        Some(node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }

    #[inline]
    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<T: Primitive> DoubleEndedIterator for LinkedIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        let node = self.list?.nodes.get(self.back?)?;
        self.back = node.prev;
        self.len -= 1;
        Some(node.value)
    }
}

impl<T: Primitive> ExactSizeIterator for LinkedIter<'_, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<T: Primitive> FusedIterator for LinkedIter<'_, T> {}

impl<T: Primitive> core::fmt::Debug for LinkedIter<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LinkedIter")
            .field(&self.clone().collect::<Vec<_>>())
            .field(&self.len)
            .finish()
    }
}
