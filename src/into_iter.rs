use core::iter::FusedIterator;

use crate::linked_list::LinkedList;
use crate::primitive::Primitive;

/// An owning iterator over the elements of an ArrayList.
///
/// This struct is created by ArrayList::into_iter().
#[derive(Clone)]
pub struct IntoIter<T: Primitive> {
    delegate: std::iter::Take<std::vec::IntoIter<T>>,
}

impl<T: Primitive> Default for IntoIter<T> {
    fn default() -> Self {
        Self::from_vec(Vec::new(), 0)
    }
}

impl<T: Primitive> IntoIter<T> {
    /// Yields the first `len` elements of `buffer`, skipping the spare capacity.
    pub(crate) fn from_vec(buffer: Vec<T>, len: usize) -> Self {
        Self {
            delegate: buffer.into_iter().take(len),
        }
    }
}

impl<T: Primitive> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.delegate.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.delegate.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.delegate.nth(n)
    }
}

impl<T: Primitive> ExactSizeIterator for IntoIter<T> {}

impl<T: Primitive> FusedIterator for IntoIter<T> {}

impl<T: Primitive> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

/// An owning iterator over the elements of a LinkedList.
///
/// This struct is created by LinkedList::into_iter().
#[derive(Clone)]
pub struct LinkedIntoIter<T: Primitive> {
    list: LinkedList<T>,
}

impl<T: Primitive> Default for LinkedIntoIter<T> {
    fn default() -> Self {
        Self::from_list(LinkedList::new())
    }
}

impl<T: Primitive> LinkedIntoIter<T> {
    pub(crate) fn from_list(list: LinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T: Primitive> Iterator for LinkedIntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T: Primitive> DoubleEndedIterator for LinkedIntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().ok()
    }
}

impl<T: Primitive> ExactSizeIterator for LinkedIntoIter<T> {}

impl<T: Primitive> FusedIterator for LinkedIntoIter<T> {}

impl<T: Primitive> core::fmt::Debug for LinkedIntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LinkedIntoIter").field(&self.list).finish()
    }
}
