use core::marker::PhantomData;

use crate::collection::PrimitiveList;
use crate::error::{Error, Result};
use crate::primitive::Primitive;

/// A fail-fast, bidirectional cursor over a list of type `L`.
///
/// A cursor rests between two elements: [`next`](ListCursor::next) returns the
/// element after it, [`previous`](ListCursor::previous) the element before it.
/// Cursors do not borrow their list between calls; instead the list is passed
/// to every call, so it can still be modified directly while a cursor is
/// alive. Such a modification is detected on the cursor's next operation,
/// which fails with [`Error::ConcurrentStructuralChange`] before touching the
/// list, and so does every following operation: a stale cursor never recovers.
pub trait ListCursor<T: Primitive, L: ?Sized> {
    /// Returns `true` if there is an element after the cursor.
    fn has_next(&self, list: &L) -> bool;

    /// Returns the element after the cursor and moves past it.
    ///
    /// # Errors
    /// - [`Error::ConcurrentStructuralChange`] if the list changed behind the cursor.
    /// - [`Error::NoSuchElement`] if the cursor is at the end of the list.
    fn next(&mut self, list: &L) -> Result<T>;

    /// Returns `true` if there is an element before the cursor.
    fn has_previous(&self) -> bool;

    /// Returns the element before the cursor and moves back past it.
    ///
    /// # Errors
    /// - [`Error::ConcurrentStructuralChange`] if the list changed behind the cursor.
    /// - [`Error::NoSuchElement`] if the cursor is at the start of the list.
    fn previous(&mut self, list: &L) -> Result<T>;

    /// Returns the index of the element a call to `next` would return.
    fn next_index(&self) -> usize;

    /// Returns the index of the element a call to `previous` would return.
    fn previous_index(&self) -> Option<usize> {
        self.next_index().checked_sub(1)
    }

    /// Removes the element last returned by `next` or `previous`.
    ///
    /// # Errors
    /// - [`Error::ConcurrentStructuralChange`] if the list changed behind the cursor.
    /// - [`Error::IllegalCursorState`] if no element was returned since the cursor
    ///   was created or last changed the list structure.
    fn remove(&mut self, list: &mut L) -> Result<()>;

    /// Replaces the element last returned by `next` or `previous`.
    ///
    /// # Errors
    /// - [`Error::ConcurrentStructuralChange`] if the list changed behind the cursor.
    /// - [`Error::IllegalCursorState`] if no element was returned since the cursor
    ///   was created or last changed the list structure.
    fn set(&mut self, list: &mut L, value: T) -> Result<()>;

    /// Inserts `value` right before the cursor.
    ///
    /// A following `next` is unaffected, a following `previous` returns `value`.
    /// If the list rejects the insertion the cursor is left untouched.
    ///
    /// # Errors
    /// - [`Error::ConcurrentStructuralChange`] if the list changed behind the cursor.
    /// - any error returned by the list's own insertion.
    fn add(&mut self, list: &mut L, value: T) -> Result<()>;
}

/// Tracks the modification count a cursor expects to find on its list.
///
/// Once a mismatch has been observed the guard stays tripped, even if the
/// counts were to line up again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ModGuard {
    expected: u64,
    stale: bool,
}

impl ModGuard {
    #[inline]
    pub const fn new(expected: u64) -> Self {
        Self {
            expected,
            stale: false,
        }
    }

    pub fn check(&mut self, actual: u64) -> Result<()> {
        if !self.stale && self.expected == actual {
            return Ok(());
        }

        if !self.stale {
            log::debug!(
                "cursor detected a concurrent modification: expected {}, found {}",
                self.expected,
                actual
            );
        }

        self.stale = true;
        Err(Error::ConcurrentStructuralChange {
            expected: self.expected,
            actual,
        })
    }

    #[inline]
    pub fn sync(&mut self, actual: u64) {
        self.expected = actual;
    }
}

/// An index based [`ListCursor`] working over any [`PrimitiveList`].
///
/// Every operation goes through the list's own positional methods, so a list
/// that customises `insert`, `remove` or `set` sees the cursor's changes
/// through its customisations.
///
/// # Example
/// ```rust
/// use primitive_list::{ArrayList, Error, ListCursor};
///
/// let mut list = ArrayList::from([1i32, 2, 3]);
/// let mut cursor = list.list_iter();
///
/// assert_eq!(cursor.next(&list), Ok(1));
/// cursor.remove(&mut list).unwrap();
/// assert_eq!(list, [2, 3]);
///
/// list.add(4);
/// assert!(matches!(
///     cursor.next(&list),
///     Err(Error::ConcurrentStructuralChange { .. })
/// ));
/// ```
pub struct ListIter<T: Primitive> {
    cursor: usize,
    last_returned: Option<usize>,
    guard: ModGuard,
    marker: PhantomData<fn() -> T>,
}

impl<T: Primitive> ListIter<T> {
    /// Creates a cursor resting before the element at `index` of `list`.
    ///
    /// `index` is not validated here; it is meant to be called from
    /// [`PrimitiveList::cursor_at`].
    pub fn from_list<L>(list: &L, index: usize) -> Self
    where
        L: PrimitiveList<T> + ?Sized,
    {
        Self {
            cursor: index,
            last_returned: None,
            guard: ModGuard::new(list.mod_count()),
            marker: PhantomData,
        }
    }

    #[inline]
    pub const fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    pub const fn next_index(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub const fn previous_index(&self) -> Option<usize> {
        self.cursor.checked_sub(1)
    }
}

impl<T: Primitive> Clone for ListIter<T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: Primitive> core::fmt::Debug for ListIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListIter")
            .field("cursor", &self.cursor)
            .field("last_returned", &self.last_returned)
            .field("guard", &self.guard)
            .finish()
    }
}

impl<T, L> ListCursor<T, L> for ListIter<T>
where
    T: Primitive,
    L: PrimitiveList<T> + ?Sized,
{
    #[inline]
    fn has_next(&self, list: &L) -> bool {
        self.cursor < list.size()
    }

    fn next(&mut self, list: &L) -> Result<T> {
        self.guard.check(list.mod_count())?;

        let index = self.cursor;
        let value = list.get(index).map_err(|_| Error::NoSuchElement)?;

        self.cursor = index + 1;
        self.last_returned = Some(index);
        Ok(value)
    }

    #[inline]
    fn has_previous(&self) -> bool {
        ListIter::has_previous(self)
    }

    fn previous(&mut self, list: &L) -> Result<T> {
        self.guard.check(list.mod_count())?;

        let index = self.cursor.checked_sub(1).ok_or(Error::NoSuchElement)?;
        let value = list.get(index).map_err(|_| Error::NoSuchElement)?;

        self.cursor = index;
        self.last_returned = Some(index);
        Ok(value)
    }

    #[inline]
    fn next_index(&self) -> usize {
        ListIter::next_index(self)
    }

    fn remove(&mut self, list: &mut L) -> Result<()> {
        self.guard.check(list.mod_count())?;

        let last_returned = self.last_returned.ok_or(Error::IllegalCursorState)?;
        list.remove(last_returned)?;

        if last_returned < self.cursor {
            self.cursor -= 1;
        }

        self.last_returned = None;
        self.guard.sync(list.mod_count());
        Ok(())
    }

    fn set(&mut self, list: &mut L, value: T) -> Result<()> {
        self.guard.check(list.mod_count())?;

        let last_returned = self.last_returned.ok_or(Error::IllegalCursorState)?;
        list.set(last_returned, value)?;

        self.guard.sync(list.mod_count());
        Ok(())
    }

    fn add(&mut self, list: &mut L, value: T) -> Result<()> {
        self.guard.check(list.mod_count())?;

        let index = self.cursor;
        list.insert(index, value)?;

        self.cursor = index + 1;
        self.last_returned = None;
        self.guard.sync(list.mod_count());
        Ok(())
    }
}
