use crate::collection::{PrimitiveCollection, PrimitiveList};
use crate::cursor::ListCursor;
use crate::error::{Error, Result};
use crate::primitive::Primitive;

/// A read-only view over a list.
///
/// Reads go straight to the underlying list; every mutation, including those
/// attempted through the view's cursors, fails with
/// [`Error::UnsupportedOperation`] and leaves the list untouched.
///
/// # Example
/// ```rust
/// use primitive_list::{ArrayList, Error, PrimitiveList, Unmodifiable};
///
/// let list = ArrayList::from([1i32, 2, 3]);
/// let mut view = Unmodifiable::new(&list);
///
/// assert_eq!(view.get(1), Ok(2));
/// assert!(matches!(view.add(4), Err(Error::UnsupportedOperation(_))));
/// ```
pub struct Unmodifiable<'a, L: ?Sized> {
    list: &'a L,
}

impl<'a, L: ?Sized> Unmodifiable<'a, L> {
    #[inline]
    pub const fn new(list: &'a L) -> Self {
        Self { list }
    }

    #[inline]
    pub const fn get_ref(&self) -> &'a L {
        self.list
    }
}

impl<L: ?Sized> Clone for Unmodifiable<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: ?Sized> Copy for Unmodifiable<'_, L> {}

impl<L: core::fmt::Debug + ?Sized> core::fmt::Debug for Unmodifiable<'_, L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Unmodifiable").field(&self.list).finish()
    }
}

impl<T, L> PrimitiveCollection<T> for Unmodifiable<'_, L>
where
    T: Primitive,
    L: PrimitiveCollection<T> + ?Sized,
{
    #[inline]
    fn size(&self) -> usize {
        self.list.size()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.list.elements()
    }

    fn to_array_primitive(&self, target: Box<[T]>) -> Box<[T]> {
        self.list.to_array_primitive(target)
    }
}

impl<T, L> PrimitiveList<T> for Unmodifiable<'_, L>
where
    T: Primitive,
    L: PrimitiveList<T> + ?Sized,
{
    type Cursor = UnmodifiableIter<L::Cursor>;

    fn get(&self, index: usize) -> Result<T> {
        self.list.get(index)
    }

    fn set(&mut self, _index: usize, _value: T) -> Result<T> {
        Err(Error::UnsupportedOperation("set on an unmodifiable list"))
    }

    fn insert(&mut self, _index: usize, _value: T) -> Result<()> {
        Err(Error::UnsupportedOperation("insert on an unmodifiable list"))
    }

    fn remove(&mut self, _index: usize) -> Result<T> {
        Err(Error::UnsupportedOperation("remove on an unmodifiable list"))
    }

    fn mod_count(&self) -> u64 {
        self.list.mod_count()
    }

    fn cursor_at(&self, index: usize) -> Self::Cursor {
        UnmodifiableIter {
            inner: self.list.cursor_at(index),
        }
    }
}

/// A cursor over an [`Unmodifiable`] view.
///
/// Navigation is delegated to the underlying list's cursor; `remove`, `set`
/// and `add` always fail with [`Error::UnsupportedOperation`].
#[derive(Clone, Debug)]
pub struct UnmodifiableIter<C> {
    inner: C,
}

impl<C> UnmodifiableIter<C> {
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<'a, T, L, C> ListCursor<T, Unmodifiable<'a, L>> for UnmodifiableIter<C>
where
    T: Primitive,
    L: ?Sized,
    C: ListCursor<T, L>,
{
    #[inline]
    fn has_next(&self, view: &Unmodifiable<'a, L>) -> bool {
        self.inner.has_next(view.list)
    }

    #[inline]
    fn next(&mut self, view: &Unmodifiable<'a, L>) -> Result<T> {
        self.inner.next(view.list)
    }

    #[inline]
    fn has_previous(&self) -> bool {
        self.inner.has_previous()
    }

    #[inline]
    fn previous(&mut self, view: &Unmodifiable<'a, L>) -> Result<T> {
        self.inner.previous(view.list)
    }

    #[inline]
    fn next_index(&self) -> usize {
        self.inner.next_index()
    }

    fn remove(&mut self, _view: &mut Unmodifiable<'a, L>) -> Result<()> {
        Err(Error::UnsupportedOperation("remove on an unmodifiable list"))
    }

    fn set(&mut self, _view: &mut Unmodifiable<'a, L>, _value: T) -> Result<()> {
        Err(Error::UnsupportedOperation("set on an unmodifiable list"))
    }

    fn add(&mut self, _view: &mut Unmodifiable<'a, L>, _value: T) -> Result<()> {
        Err(Error::UnsupportedOperation("add on an unmodifiable list"))
    }
}
