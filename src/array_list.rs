use core::hash::{Hash, Hasher};

use crate::collection::{PrimitiveCollection, PrimitiveList};
use crate::cursor::ListIter;
use crate::error::{Error, Result};
use crate::into_iter::IntoIter;
use crate::iter::Iter;
use crate::linked_list::LinkedList;
use crate::primitive::Primitive;

/// Capacity allocated by the first growth of a default-constructed list.
pub const DEFAULT_CAPACITY: usize = 10;

/// The contiguous buffer behind an [`ArrayList`].
///
/// Both empty states hold no allocation. `SharedEmpty` marks a list that was
/// never sized (its first growth jumps to [`DEFAULT_CAPACITY`]), while `Empty`
/// marks a list explicitly created, or trimmed, with no room at all.
#[derive(Clone, Debug)]
pub(crate) enum ElementData<T> {
    SharedEmpty,
    Empty,
    Allocated(Box<[T]>),
}

impl<T: Primitive> ElementData<T> {
    #[inline]
    fn capacity(&self) -> usize {
        match self {
            Self::SharedEmpty | Self::Empty => 0,
            Self::Allocated(buffer) => buffer.len(),
        }
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        match self {
            Self::SharedEmpty | Self::Empty => &[],
            Self::Allocated(buffer) => buffer,
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Self::SharedEmpty | Self::Empty => &mut [],
            Self::Allocated(buffer) => buffer,
        }
    }
}

/// A growable, contiguous list of primitive values.
///
/// Elements are stored unboxed in a buffer whose capacity grows by half of
/// its current size whenever it runs out of room.
/// Every structural change advances a modification counter, which lets the
/// list's cursors fail fast when the list is changed behind their back.
///
/// # Example
/// ```rust
/// use primitive_list::ArrayList;
///
/// let mut list: ArrayList<i64> = ArrayList::new();
/// list.add(10);
/// list.add(30);
/// list.insert(1, 20).unwrap();
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.get(1), Ok(20));
///
/// assert_eq!(list.remove(0), Ok(10));
/// assert_eq!(list, [20, 30]);
/// ```
pub struct ArrayList<T: Primitive> {
    element_data: ElementData<T>,
    size: usize,
    mod_count: u64,
}

impl<T: Primitive> ArrayList<T> {
    /// Creates a new, empty `ArrayList` that allocates nothing until the first
    /// element is added.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::ArrayList;
    ///
    /// let list: ArrayList<f32> = ArrayList::new();
    ///
    /// assert!(list.is_empty());
    /// assert_eq!(list.capacity(), 0);
    /// ```
    pub const fn new() -> Self {
        Self {
            element_data: ElementData::SharedEmpty,
            size: 0,
            mod_count: 0,
        }
    }

    /// Creates a new, empty `ArrayList` able to hold `capacity` elements
    /// without reallocating.
    ///
    /// # Errors
    /// - [`Error::InvalidArgument`] if `capacity` is negative.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::{ArrayList, Error};
    ///
    /// let list = ArrayList::<i16>::with_capacity(32).unwrap();
    /// assert_eq!(list.capacity(), 32);
    ///
    /// assert_eq!(
    ///     ArrayList::<i16>::with_capacity(-1).err(),
    ///     Some(Error::InvalidArgument { capacity: -1 })
    /// );
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let element_data = match usize::try_from(capacity) {
            Ok(0) => ElementData::Empty,
            Ok(capacity) => {
                ElementData::Allocated(vec![T::ZERO; capacity].into_boxed_slice())
            }
            Err(_) => return Err(Error::InvalidArgument { capacity }),
        };

        Ok(Self {
            element_data,
            size: 0,
            mod_count: 0,
        })
    }

    /// Creates a list holding the elements of `collection`, in iteration order.
    ///
    /// The buffer is sized to the number of elements copied.
    pub fn from_collection<C>(collection: &C) -> Self
    where
        C: PrimitiveCollection<T> + ?Sized,
    {
        let elements = collection.to_array_primitive(Box::default());
        let size = elements.len();

        Self {
            element_data: match size {
                0 => ElementData::Empty,
                _ => ElementData::Allocated(elements),
            },
            size,
            mod_count: 0,
        }
    }

    /// Makes room for at least `min_capacity` elements.
    ///
    /// Requests that are already satisfied, zero or negative are ignored
    /// without touching the modification counter. A list that was never sized
    /// also ignores requests up to [`DEFAULT_CAPACITY`], since its first growth
    /// allocates that much anyway.
    /// Otherwise the buffer is reallocated to the larger of `min_capacity` and
    /// one and a half times the current capacity.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::ArrayList;
    ///
    /// let mut list = ArrayList::<i32>::with_capacity(10).unwrap();
    /// list.ensure_capacity(11);
    /// assert_eq!(list.capacity(), 15);
    ///
    /// list.ensure_capacity(isize::MIN);
    /// assert_eq!(list.capacity(), 15);
    /// ```
    pub fn ensure_capacity(&mut self, min_capacity: isize) {
        let Ok(min_capacity) = usize::try_from(min_capacity) else {
            return;
        };

        if min_capacity <= self.capacity() {
            return;
        }

        let never_sized = matches!(self.element_data, ElementData::SharedEmpty);
        if never_sized && min_capacity <= DEFAULT_CAPACITY {
            return;
        }

        self.mod_count += 1;
        self.grow(min_capacity);
    }

    /// Shrinks the buffer to fit exactly the current elements.
    pub fn trim_to_size(&mut self) {
        if self.size >= self.capacity() {
            return;
        }

        self.mod_count += 1;
        self.element_data = match self.size {
            0 => ElementData::Empty,
            _ => ElementData::Allocated(Box::from(self.as_slice())),
        };
    }

    /// Appends an element to the back of the list.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.add(true);
    /// list.add(false);
    ///
    /// assert_eq!(list, [true, false]);
    /// ```
    pub fn add(&mut self, value: T) {
        self.mod_count += 1;

        if self.size == self.capacity() {
            self.grow(self.size + 1);
        }

        self.element_data.as_mut_slice()[self.size] = value;
        self.size += 1;
    }

    /// Inserts an element at `index`, shifting subsequent elements to the right.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        Error::check_position(index, self.size)?;

        self.mod_count += 1;

        if self.size == self.capacity() {
            self.grow(self.size + 1);
        }

        let buffer = self.element_data.as_mut_slice();
        buffer.copy_within(index..self.size, index + 1);
        buffer[index] = value;
        self.size += 1;
        Ok(())
    }

    /// Appends every element of `other` to the back of the list, in the order
    /// `other` yields them.
    ///
    /// Returns whether the list changed.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([0i8; 3]);
    /// assert!(list.add_all(&[1, 2]));
    /// assert!(!list.add_all(&[]));
    ///
    /// assert_eq!(list, [0, 0, 0, 1, 2]);
    /// ```
    pub fn add_all<C>(&mut self, other: &C) -> bool
    where
        C: PrimitiveCollection<T> + ?Sized,
    {
        let elements = other.to_array_primitive(Box::default());
        self.append_slice(&elements)
    }

    /// Appends a copy of the current contents to the back of the list.
    ///
    /// Returns whether the list changed.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::ArrayList;
    ///
    /// let mut list = ArrayList::from([1i64, 2]);
    /// list.add_all_self();
    ///
    /// assert_eq!(list, [1, 2, 1, 2]);
    /// ```
    pub fn add_all_self(&mut self) -> bool {
        let len = self.size;
        if len == 0 {
            return false;
        }

        self.mod_count += 1;

        let required = len.saturating_mul(2);
        if required > self.capacity() {
            self.grow(required);
        }

        self.element_data.as_mut_slice().copy_within(0..len, len);
        self.size = required;
        true
    }

    /// Removes and returns the element at `index`, shifting subsequent elements
    /// to the left.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        Error::check_index(index, self.size)?;

        self.mod_count += 1;

        let size = self.size;
        let buffer = self.element_data.as_mut_slice();
        let value = buffer[index];
        buffer.copy_within(index + 1..size, index);
        buffer[size - 1] = T::ZERO;
        self.size -= 1;
        Ok(value)
    }

    /// Removes all elements, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.mod_count += 1;

        let size = self.size;
        self.element_data.as_mut_slice()[..size].fill(T::ZERO);
        self.size = 0;
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<T> {
        Error::check_index(index, self.size)?;
        Ok(self.element_data.as_slice()[index])
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Not a structural change: outstanding cursors stay valid.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        Error::check_index(index, self.size)?;

        let slot = &mut self.element_data.as_mut_slice()[index];
        Ok(core::mem::replace(slot, value))
    }

    pub fn index_of(&self, value: T) -> Option<usize> {
        self.as_slice().iter().position(|element| element.same(value))
    }

    pub fn last_index_of(&self, value: T) -> Option<usize> {
        self.as_slice().iter().rposition(|element| element.same(value))
    }

    pub fn contains(&self, value: T) -> bool {
        self.index_of(value).is_some()
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of elements the list can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.element_data.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.element_data.as_slice()[..self.size]
    }

    /// Provides an iterator over list's elements.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::from_slice(self.as_slice())
    }

    /// Provides a fail-fast cursor resting before the first element.
    #[inline]
    pub fn list_iter(&self) -> ListIter<T> {
        ListIter::from_list(self, 0)
    }

    /// Provides a fail-fast cursor resting before the element at `index`.
    ///
    /// # Errors
    /// - [`Error::IndexOutOfRange`] if `index > len()`.
    pub fn list_iter_at(&self, index: usize) -> Result<ListIter<T>> {
        Error::check_position(index, self.size)?;
        Ok(ListIter::from_list(self, index))
    }

    #[inline]
    pub const fn mod_count(&self) -> u64 {
        self.mod_count
    }

    fn append_slice(&mut self, elements: &[T]) -> bool {
        if elements.is_empty() {
            return false;
        }

        self.mod_count += 1;

        let required = self.size.saturating_add(elements.len());
        if required > self.capacity() {
            self.grow(required);
        }

        self.element_data.as_mut_slice()[self.size..required].copy_from_slice(elements);
        self.size = required;
        true
    }

    fn grow(&mut self, min_capacity: usize) {
        let old_capacity = self.capacity();
        let new_capacity = match self.element_data {
            ElementData::SharedEmpty => min_capacity.max(DEFAULT_CAPACITY),
            _ => min_capacity.max(old_capacity.saturating_add(old_capacity / 2)),
        };

        log::trace!("growing array list from {old_capacity} to {new_capacity} slots");

        let mut buffer = vec![T::ZERO; new_capacity].into_boxed_slice();
        buffer[..self.size].copy_from_slice(self.as_slice());
        self.element_data = ElementData::Allocated(buffer);
    }

    #[cfg(test)]
    pub(crate) fn element_data(&self) -> &ElementData<T> {
        &self.element_data
    }
}

impl<T: Primitive> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Primitive, const M: usize> From<[T; M]> for ArrayList<T> {
    fn from(values: [T; M]) -> Self {
        Self::from_collection(&values)
    }
}

impl<T: Primitive> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut this = Self::new();
        this.extend(iter);
        this
    }
}

impl<T: Primitive> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        let (lower, _) = iter.size_hint();
        let wanted = self.size.saturating_add(lower);
        self.ensure_capacity(isize::try_from(wanted).unwrap_or(isize::MAX));

        iter.for_each(|value| self.add(value));
    }
}

impl<'a, T: Primitive> Extend<&'a T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Primitive> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self::from_collection(self)
    }
}

impl<T: Primitive> PrimitiveCollection<T> for ArrayList<T> {
    #[inline]
    fn size(&self) -> usize {
        self.size
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter()
    }

    fn to_array_primitive(&self, mut target: Box<[T]>) -> Box<[T]> {
        let elements = self.as_slice();
        if target.len() < elements.len() {
            return Box::from(elements);
        }

        target[..elements.len()].copy_from_slice(elements);
        if let Some(slot) = target.get_mut(elements.len()) {
            *slot = T::ZERO;
        }

        target
    }
}

impl<T: Primitive> PrimitiveList<T> for ArrayList<T> {
    type Cursor = ListIter<T>;

    fn get(&self, index: usize) -> Result<T> {
        ArrayList::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        ArrayList::set(self, index, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        ArrayList::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        ArrayList::remove(self, index)
    }

    fn mod_count(&self) -> u64 {
        self.mod_count
    }

    fn cursor_at(&self, index: usize) -> Self::Cursor {
        ListIter::from_list(self, index)
    }

    fn add(&mut self, value: T) -> Result<()> {
        ArrayList::add(self, value);
        Ok(())
    }
}

impl_list_eq!(ArrayList, LinkedList);

impl<T: Primitive> Hash for ArrayList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        self.iter().for_each(|value| value.hash_into(state));
    }
}

impl<T: Primitive> core::fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Primitive> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let size = self.size;
        let buffer = match self.element_data {
            ElementData::SharedEmpty | ElementData::Empty => Vec::new(),
            ElementData::Allocated(buffer) => buffer.into_vec(),
        };

        IntoIter::from_vec(buffer, size)
    }
}

impl<'a, T: Primitive> IntoIterator for &'a ArrayList<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
