use crate::cursor::ListCursor;
use crate::error::{Error, Result};
use crate::primitive::Primitive;

/// A finite sequence of primitive values.
///
/// Implementors only provide [`size`](PrimitiveCollection::size) and
/// [`elements`](PrimitiveCollection::elements); everything else, including the
/// buffer reusing [`to_array_primitive`](PrimitiveCollection::to_array_primitive),
/// is derived from those two.
pub trait PrimitiveCollection<T: Primitive> {
    /// Returns the number of elements the collection currently reports.
    fn size(&self) -> usize;

    /// Returns an iterator over the elements, front to back.
    fn elements(&self) -> impl Iterator<Item = T> + '_;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    fn contains(&self, value: T) -> bool {
        self.elements().any(|element| element.same(value))
    }

    fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.size());
        out.extend(self.elements());
        out
    }

    /// Copies the elements into `target` if it is large enough, or into a
    /// freshly allocated buffer otherwise.
    ///
    /// `size()` is read once, to pick between `target` and a new buffer of
    /// exactly that length. The choice is revisited against the number of
    /// elements actually produced:
    /// - if iteration stops early, the elements end up in `target` whenever it
    ///   can hold them, and the slot following the last copied element (if any)
    ///   is reset to [`Primitive::ZERO`]; otherwise a new buffer of the exact
    ///   produced length is returned.
    /// - if iteration produces more elements than the chosen buffer can hold,
    ///   a new buffer of the exact produced length is returned.
    ///
    /// When `target` is returned it is the very same allocation that was
    /// passed in.
    ///
    /// # Example
    /// ```rust
    /// use primitive_list::{ArrayList, PrimitiveCollection};
    ///
    /// let list = ArrayList::<i32>::from([1, 2]);
    ///
    /// let target = vec![9; 3].into_boxed_slice();
    /// let ptr = target.as_ptr();
    /// let out = list.to_array_primitive(target);
    ///
    /// assert_eq!(out.as_ptr(), ptr);
    /// assert_eq!(&*out, &[1, 2, 0]);
    ///
    /// let out = list.to_array_primitive(Box::default());
    /// assert_eq!(&*out, &[1, 2]);
    /// ```
    fn to_array_primitive(&self, mut target: Box<[T]>) -> Box<[T]> {
        let size = self.size();
        let mut elements = self.elements();

        if target.len() >= size {
            let filled = fill(&mut target, &mut elements);
            if filled < target.len() {
                target[filled] = T::ZERO;
                return target;
            }

            return finish_to_array(target, elements);
        }

        let mut fresh = vec![T::ZERO; size].into_boxed_slice();
        let filled = fill(&mut fresh, &mut elements);
        if filled < fresh.len() {
            if target.len() >= filled {
                target[..filled].copy_from_slice(&fresh[..filled]);
                if let Some(slot) = target.get_mut(filled) {
                    *slot = T::ZERO;
                }

                return target;
            }

            return Box::from(&fresh[..filled]);
        }

        finish_to_array(fresh, elements)
    }
}

fn fill<T: Primitive>(buffer: &mut [T], elements: &mut impl Iterator<Item = T>) -> usize {
    let mut filled = 0;
    for slot in buffer.iter_mut() {
        match elements.next() {
            Some(value) => *slot = value,
            None => break,
        }

        filled += 1;
    }

    filled
}

fn finish_to_array<T: Primitive>(
    filled: Box<[T]>,
    mut rest: impl Iterator<Item = T>,
) -> Box<[T]> {
    let Some(first) = rest.next() else {
        return filled;
    };

    let len = filled.len();
    let mut grown = Vec::with_capacity(len.saturating_add(len / 2).saturating_add(1));
    grown.extend_from_slice(&filled);
    grown.push(first);
    grown.extend(rest);

    log::trace!(
        "collection grew while being copied: expected {} elements, produced {}",
        len,
        grown.len()
    );

    grown.into_boxed_slice()
}

/// A positional sequence of primitive values with fail-fast cursors.
///
/// Structural changes (insertions and removals) advance the
/// [`mod_count`](PrimitiveList::mod_count); replacing a value in place does not.
/// Cursors capture the count when they are created and refuse to operate once
/// it has moved under them.
pub trait PrimitiveList<T: Primitive>: PrimitiveCollection<T> {
    /// The cursor type returned by [`list_iter`](PrimitiveList::list_iter).
    type Cursor: ListCursor<T, Self>;

    fn get(&self, index: usize) -> Result<T>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    /// Inserts `value` at `index`, shifting subsequent elements to the right.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes and returns the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;

    /// Returns the modification counter.
    fn mod_count(&self) -> u64;

    /// Creates a cursor resting before the element at `index`.
    ///
    /// `index` has already been validated against `[0, size()]`.
    fn cursor_at(&self, index: usize) -> Self::Cursor;

    fn add(&mut self, value: T) -> Result<()> {
        self.insert(self.size(), value)
    }

    fn list_iter(&self) -> Self::Cursor {
        self.cursor_at(0)
    }

    fn list_iter_at(&self, index: usize) -> Result<Self::Cursor> {
        Error::check_position(index, self.size())?;
        Ok(self.cursor_at(index))
    }
}

/// Compares two collections element by element, regardless of how they are
/// stored.
pub fn collections_eq<T, A, B>(a: &A, b: &B) -> bool
where
    T: Primitive,
    A: PrimitiveCollection<T> + ?Sized,
    B: PrimitiveCollection<T> + ?Sized,
{
    a.size() == b.size()
        && a.elements()
            .zip(b.elements())
            .all(|(left, right)| left.same(right))
}

impl<T: Primitive> PrimitiveCollection<T> for [T] {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().copied()
    }
}

impl<T: Primitive, const N: usize> PrimitiveCollection<T> for [T; N] {
    #[inline]
    fn size(&self) -> usize {
        N
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().copied()
    }
}

impl<T: Primitive> PrimitiveCollection<T> for Vec<T> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    fn elements(&self) -> impl Iterator<Item = T> + '_ {
        self.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use quickcheck_macros::quickcheck;

    use super::{PrimitiveCollection, collections_eq};
    use crate::primitive::Primitive;

    /// Reports a scripted sequence of sizes, one per `size()` call, while its
    /// iterator stops at whatever size is current.
    struct DriftingCollection<T> {
        elements: Vec<T>,
        sizes: Vec<usize>,
        next_size: Cell<usize>,
    }

    impl<T: Primitive> DriftingCollection<T> {
        fn new(elements: &[T]) -> Self {
            Self {
                sizes: vec![elements.len()],
                elements: elements.to_vec(),
                next_size: Cell::new(0),
            }
        }

        fn set_size_sequence(&mut self, sizes: &[usize]) {
            self.sizes = sizes.to_vec();
            self.next_size.set(0);
        }

        fn current_size(&self) -> usize {
            self.sizes[self.next_size.get()]
        }
    }

    impl<T: Primitive> PrimitiveCollection<T> for DriftingCollection<T> {
        fn size(&self) -> usize {
            let next = self.next_size.get();
            if next + 1 < self.sizes.len() {
                self.next_size.set(next + 1);
            }

            self.sizes[next]
        }

        fn elements(&self) -> impl Iterator<Item = T> + '_ {
            let mut position = 0;
            core::iter::from_fn(move || {
                if position >= self.current_size() {
                    return None;
                }

                let value = self.elements[position];
                position += 1;
                Some(value)
            })
        }
    }

    fn check_to_array<T: Primitive>(objects: [T; 3]) {
        const CAP: usize = 3;
        const LAST: usize = CAP - 1;

        let is_zero = |value: T| value.same(T::ZERO);

        let res = DriftingCollection::new(&objects[1..]).to_array_primitive(Box::default());
        assert_eq!(res.len(), 2);
        assert!(res[1].same(objects[2]));

        let mut candidate = DriftingCollection::new(&objects);

        // more elements than target.len()
        let a = vec![T::ZERO; CAP - 1].into_boxed_slice();
        let ptr = a.as_ptr();
        let res = candidate.to_array_primitive(a);
        assert_ne!(res.as_ptr(), ptr);
        assert!(!is_zero(res[LAST]));

        // as many elements as target.len()
        let a = vec![T::ZERO; CAP].into_boxed_slice();
        let ptr = a.as_ptr();
        let res = candidate.to_array_primitive(a);
        assert_eq!(res.as_ptr(), ptr);
        assert!(!is_zero(res[res.len() - 1]));

        // fewer elements than target.len()
        let a = vec![T::ZERO; CAP + 1].into_boxed_slice();
        let ptr = a.as_ptr();
        let res = candidate.to_array_primitive(a);
        assert_eq!(res.as_ptr(), ptr);
        assert!(is_zero(res[res.len() - 1]));

        // fewer elements than expected, but more than target.len()
        let a = vec![T::ZERO; CAP - 2].into_boxed_slice();
        let ptr = a.as_ptr();
        candidate.set_size_sequence(&[CAP, CAP - 1]);
        let res = candidate.to_array_primitive(a);
        assert_ne!(res.as_ptr(), ptr);
        assert_eq!(res.len(), CAP - 1);
        assert!(!is_zero(res[LAST - 1]));

        // fewer elements than expected, but as many as target.len()
        let a: Box<[T]> = Box::new(objects);
        let ptr = a.as_ptr();
        candidate.set_size_sequence(&[CAP, CAP - 1]);
        let res = candidate.to_array_primitive(a);
        assert_eq!(res.as_ptr(), ptr);
        assert!(is_zero(res[res.len() - 1]));

        // more elements than expected and more than target.len()
        let a = vec![T::ZERO; CAP - 1].into_boxed_slice();
        let ptr = a.as_ptr();
        candidate.set_size_sequence(&[CAP - 1, CAP]);
        let res = candidate.to_array_primitive(a);
        assert_ne!(res.as_ptr(), ptr);
        assert_eq!(res.len(), CAP);
        assert!(!is_zero(res[LAST]));

        // more elements than expected, but as many as target.len()
        let a = vec![T::ZERO; CAP - 1].into_boxed_slice();
        let ptr = a.as_ptr();
        candidate.set_size_sequence(&[CAP - 2, CAP - 1]);
        let res = candidate.to_array_primitive(a);
        assert_eq!(res.as_ptr(), ptr);
        assert!(!is_zero(res[res.len() - 1]));

        // more elements than expected, but fewer than target.len()
        let a: Box<[T]> = Box::new(objects);
        let ptr = a.as_ptr();
        candidate.set_size_sequence(&[CAP - 2, CAP - 1]);
        let res = candidate.to_array_primitive(a);
        assert_eq!(res.as_ptr(), ptr);
        assert!(is_zero(res[res.len() - 1]));

        // fewer elements than expected, exactly as many as target.len()
        let a = vec![T::ZERO; CAP - 1].into_boxed_slice();
        let ptr = a.as_ptr();
        candidate.set_size_sequence(&[CAP, CAP - 1]);
        let res = candidate.to_array_primitive(a);
        assert_eq!(res.as_ptr(), ptr);
        assert!(!is_zero(res[res.len() - 1]));

        // fewer elements than target.len() and fewer than expected
        let a: Box<[T]> = Box::from(&objects[..CAP - 1]);
        let ptr = a.as_ptr();
        candidate.set_size_sequence(&[CAP, CAP - 2]);
        let res = candidate.to_array_primitive(a);
        assert_eq!(res.as_ptr(), ptr);
        assert!(is_zero(res[res.len() - 1]));
    }

    #[test]
    fn to_array_primitive_tracks_size_drift() {
        check_to_array::<i32>([0, 1, 2]);
        check_to_array::<i64>([0, 1, 2]);
        check_to_array::<f64>([0.0, 1.0, 2.0]);
        check_to_array::<i8>([0, 1, 2]);
        check_to_array::<char>(['\0', 'a', 'b']);
    }

    #[test]
    fn to_array_primitive_keeps_exact_length_when_growing_from_empty() {
        let mut candidate = DriftingCollection::new(&[1i16, 2, 3]);
        candidate.set_size_sequence(&[0, 3]);

        let res = candidate.to_array_primitive(Box::default());
        assert_eq!(&*res, &[1, 2, 3]);
    }

    #[quickcheck]
    fn to_array_primitive_matches_contents(seed: Vec<i32>, extra: u8) {
        let target = vec![-1; extra as usize].into_boxed_slice();
        let fits = target.len() >= seed.len();
        let ptr = target.as_ptr();

        let res = seed.to_array_primitive(target);
        assert_eq!(&res[..seed.len()], seed.as_slice());

        if fits {
            assert_eq!(res.as_ptr(), ptr);
            if let Some(slot) = res.get(seed.len()) {
                assert_eq!(*slot, 0);
            }
        } else {
            assert_eq!(res.len(), seed.len());
        }
    }

    #[test]
    fn collections_eq_compares_values() {
        assert!(collections_eq(&[1i32, 2, 3], &vec![1, 2, 3]));
        assert!(!collections_eq(&[1i32, 2, 3], &vec![1, 2]));
        assert!(!collections_eq(&[1i32, 2, 3], &vec![1, 2, 4]));
        assert!(collections_eq(&[f32::NAN], &vec![f32::NAN]));
    }

    #[test]
    fn contains_uses_exact_equality() {
        let values = vec![0.0f64, f64::NAN];
        assert!(PrimitiveCollection::contains(&values, f64::NAN));
        assert!(!PrimitiveCollection::contains(&values, -0.0));
    }
}
