//! # primitive_list
//!
//! `primitive_list` provides lists specialised for primitive values
//! (`bool`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64` and `char`), stored
//! unboxed, with the fail-fast cursor semantics of classic collection
//! frameworks.
//!
//! ## Features
//! - [`ArrayList`]: a growable, contiguous buffer with an explicit growth policy.
//!   Lists created without a capacity share a lazily sized empty state and
//!   jump straight to [`DEFAULT_CAPACITY`] on their first insertion.
//! - [`LinkedList`]: a doubly-linked list whose positional operations walk
//!   from the nearer end.
//! - Fail-fast cursors ([`ListCursor`]) that detect structural changes made
//!   behind their back and refuse to operate from then on.
//! - [`PrimitiveCollection::to_array_primitive`]: copies a collection into a
//!   caller provided buffer, coping with collections whose reported size
//!   drifts while they are being copied.
//! - [`Unmodifiable`]: a read-only view over any list.
//!
//! ## Example
//! ```rust
//! use primitive_list::{ArrayList, Error, LinkedList, ListCursor};
//!
//! let mut list: ArrayList<i64> = ArrayList::new();
//! list.add(2);
//! list.insert(0, 0).unwrap();
//! list.insert(1, 1).unwrap();
//!
//! assert_eq!(list, [0, 1, 2]);
//! assert_eq!(list, LinkedList::from([0, 1, 2]));
//! assert!(list.capacity() >= 3);
//!
//! let mut cursor = list.list_iter();
//! assert_eq!(cursor.next(&list), Ok(0));
//!
//! list.add(3);
//! assert!(matches!(
//!     cursor.next(&list),
//!     Err(Error::ConcurrentStructuralChange { .. })
//! ));
//! ```

/// Implements equality between a list type and every other sequence of
/// primitives this crate knows about, element by element.
macro_rules! impl_list_eq {
    ($list:ident, $other:ident) => {
        impl<T: $crate::primitive::Primitive> PartialEq for $list<T> {
            fn eq(&self, other: &Self) -> bool {
                $crate::collection::collections_eq(self, other)
            }
        }

        impl<T: $crate::primitive::Primitive> Eq for $list<T> {}

        impl<T: $crate::primitive::Primitive> PartialEq<$other<T>> for $list<T> {
            fn eq(&self, other: &$other<T>) -> bool {
                $crate::collection::collections_eq(self, other)
            }
        }

        impl<T: $crate::primitive::Primitive, const M: usize> PartialEq<[T; M]> for $list<T> {
            fn eq(&self, other: &[T; M]) -> bool {
                $crate::collection::collections_eq(self, other)
            }
        }

        impl<T: $crate::primitive::Primitive> PartialEq<[T]> for $list<T> {
            fn eq(&self, other: &[T]) -> bool {
                $crate::collection::collections_eq(self, other)
            }
        }

        impl<T: $crate::primitive::Primitive> PartialEq<&[T]> for $list<T> {
            fn eq(&self, other: &&[T]) -> bool {
                $crate::collection::collections_eq(self, *other)
            }
        }

        impl<T: $crate::primitive::Primitive> PartialEq<Vec<T>> for $list<T> {
            fn eq(&self, other: &Vec<T>) -> bool {
                $crate::collection::collections_eq(self, other)
            }
        }
    };
}

mod array_list;
mod collection;
mod cursor;
mod error;
mod into_iter;
mod iter;
mod linked_cursor;
mod linked_list;
mod node;
mod primitive;
mod sailed;
mod unmodifiable;

pub use array_list::{ArrayList, DEFAULT_CAPACITY};
pub use collection::{PrimitiveCollection, PrimitiveList, collections_eq};
pub use cursor::{ListCursor, ListIter};
pub use error::{Error, Result};
pub use into_iter::{IntoIter, LinkedIntoIter};
pub use iter::{Iter, LinkedIter};
pub use linked_cursor::LinkedListIter;
pub use linked_list::LinkedList;
pub use primitive::Primitive;
pub use unmodifiable::{Unmodifiable, UnmodifiableIter};
