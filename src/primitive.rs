use core::fmt::Debug;
use core::hash::Hasher;

use crate::sailed::Sailed;

/// A primitive value that can be stored unboxed in the lists of this crate.
///
/// The trait is sealed: it is implemented for `bool`, `i8`, `i16`, `i32`,
/// `i64`, `f32`, `f64` and `char`, and cannot be implemented elsewhere.
pub trait Primitive: Sailed + Copy + Default + Debug + 'static {
    /// The value unused buffer slots are filled with.
    const ZERO: Self;

    /// Exact equality.
    ///
    /// Floating point values are compared by bit pattern, so `NaN` equals
    /// itself while `0.0` and `-0.0` are distinct.
    fn same(self, other: Self) -> bool;

    /// Feeds the value into `state` consistently with [`Primitive::same`].
    fn hash_into<H: Hasher>(self, state: &mut H);
}

macro_rules! impl_exact_primitive {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const ZERO: Self = $zero;

                #[inline]
                fn same(self, other: Self) -> bool {
                    self == other
                }

                #[inline]
                fn hash_into<H: Hasher>(self, state: &mut H) {
                    core::hash::Hash::hash(&self, state);
                }
            }
        )*
    };
}

macro_rules! impl_float_primitive {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Primitive for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn same(self, other: Self) -> bool {
                    self.to_bits() == other.to_bits()
                }

                #[inline]
                fn hash_into<H: Hasher>(self, state: &mut H) {
                    core::hash::Hash::hash(&self.to_bits(), state);
                }
            }
        )*
    };
}

impl_exact_primitive! {
    bool => false,
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    char => '\0',
}

impl_float_primitive!(f32, f64);
