//! Element types for lazy array expressions.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::Float;

/// A scalar element type usable inside deferred expressions.
///
/// The element type is fixed once per recipe by the caller; every helper
/// constructor is generic over it. Only floating-point implementations are
/// provided: normalization rescales into `[0, 1]` by a true division and is
/// therefore not meaningful for integer elements, so integers are kept out
/// of the interface rather than guarded at runtime.
pub trait Element:
    Copy
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const ONE: Self;

    /// Lift a concrete index into the element domain.
    fn from_index(i: i64) -> Self;

    /// Truncate towards zero into an index.
    fn to_index(self) -> i64;

    /// Natural logarithm primitive.
    fn ln(self) -> Self;

    fn sqrt(self) -> Self;

    fn ceil(self) -> Self;
}

macro_rules! impl_element_for_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn from_index(i: i64) -> Self {
                    i as $t
                }

                fn to_index(self) -> i64 {
                    self as i64
                }

                fn ln(self) -> Self {
                    <$t as Float>::ln(self)
                }

                fn sqrt(self) -> Self {
                    <$t as Float>::sqrt(self)
                }

                fn ceil(self) -> Self {
                    <$t as Float>::ceil(self)
                }
            }
        )*
    };
}

impl_element_for_float!(f32, f64);
