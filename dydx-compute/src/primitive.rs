//! Functions to construct [`Integer`]s, [`Rational`]s, and [`Float`]s from various types.

use rug::{Assign, Float, Integer, Rational};

/// The number of bits of precision to use when computing values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
///
/// Pass a tuple `(numerator, denominator)` to create a fraction. The fraction is canonicalized
/// automatically, so `rational((2, 4))` is equal to `rational((1, 2))`.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}
