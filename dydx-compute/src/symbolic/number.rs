//! Numeric literals that appear as leaves of an expression tree.

use crate::primitive::{float, rational};
use rug::{ops::Pow, Float, Integer, Rational};
use std::{cmp::Ordering, fmt, ops::{Add, Mul, Neg, Sub}};

/// The largest exponent magnitude that [`Number::checked_pow`] will compute exactly.
const MAX_EXACT_EXPONENT: u32 = 1 << 12;

/// A numeric literal: either an exact rational number, or a floating-point number.
///
/// Integers are stored as [`Number::Exact`] rationals with a denominator of `1`. Arithmetic
/// between two exact numbers stays exact; arithmetic involving a [`Number::Float`] produces a
/// [`Number::Float`].
///
/// Equality and ordering compare the **numeric value**, so `Number::Exact(1/2)` is equal to
/// `Number::Float(0.5)`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Number {
    /// An exact integer or rational number, such as `2` or `1/3`.
    Exact(Rational),

    /// A floating-point number, such as `0.5`.
    Float(Float),
}

impl Number {
    /// Returns true if the number is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Exact(r) => r.cmp0() == Ordering::Equal,
            Self::Float(f) => f.is_zero(),
        }
    }

    /// Returns true if the number is one.
    pub fn is_one(&self) -> bool {
        *self == 1
    }

    /// Returns true if the number is an integer.
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Exact(r) => *r.denom() == 1,
            Self::Float(f) => f.is_integer(),
        }
    }

    /// Returns true if the number is exact (not a floating-point number).
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }

    /// Converts the number to a [`Float`].
    pub fn to_float(&self) -> Float {
        match self {
            Self::Exact(r) => float(r),
            Self::Float(f) => f.clone(),
        }
    }

    /// Converts the number to an [`f64`], rounding to the nearest representable value.
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Exact(r) => r.to_f64(),
            Self::Float(f) => f.to_f64(),
        }
    }

    /// Returns the multiplicative inverse of the number, or [`None`] if the number is zero.
    pub fn recip(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        Some(match self {
            Self::Exact(r) => Self::Exact(r.clone().recip()),
            Self::Float(f) => Self::Float(f.clone().recip()),
        })
    }

    /// Divides `self` by `rhs`, or returns [`None`] if `rhs` is zero.
    pub fn checked_div(&self, rhs: &Self) -> Option<Self> {
        Some(self.clone() * rhs.recip()?)
    }

    /// Computes the floored remainder of `self` divided by `rhs`, such that the result has the same
    /// sign as `rhs`. Returns [`None`] if `rhs` is zero.
    pub fn checked_rem(&self, rhs: &Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }

        Some(match (self, rhs) {
            (Self::Exact(a), Self::Exact(b)) => {
                let quotient = (a.clone() / b).floor();
                Self::Exact(a.clone() - quotient * b)
            },
            (a, b) => {
                let (a, b) = (a.to_float(), b.to_float());
                let quotient = (a.clone() / &b).floor();
                Self::Float(a - quotient * b)
            },
        })
    }

    /// Raises `self` to the power of `rhs`.
    ///
    /// An exact number raised to an exact integer power stays exact. Returns [`None`] if the result
    /// cannot be represented exactly (such as `2^(1/2)`), if the result is undefined (such as `0^-1`
    /// or `(-1)^0.5`), or if the exponent is too large to compute.
    pub fn checked_pow(&self, rhs: &Self) -> Option<Self> {
        match (self, rhs) {
            (Self::Exact(base), Self::Exact(exp)) => {
                if *exp.denom() != 1 {
                    return None;
                }

                let exp = exp.numer().to_i32()?;
                if exp.unsigned_abs() > MAX_EXACT_EXPONENT {
                    return None;
                }
                if exp < 0 && base.cmp0() == Ordering::Equal {
                    return None;
                }

                Some(Self::Exact(base.clone().pow(exp)))
            },
            (base, exp) => {
                let result = base.to_float().pow(exp.to_float());
                if result.is_nan() {
                    None
                } else {
                    Some(Self::Float(result))
                }
            },
        }
    }
}

impl From<Rational> for Number {
    fn from(r: Rational) -> Self {
        Self::Exact(r)
    }
}

impl From<Integer> for Number {
    fn from(i: Integer) -> Self {
        Self::Exact(Rational::from(i))
    }
}

impl From<Float> for Number {
    fn from(f: Float) -> Self {
        Self::Float(f)
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Self::Float(float(f))
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Self::Exact(rational(n))
                }
            }
        )*
    };
}

number_from_int!(i32, i64, u32);

/// Non-integer rationals are rendered as `( n / d )`. Floats are rendered using the shortest
/// representation that round-trips as an [`f64`].
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(r) if *r.denom() == 1 => write!(f, "{}", r.numer()),
            Self::Exact(r) => write!(f, "( {} / {} )", r.numer(), r.denom()),
            Self::Float(n) => write!(f, "{:?}", n.to_f64()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Float(a), Self::Exact(b)) | (Self::Exact(b), Self::Float(a)) => a == b,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Exact(b)) => a.partial_cmp(b),
            (Self::Exact(a), Self::Float(b)) => b.partial_cmp(a).map(Ordering::reverse),
        }
    }
}

macro_rules! number_cmp_primitive {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for Number {
                fn eq(&self, other: &$ty) -> bool {
                    match self {
                        Self::Exact(r) => *r == *other,
                        Self::Float(f) => *f == *other,
                    }
                }
            }

            impl PartialOrd<$ty> for Number {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    match self {
                        Self::Exact(r) => r.partial_cmp(other),
                        Self::Float(f) => f.partial_cmp(other),
                    }
                }
            }
        )*
    };
}

number_cmp_primitive!(i32, i64, u32, f64);

/// Generates a binary operator for [`Number`]s. Two exact numbers produce an exact number;
/// otherwise, both operands are converted to [`Float`]s.
macro_rules! number_op {
    ($trait:ident, $method:ident) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Exact(a), Self::Exact(b)) => Self::Exact(a.$method(b)),
                    (a, b) => Self::Float(a.to_float().$method(b.to_float())),
                }
            }
        }
    };
}

number_op!(Add, add);
number_op!(Sub, sub);
number_op!(Mul, mul);

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        match self {
            Self::Exact(r) => Self::Exact(-r),
            Self::Float(f) => Self::Float(-f),
        }
    }
}
