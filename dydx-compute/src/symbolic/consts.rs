//! Well-known expressions, created once on first use and shared for the rest of the process.
//!
//! The statics in this module are initialized through [`Lazy`], which synchronizes the first
//! access, so they are safe to use from multiple threads.

use crate::consts::INFINITY;
use crate::symbolic::{expr::Expr, number::Number};
use once_cell::sync::Lazy;

/// The additive identity, `0`.
pub static ZERO: Lazy<Expr> = Lazy::new(|| Expr::Num(Number::from(0)));

/// The multiplicative identity, `1`.
pub static ONE: Lazy<Expr> = Lazy::new(|| Expr::Num(Number::from(1)));

/// The number `-1`.
pub static MINUS_ONE: Lazy<Expr> = Lazy::new(|| Expr::Num(Number::from(-1)));

/// The constant `pi`.
pub static PI: Lazy<Expr> = Lazy::new(|| Expr::Pi);

/// Euler's number, `e`.
pub static E: Lazy<Expr> = Lazy::new(|| Expr::E);

/// Returns the additive identity, `0`.
pub fn zero() -> Expr {
    ZERO.clone()
}

/// Returns the multiplicative identity, `1`.
pub fn one() -> Expr {
    ONE.clone()
}

/// Returns the number `-1`.
pub fn minus_one() -> Expr {
    MINUS_ONE.clone()
}

/// Returns the constant `pi`.
pub fn pi() -> Expr {
    PI.clone()
}

/// Returns Euler's number, `e`.
pub fn e() -> Expr {
    E.clone()
}

/// Returns positive infinity, as a floating-point literal.
pub fn oo() -> Expr {
    Expr::Num(Number::Float(INFINITY.clone()))
}
