//! The formula layer: construction and decomposition of sums, products, powers, modulos,
//! negations and reciprocals.
//!
//! Like every other constructor in this crate, the functions in this module simplify as they
//! build. The rules are deliberately small; they cover what the function constructors and the
//! derivative rules rely on to keep their output tidy:
//!
//! - numeric literals are folded (`2 + 3 = 5`, `2^-1 = 1/2`), staying exact when possible
//! - identities and annihilators are removed (`x + 0 = x`, `x * 1 = x`, `x * 0 = 0`, `x^1 = x`)
//! - like terms and factors are combined (`x + x = 2 * x`, `x * x = x^2`, `x + -x = 0`,
//!   `x * (1 / x) = 1`)
//! - numeric coefficients are collected on the left of a product (`2 * (3 * x) = 6 * x`), which
//!   also cancels quotients such as `(3 * pi) / pi = 3`
//! - nested powers are merged (`(x^2)^3 = x^6`)

mod add;
mod multiply;
mod ops;
mod power;

pub use add::{negate, sub, sum};
pub use multiply::{div, product, reciprocal};
pub use power::{modulo, power};

use crate::symbolic::{expr::Expr, number::Number};

/// Divides `a` by `b`, returning the quotient if it simplifies to a numeric literal.
pub fn exact_quotient(a: &Expr, b: &Expr) -> Option<Number> {
    div(a.clone(), b.clone()).into_number()
}

/// Returns true if `a / b` simplifies to a numeric literal, i.e. `a` is an exact multiple of `b`.
pub fn is_exact_multiple_of(a: &Expr, b: &Expr) -> bool {
    exact_quotient(a, b).is_some()
}
