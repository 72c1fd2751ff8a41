//! Symbolic derivatives of the unary functions. Every rule applies the chain rule.

use crate::symbolic::{
    consts::minus_one,
    expr::Expr,
    formula::{div, power, product},
    functions::{self, Base},
};
use super::derivative;

/// `sin(x)' = cos(x) * x'`
pub(super) fn sin(x: &Expr, with: &str) -> Expr {
    product(functions::cos(x.clone()), derivative(x, with))
}

/// `cos(x)' = -1 * sin(x) * x'`
pub(super) fn cos(x: &Expr, with: &str) -> Expr {
    product(product(minus_one(), functions::sin(x.clone())), derivative(x, with))
}

/// `tan(x)' = x' / cos(x)^2`
pub(super) fn tan(x: &Expr, with: &str) -> Expr {
    div(derivative(x, with), power(functions::cos(x.clone()), Expr::from(2)))
}

/// `log(x)' = x' / x`, and for the other bases, `log_b(x)' = x' / (x * log(b))`
pub(super) fn log(base: Base, x: &Expr, with: &str) -> Expr {
    let denominator = match base {
        Base::Natural => x.clone(),
        Base::Two => product(x.clone(), functions::log(Expr::from(2))),
        Base::Ten => product(x.clone(), functions::log(Expr::from(10))),
    };
    div(derivative(x, with), denominator)
}
