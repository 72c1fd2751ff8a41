//! `sin`, `cos` and `tan`.

mod table;

use log::trace;
use crate::symbolic::{
    consts::{pi, zero},
    expr::{Expr, Unary},
    formula::exact_quotient,
    number::Number,
};
use table::TrigOut;

/// If `x` is a numeric multiple of `pi`, returns `x / pi` reduced into `[0, 2)`, i.e. the angle
/// as a fraction of a half turn.
fn reduce(x: &Expr) -> Option<Number> {
    exact_quotient(x, &pi())?.checked_rem(&Number::from(2))
}

/// Evaluates a trigonometric function through the lookup table, if `x` is one of its angles.
fn lookup(x: &Expr, name: &str, select: fn(&TrigOut) -> &Expr) -> Option<Expr> {
    let out = select(table::lookup(&reduce(x)?)?).clone();
    trace!("{}( {} ) = {}", name, x, out);
    Some(out)
}

/// Creates `sin(x)`.
///
/// If `x` is a multiple of `pi / 2`, the result is evaluated exactly, for example:
///
/// ```
/// use dydx_compute::symbolic::{num, pi, sin, sym};
///
/// assert_eq!(sin(pi() / 2), num(1));
/// assert_eq!(sin(pi() * -3), num(0));
/// assert_eq!(sin(sym("x")).to_string(), "sin( x )");
/// ```
pub fn sin(x: Expr) -> Expr {
    match lookup(&x, "sin", |out| &out.sin) {
        Some(out) => out,
        None => Expr::Sin(Unary::new(x)),
    }
}

/// Creates `cos(x)`.
///
/// If `x` is a multiple of `pi / 2`, the result is evaluated exactly.
pub fn cos(x: Expr) -> Expr {
    match lookup(&x, "cos", |out| &out.cos) {
        Some(out) => out,
        None => Expr::Cos(Unary::new(x)),
    }
}

/// Creates `tan(x)`. Only `tan(0)` is evaluated exactly.
pub fn tan(x: Expr) -> Expr {
    if x.is_zero() {
        trace!("tan( {} ) = 0", x);
        return zero();
    }

    Expr::Tan(Unary::new(x))
}
