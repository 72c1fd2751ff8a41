//! Symbolic expressions.
//!
//! # Construction
//!
//! Expressions are built with **smart constructors**: [`sin`], [`log`], [`sum`], [`product`] and
//! friends (or the arithmetic operators, which forward to them). A smart constructor simplifies as
//! it builds, so the tree never contains a shape that one of the rules could have collapsed:
//!
//! ```
//! use dydx_compute::symbolic::{e, log, num, pi, sin, sym};
//!
//! assert_eq!(sin(pi() * 3 / 2), num(-1));
//! assert_eq!(log(e()), num(1));
//! assert_eq!(log(sym("x") * sym("y")), log(sym("x")) + log(sym("y")));
//! assert_eq!(sym("x") + sym("x"), 2 * sym("x"));
//! ```
//!
//! # Capabilities
//!
//! Every [`Expr`] supports the same five operations:
//!
//! - rendering, through [`Display`](std::fmt::Display), e.g. `sin( x )`
//! - evaluation to a floating-point number, with [`Expr::eval`]
//! - substitution of symbols, with [`Expr::subst`]
//! - differentiation, with [`Expr::d`] or [`Expr::dx`]
//! - integration, with [`Expr::integrate`] or [`Expr::integrate_dx`]
//!
//! Evaluation and integration can fail; their errors are [`dydx_error::Error`]s whose spans point
//! into the rendered expression, so they can be reported with
//! [`Error::report_to_stderr`](dydx_error::Error::report_to_stderr).

mod consts;
pub mod derivative;
pub mod error;
mod eval;
pub mod expr;
pub mod formula;
pub mod functions;
pub mod integrate;
pub mod number;
mod subst;

pub use consts::{e, minus_one, one, oo, pi, zero};
pub use derivative::derivative;
pub use error::{InvalidNumericConversion, UnevaluableSymbol, UnsupportedIntegrand};
pub use expr::{num, sym, Binary, Expr, ExprIter, Operator, Unary};
pub use formula::{
    div,
    exact_quotient,
    is_exact_multiple_of,
    modulo,
    negate,
    power,
    product,
    reciprocal,
    sub,
    sum,
};
pub use functions::{cos, log, log10, log2, log_with, sin, tan, Base};
pub use integrate::integrate;
pub use number::Number;

/// The symbol that [`Expr::dx`] and [`Expr::integrate_dx`] operate with respect to.
pub const DEFAULT_SYMBOL: &str = "x";
