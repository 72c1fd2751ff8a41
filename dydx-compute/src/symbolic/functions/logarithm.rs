//! `log`, `log2` and `log10`.

use log::trace;
use crate::symbolic::{
    consts::{one, zero},
    expr::{Expr, Unary},
    formula::{product, sum},
};

/// The base of a logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// The natural logarithm, base `e`.
    Natural,

    /// The binary logarithm, base `2`.
    Two,

    /// The common logarithm, base `10`.
    Ten,
}

impl Base {
    /// Returns true if `x` is the base itself, so that the logarithm of `x` is `1`.
    fn is_base(self, x: &Expr) -> bool {
        match self {
            Self::Natural => matches!(x, Expr::E),
            Self::Two => *x == 2,
            Self::Ten => *x == 10,
        }
    }

    /// Wraps `x` in the unevaluated node for this base.
    fn wrap(self, x: Expr) -> Expr {
        match self {
            Self::Natural => Expr::Log(Unary::new(x)),
            Self::Two => Expr::Log2(Unary::new(x)),
            Self::Ten => Expr::Log10(Unary::new(x)),
        }
    }
}

/// Creates the logarithm of `x` in the given base.
///
/// Products are split into sums of logarithms, and exponents are pulled out of powers:
///
/// - `log(f * g) = log(f) + log(g)`
/// - `log(f ^ g) = g * log(f)`
/// - `log(1) = 0`
/// - `log(b) = 1`, where `b` is the base (`e`, `2` or `10`)
///
/// The product is split in the operand order it was stored in. Since [`product`] moves a numeric
/// coefficient to the left, `log(x * 2)` is `log(2) + log(x)`, not `log(x) + log(2)`.
pub fn log_with(base: Base, x: Expr) -> Expr {
    match x {
        Expr::Product(p) => {
            trace!("splitting the logarithm of a product ({:?})", base);
            let (f, g) = p.into_operands();
            sum(log_with(base, f), log_with(base, g))
        },
        Expr::Power(p) => {
            trace!("pulling the exponent out of a logarithm ({:?})", base);
            let (f, g) = p.into_operands();
            product(g, log_with(base, f))
        },
        x if x.is_one() => zero(),
        x if base.is_base(&x) => one(),
        x => base.wrap(x),
    }
}

/// Creates the natural logarithm, `log(x)`. See [`log_with`].
pub fn log(x: Expr) -> Expr {
    log_with(Base::Natural, x)
}

/// Creates the binary logarithm, `log2(x)`. See [`log_with`].
pub fn log2(x: Expr) -> Expr {
    log_with(Base::Two, x)
}

/// Creates the common logarithm, `log10(x)`. See [`log_with`].
pub fn log10(x: Expr) -> Expr {
    log_with(Base::Ten, x)
}
