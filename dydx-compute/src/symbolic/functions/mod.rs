//! Smart constructors for the unary functions.
//!
//! Each constructor evaluates its function exactly when the argument is one of a small set of
//! well-known values, and otherwise wraps the argument in an unevaluated node. The results of
//! these constructors are what [`Expr::subst`](crate::symbolic::Expr::subst) and the derivative
//! rules rebuild with, so substitution can collapse `sin(x)` into `1` when `x` becomes `pi / 2`.

mod logarithm;
mod trigonometry;

pub use logarithm::{log, log10, log2, log_with, Base};
pub use trigonometry::{cos, sin, tan};
