//! Integration of a small, fixed set of integrands.
//!
//! This is a table lookup, not a general integration algorithm. Only the following shapes are
//! supported, where `x` is the symbol of integration:
//!
//! | Integrand                     | Antiderivative |
//! |-------------------------------|----------------|
//! | a number `k`, `pi` or `e`     | `k * x`        |
//! | `x`                           | `x^2 / 2`      |
//! | any other symbol `y`          | `x + y`        |
//! | `sin(x)`                      | `-cos(x)`      |
//! | `cos(x)`                      | `sin(x)`       |
//!
//! The operand of `sin` and `cos` must be exactly the symbol `x`; `sin(2 * x)` is not supported.
//! The integral of another symbol `y` is `x + y` rather than `y * x`.

use crate::primitive::rational;
use crate::symbolic::{
    error::UnsupportedIntegrand,
    expr::{sym, Expr},
    formula::{negate, power, product, sum},
    functions::{cos, sin},
    DEFAULT_SYMBOL,
};
use dydx_error::Error;
use log::debug;

/// Computes the antiderivative of `expr` with respect to the symbol named `with`.
pub fn integrate(expr: &Expr, with: &str) -> Result<Expr, Error> {
    let x = sym(with);
    match expr {
        Expr::Num(_) | Expr::Pi | Expr::E => Ok(product(expr.clone(), x)),
        Expr::Symbol(name) if name == with => {
            Ok(product(Expr::from(rational((1, 2))), power(x, Expr::from(2))))
        },
        Expr::Symbol(_) => Ok(sum(x, expr.clone())),
        Expr::Sin(arg) if arg.operand().is_symbol(with) => Ok(negate(cos(x))),
        Expr::Cos(arg) if arg.operand().is_symbol(with) => Ok(sin(x)),
        Expr::Sin(_)
        | Expr::Cos(_)
        | Expr::Tan(_)
        | Expr::Log(_)
        | Expr::Log2(_)
        | Expr::Log10(_)
        | Expr::Sum(_)
        | Expr::Product(_)
        | Expr::Power(_)
        | Expr::Modulo(_)
        | Expr::Negation(_)
        | Expr::Reciprocal(_) => {
            let text = expr.to_string();
            debug!("cannot integrate `{}` with respect to `{}`", text, with);
            Err(Error::new(
                vec![0..text.len()],
                UnsupportedIntegrand { with: with.to_string(), kind: expr.kind_name() },
            ))
        },
    }
}

impl Expr {
    /// Computes the antiderivative of the expression with respect to the symbol named `with`. See
    /// [`integrate`].
    pub fn integrate(&self, with: &str) -> Result<Expr, Error> {
        integrate(self, with)
    }

    /// Computes the antiderivative of the expression with respect to [`DEFAULT_SYMBOL`].
    pub fn integrate_dx(&self) -> Result<Expr, Error> {
        integrate(self, DEFAULT_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{e, log, num, pi, tan};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(num(3).integrate_dx().unwrap(), 3 * sym("x"));
        assert_eq!(pi().integrate_dx().unwrap().to_string(), "( pi * x )");
        assert_eq!(e().integrate("t").unwrap().to_string(), "( e * t )");
        assert_eq!(num(0).integrate_dx().unwrap(), num(0));
    }

    #[test]
    fn symbols() {
        assert_eq!(sym("x").integrate_dx().unwrap().to_string(), "( ( 1 / 2 ) * ( x ^ 2 ) )");
        assert_eq!(sym("y").integrate_dx().unwrap().to_string(), "( x + y )");
    }

    #[test]
    fn trigonometric() {
        let x = sym("x");
        assert_eq!(cos(x.clone()).integrate("x").unwrap(), sin(x.clone()));
        assert_eq!(sin(x.clone()).integrate("x").unwrap(), -cos(x.clone()));
    }

    #[test]
    fn inverse_of_derivative() {
        let x = sym("x");
        for expr in [num(5), sym("x"), sin(x.clone()), cos(x.clone())] {
            assert_eq!(expr.integrate_dx().unwrap().dx(), expr);
        }
    }

    #[test]
    fn unsupported() {
        let x = sym("x");
        let exprs = [
            tan(x.clone()),
            log(x.clone()),
            sin(x.clone() * 2),
            cos(sym("y")),
            x.clone() + 1,
            x.clone().pow(2),
            -x.clone(),
        ];
        for expr in exprs {
            let err = expr.integrate_dx().unwrap_err();
            let kind = err.kind_as::<UnsupportedIntegrand>().unwrap();
            assert_eq!(kind.with, "x");
            assert_eq!(kind.kind, expr.kind_name());
            assert_eq!(err.spans, vec![0..expr.to_string().len()]);
        }
    }

    #[test]
    fn unsupported_report() {
        let expr = tan(sym("x"));
        let err = expr.integrate_dx().unwrap_err();
        let report = String::from_utf8(
            strip_ansi_escapes::strip(err.report_to_string(&expr.to_string())),
        ).unwrap();
        assert!(report.contains("cannot integrate an expression of kind `tan`"), "{}", report);
        assert!(report.contains("tan( x )"), "{}", report);
    }
}
