//! Numeric evaluation of expressions.
//!
//! Evaluation is done with [`rug::Float`]s at [`PRECISION`](crate::primitive::PRECISION) bits,
//! and follows IEEE 754 semantics for undefined operations: `1 / 0` evaluates to infinity, and
//! `log(-1)` evaluates to NaN. The only way evaluation can fail is by reaching a symbol.

use crate::consts::{E, PI};
use crate::symbolic::{
    error::UnevaluableSymbol,
    expr::{render_with_span, Expr},
};
use dydx_error::Error;
use log::debug;
use rug::{ops::Pow, Float};

/// A symbol reached during evaluation.
struct FreeSymbol<'a> {
    node: &'a Expr,
    name: &'a str,
}

fn eval_node(expr: &Expr) -> Result<Float, FreeSymbol<'_>> {
    Ok(match expr {
        Expr::Num(n) => n.to_float(),
        Expr::Pi => PI.clone(),
        Expr::E => E.clone(),
        Expr::Symbol(name) => return Err(FreeSymbol { node: expr, name }),
        Expr::Sin(x) => eval_node(x.operand())?.sin(),
        Expr::Cos(x) => eval_node(x.operand())?.cos(),
        Expr::Tan(x) => eval_node(x.operand())?.tan(),
        Expr::Log(x) => eval_node(x.operand())?.ln(),
        Expr::Log2(x) => eval_node(x.operand())?.log2(),
        Expr::Log10(x) => eval_node(x.operand())?.log10(),
        Expr::Sum(b) => eval_node(b.f())? + eval_node(b.g())?,
        Expr::Product(b) => eval_node(b.f())? * eval_node(b.g())?,
        Expr::Power(b) => eval_node(b.f())?.pow(eval_node(b.g())?),
        Expr::Modulo(b) => {
            let a = eval_node(b.f())?;
            let m = eval_node(b.g())?;
            let quotient = (a.clone() / &m).floor();
            a - quotient * m
        },
        Expr::Negation(x) => -eval_node(x.operand())?,
        Expr::Reciprocal(x) => eval_node(x.operand())?.recip(),
    })
}

impl Expr {
    /// Evaluates the expression to a [`Float`].
    ///
    /// Fails with [`UnevaluableSymbol`] if the expression contains a symbol. The span of the error
    /// points at the first symbol reached, within the rendered form of this expression (the output
    /// of [`ToString::to_string`]).
    ///
    /// ```
    /// use dydx_compute::symbolic::{sin, sym, UnevaluableSymbol};
    ///
    /// let expr = sin(sym("x"));
    /// let err = expr.eval().unwrap_err();
    /// assert!(err.is::<UnevaluableSymbol>());
    /// assert_eq!(&expr.to_string()[err.spans[0].clone()], "x");
    /// ```
    pub fn eval(&self) -> Result<Float, Error> {
        eval_node(self).map_err(|FreeSymbol { node, name }| {
            debug!("cannot evaluate `{}`: `{}` is a free symbol", self, name);
            let (_, span) = render_with_span(self, node);
            Error::new(span.into_iter().collect(), UnevaluableSymbol { name: name.to_string() })
        })
    }

    /// Evaluates the expression to an [`f64`]. See [`Expr::eval`].
    pub fn eval_f64(&self) -> Result<f64, Error> {
        self.eval().map(|n| n.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_absolute_error_msg, afe_is_absolute_eq, assert_float_absolute_eq};
    use crate::primitive::rational;
    use crate::symbolic::{cos, e, log, log10, log2, num, pi, sin, sym, tan, oo};
    use super::*;

    #[test]
    fn literals() {
        for n in [-3.0, 0.0, 0.5, 2.0, 1e10] {
            assert_eq!(num(n).eval_f64().unwrap(), n);
        }
        assert_eq!(num(7).eval_f64().unwrap(), 7.0);
        assert_eq!(num(rational((1, 4))).eval_f64().unwrap(), 0.25);
        assert!(oo().eval_f64().unwrap().is_infinite());
    }

    #[test]
    fn constants() {
        assert_float_absolute_eq!(pi().eval_f64().unwrap(), std::f64::consts::PI);
        assert_float_absolute_eq!(e().eval_f64().unwrap(), std::f64::consts::E);
    }

    #[test]
    fn functions() {
        assert_float_absolute_eq!(sin(num(1)).eval_f64().unwrap(), 1f64.sin());
        assert_float_absolute_eq!(cos(num(1)).eval_f64().unwrap(), 1f64.cos());
        assert_float_absolute_eq!(tan(num(1)).eval_f64().unwrap(), 1f64.tan());
        assert_float_absolute_eq!(log(num(3)).eval_f64().unwrap(), 3f64.ln());
        assert_float_absolute_eq!(log2(num(3)).eval_f64().unwrap(), 3f64.log2());
        assert_float_absolute_eq!(log10(num(3)).eval_f64().unwrap(), 3f64.log10());
    }

    #[test]
    fn formulas() {
        assert_float_absolute_eq!((pi() * 2 + 1).eval_f64().unwrap(), std::f64::consts::TAU + 1.0);
        assert_float_absolute_eq!(num(2).pow(pi()).eval_f64().unwrap(), 2f64.powf(std::f64::consts::PI));
        assert_float_absolute_eq!((pi() % 3).eval_f64().unwrap(), std::f64::consts::PI - 3.0);
        assert_float_absolute_eq!((-pi() % 3).eval_f64().unwrap(), 6.0 - std::f64::consts::PI);
        assert_float_absolute_eq!((1 / pi()).eval_f64().unwrap(), 1.0 / std::f64::consts::PI);
        assert_float_absolute_eq!(num(2).pow(rational((1, 2))).eval_f64().unwrap(), 2f64.sqrt());
    }

    #[test]
    fn division_by_zero_is_infinite() {
        assert!((num(1) / 0).eval_f64().unwrap().is_infinite());
    }

    #[test]
    fn free_symbol() {
        let expr = sin(sym("x")) + cos(sym("y"));
        let err = expr.eval().unwrap_err();
        let kind = err.kind_as::<UnevaluableSymbol>().unwrap();
        assert_eq!(kind.name, "x");

        let text = expr.to_string();
        assert_eq!(text, "( sin( x ) + cos( y ) )");
        assert_eq!(err.spans.len(), 1);
        assert_eq!(&text[err.spans[0].clone()], "x");
    }

    #[test]
    fn free_symbol_report() {
        let expr = log(sym("t")) * 2;
        let err = expr.eval().unwrap_err();
        let report = String::from_utf8(
            strip_ansi_escapes::strip(err.report_to_string(&expr.to_string())),
        ).unwrap();
        assert!(report.contains("cannot evaluate the symbol `t`"), "{}", report);
    }
}
