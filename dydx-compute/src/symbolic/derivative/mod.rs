//! Symbolic differentiation.
//!
//! Differentiation is total: every expression has a derivative with respect to every symbol.
//! The result is built through the same constructors as any other expression, so it comes out
//! simplified (`sin(x)' = cos(x) * 1 = cos(x)`), and the derivative with respect to a symbol that
//! does not appear in the expression is always exactly `0`.

mod function;

use crate::symbolic::{
    consts::{one, zero},
    expr::Expr,
    formula::{div, modulo, negate, power, product, sub, sum},
    functions::{log, Base},
    DEFAULT_SYMBOL,
};

/// `(f + g)' = f' + g'`
fn sum_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    sum(derivative(f, with), derivative(g, with))
}

/// `(f * g)' = f' * g + f * g'`
fn product_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    sum(
        product(derivative(f, with), g.clone()),
        product(f.clone(), derivative(g, with)),
    )
}

/// Differentiates `f ^ g`, picking the simplest rule that applies:
///
/// - `(f ^ n)' = n * f ^ (n - 1) * f'`, if the exponent does not depend on `with`
/// - `(a ^ g)' = a ^ g * log(a) * g'`, if the base does not depend on `with`
/// - `(f ^ g)' = f ^ g * (g' * log(f) + g * f' / f)`, otherwise
fn power_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    match (f.contains_symbol(with), g.contains_symbol(with)) {
        (false, false) => zero(),
        (true, false) => product(
            product(g.clone(), power(f.clone(), sub(g.clone(), one()))),
            derivative(f, with),
        ),
        (false, true) => product(
            product(power(f.clone(), g.clone()), log(f.clone())),
            derivative(g, with),
        ),
        (true, true) => product(
            power(f.clone(), g.clone()),
            sum(
                product(derivative(g, with), log(f.clone())),
                div(product(g.clone(), derivative(f, with)), f.clone()),
            ),
        ),
    }
}

/// `(f % g)' = f' - g' * (f - f % g) / g`
fn modulo_rule(f: &Expr, g: &Expr, with: &str) -> Expr {
    let quotient = div(sub(f.clone(), modulo(f.clone(), g.clone())), g.clone());
    sub(derivative(f, with), product(derivative(g, with), quotient))
}

/// Computes the derivative of `f` with respect to the symbol named `with`.
pub fn derivative(f: &Expr, with: &str) -> Expr {
    match f {
        Expr::Num(_) | Expr::Pi | Expr::E => zero(),
        Expr::Symbol(name) => if name == with { one() } else { zero() },
        Expr::Sin(x) => function::sin(x.operand(), with),
        Expr::Cos(x) => function::cos(x.operand(), with),
        Expr::Tan(x) => function::tan(x.operand(), with),
        Expr::Log(x) => function::log(Base::Natural, x.operand(), with),
        Expr::Log2(x) => function::log(Base::Two, x.operand(), with),
        Expr::Log10(x) => function::log(Base::Ten, x.operand(), with),
        Expr::Sum(b) => sum_rule(b.f(), b.g(), with),
        Expr::Product(b) => product_rule(b.f(), b.g(), with),
        Expr::Power(b) => power_rule(b.f(), b.g(), with),
        Expr::Modulo(b) => modulo_rule(b.f(), b.g(), with),
        Expr::Negation(x) => negate(derivative(x.operand(), with)),
        // (1 / x)' = -x' / x^2
        Expr::Reciprocal(x) => {
            let x = x.operand();
            negate(div(derivative(x, with), power(x.clone(), Expr::from(2))))
        },
    }
}

impl Expr {
    /// Computes the derivative of the expression with respect to the symbol named `with`. See
    /// [`derivative`].
    pub fn d(&self, with: &str) -> Expr {
        derivative(self, with)
    }

    /// Computes the derivative of the expression with respect to [`DEFAULT_SYMBOL`].
    pub fn dx(&self) -> Expr {
        derivative(self, DEFAULT_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use crate::symbolic::{cos, e, log10, log2, num, pi, sin, sym, tan};
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use super::*;

    /// Evaluates `expr` with `x` substituted by the given value.
    fn eval_x(expr: &Expr, x: f64) -> f64 {
        expr.subst(&HashMap::from([("x", num(x))])).eval_f64().unwrap()
    }

    /// Approximates the derivative of `expr` at `x` with a central difference.
    fn finite_difference(expr: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(expr, x + DX) - eval_x(expr, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(expr: Expr, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let symbolic = expr.dx();
        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);
            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "for `{}` at x={}, the derivative `{}` evaluated to {}, but the finite difference was {}",
                expr, point, symbolic, symbolically_computed, numerically_computed,
            );
        }
    }

    #[test]
    fn leaves() {
        assert_eq!(num(5).dx(), num(0));
        assert_eq!(pi().dx(), num(0));
        assert_eq!(e().dx(), num(0));
        assert_eq!(sym("x").dx(), num(1));
        assert_eq!(sym("y").dx(), num(0));
        assert_eq!(sym("y").d("y"), num(1));
    }

    #[test]
    fn functions() {
        let x = sym("x");
        assert_eq!(sin(x.clone()).d("x"), cos(x.clone()));
        assert_eq!(cos(x.clone()).dx(), -sin(x.clone()));
        assert_eq!(tan(x.clone()).dx().to_string(), "( 1 / ( cos( x ) ^ 2 ) )");
        assert_eq!(log(x.clone()).dx().to_string(), "( 1 / x )");
        assert_eq!(log10(x.clone()).dx().to_string(), "( 1 / ( x * log( 10 ) ) )");
        assert_eq!(log2(x.clone()).dx().to_string(), "( 1 / ( x * log( 2 ) ) )");
    }

    #[test]
    fn chain_rule() {
        let x = sym("x");
        assert_eq!(sin(x.clone() * 2).dx(), 2 * cos(x.clone() * 2));
        assert_eq!(tan(x.clone() * 3).dx(), 3 / cos(x.clone() * 3).pow(2));
    }

    #[test]
    fn absent_symbol_is_zero() {
        let y = sym("y");
        let exprs = [
            sin(y.clone()),
            cos(y.clone() * pi()),
            tan(y.clone()),
            log(y.clone()),
            log2(y.clone() + 1),
            log10(y.clone()),
            y.clone().pow(y.clone()),
            y.clone() % 3,
            -y.clone(),
            1 / y.clone(),
            e().pow(y.clone()) * sin(y.clone()) + 4,
        ];
        for expr in exprs {
            assert_eq!(expr.dx(), num(0), "{}", expr);
        }
    }

    #[test]
    fn constant_folding() {
        // cos(2pi) is folded as the derivative is built
        let x = sym("x");
        assert_eq!(sin(x.clone() * 2).dx().subst(&HashMap::from([("x", pi())])), num(2));
    }

    #[test]
    fn power_rule() {
        let x = sym("x");
        assert_eq!(x.clone().pow(2).dx(), 2 * x.clone());
        assert_eq!(x.clone().pow(3).dx(), 3 * x.clone().pow(2));
        test_for_function(x.clone().pow(2) + x.clone() + 1, [0., 1., 2., 5., 8.]);
    }

    #[test]
    fn exponential_rule() {
        let x = sym("x");
        assert_eq!(e().pow(x.clone()).dx(), e().pow(x.clone()));
        test_for_function(num(2).pow(x.clone()), [-1., 0., 1., 3.]);
    }

    #[test]
    fn general_power_rule() {
        let x = sym("x");
        test_for_function(x.clone().pow(x.clone()), [0.5, 1., 2., 3.]);
        test_for_function(sin(x.clone()).pow(cos(x.clone())), [0.5, 1., 1.5]);
    }

    #[test]
    fn against_finite_differences() {
        let x = sym("x");
        test_for_function(sin(x.clone()) * cos(x.clone()), [-2., 0., 0.5, 3.]);
        test_for_function(tan(x.clone() * x.clone()), [-1., 0., 0.3, 1.]);
        test_for_function(log(x.clone()) / x.clone(), [0.5, 1., 4.]);
        test_for_function(log2(x.clone() * 3) - log10(x.clone()), [0.5, 1., 4.]);
        test_for_function(1 / (x.clone() + 2), [-1., 0., 3.]);
        test_for_function(x.clone() % 2 * x.clone(), [0.5, 1.5, 2.5, -0.5]);
        test_for_function(-sin(pi() * x.clone()), [0.1, 0.7]);
    }
}
