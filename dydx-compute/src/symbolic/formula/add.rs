//! Sums, differences and negation.

use log::trace;
use crate::symbolic::{
    expr::{Binary, Expr, Unary},
    number::Number,
};
use super::multiply::product;

/// Splits a non-numeric term into its numeric coefficient and the rest of the term, so that
/// `3 * x` becomes `(3, x)`, `-x` becomes `(-1, x)`, and `x` becomes `(1, x)`.
fn split_coefficient(term: &Expr) -> (Number, &Expr) {
    match term {
        Expr::Product(p) => match p.f() {
            Expr::Num(c) => (c.clone(), p.g()),
            _ => (Number::from(1), term),
        },
        Expr::Negation(x) => (Number::from(-1), x.operand()),
        _ => (Number::from(1), term),
    }
}

/// Creates the sum `f + g`.
///
/// Numeric literals are added together, zero operands are dropped, and like terms are collected,
/// so that `x + x` becomes `2 * x` and `x + -x` becomes `0`.
pub fn sum(f: Expr, g: Expr) -> Expr {
    if f.is_zero() {
        return g;
    }
    if g.is_zero() {
        return f;
    }

    match (f, g) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(a + b),
        (f, g) if !f.is_num() && !g.is_num() => {
            let (a, term_f) = split_coefficient(&f);
            let (b, term_g) = split_coefficient(&g);
            if term_f == term_g {
                trace!("collecting like terms in `{}` and `{}`", f, g);
                return product(Expr::Num(a + b), term_f.clone());
            }

            Expr::Sum(Binary::new(f, g))
        },
        (f, g) => Expr::Sum(Binary::new(f, g)),
    }
}

/// Creates the difference `f - g`, i.e. `f + (-g)`.
pub fn sub(f: Expr, g: Expr) -> Expr {
    sum(f, negate(g))
}

/// Creates the negation `-x`.
///
/// Numeric literals are negated directly, double negations cancel, and the sign of a product
/// with a numeric coefficient is folded into the coefficient.
pub fn negate(x: Expr) -> Expr {
    match x {
        Expr::Num(n) => Expr::Num(-n),
        Expr::Negation(inner) => inner.into_operand(),
        Expr::Product(p) if p.f().is_num() => {
            let (c, rest) = p.into_operands();
            product(negate(c), rest)
        },
        x => Expr::Negation(Unary::new(x)),
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use crate::symbolic::{num, pi, sin, sym};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fold_numbers() {
        assert_eq!(sum(num(2), num(3)), num(5));
        assert_eq!(sum(num(rational((1, 2))), num(rational((1, 3)))), num(rational((5, 6))));
        assert_eq!(sum(num(0.5), num(1)), num(1.5));
    }

    #[test]
    fn zero_is_identity() {
        let x = sym("x");
        assert_eq!(sum(x.clone(), num(0)), x);
        assert_eq!(sum(num(0), x.clone()), x);
        assert_eq!(sum(num(0.0), x.clone()), x);
    }

    #[test]
    fn collect_like_terms() {
        let x = sym("x");
        assert_eq!(sum(x.clone(), x.clone()), product(num(2), x.clone()));
        assert_eq!(sum(product(num(2), x.clone()), x.clone()), product(num(3), x.clone()));
        assert_eq!(sum(x.clone(), negate(x.clone())), num(0));
        assert_eq!(sub(sin(x.clone()), sin(x.clone())), num(0));
    }

    #[test]
    fn keep_unlike_terms() {
        let x = sym("x");
        let y = sym("y");
        let s = sum(x.clone(), y.clone());
        assert_eq!(s.operands(), Some((&x, &y)));
        assert_eq!(sum(num(1), pi()).to_string(), "( 1 + pi )");
    }

    #[test]
    fn negation() {
        let x = sym("x");
        assert_eq!(negate(num(3)), num(-3));
        assert_eq!(negate(negate(x.clone())), x);
        assert_eq!(negate(product(num(2), x.clone())), product(num(-2), x.clone()));
        assert_eq!(negate(x.clone()).to_string(), "( - x )");
    }

    #[test]
    fn difference() {
        assert_eq!(sub(num(5), num(7)), num(-2));
        assert_eq!(sub(sym("x"), num(0)), sym("x"));
        assert_eq!(sub(sym("x"), sym("y")).to_string(), "( x + ( - y ) )");
    }
}
