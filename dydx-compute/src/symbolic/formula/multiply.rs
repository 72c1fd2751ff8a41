//! Products, quotients and reciprocals.

use log::trace;
use crate::symbolic::{
    consts::{one, zero},
    expr::{Binary, Expr, Unary},
};
use super::{add::{negate, sum}, power::power};

/// Returns true if `a` is the reciprocal node `1 / b`.
fn is_reciprocal_of(a: &Expr, b: &Expr) -> bool {
    matches!(a, Expr::Reciprocal(r) if r.operand() == b)
}

/// Creates the product `f * g`.
///
/// Numeric literals are multiplied together and moved to the left of the product, so a product
/// has at most one numeric coefficient, and it is always the left operand. Zero annihilates, one
/// is dropped, equal bases are merged into powers (`x * x^2 = x^3`), and factors cancel their
/// reciprocals (`x * (1 / x) = 1`).
pub fn product(f: Expr, g: Expr) -> Expr {
    if f.is_zero() || g.is_zero() {
        return zero();
    }
    if f.is_one() {
        return g;
    }
    if g.is_one() {
        return f;
    }

    match (f, g) {
        (Expr::Num(a), Expr::Num(b)) => Expr::Num(a * b),
        (f, g @ Expr::Num(_)) => product(g, f),
        (Expr::Num(a), g) if a == -1 => negate(g),

        // coefficients
        (Expr::Num(a), Expr::Product(p)) if p.f().is_num() => {
            let (b, x) = p.into_operands();
            product(product(Expr::Num(a), b), x)
        },
        (Expr::Num(a), Expr::Negation(x)) => product(Expr::Num(-a), x.into_operand()),
        (f @ Expr::Num(_), g) => Expr::Product(Binary::new(f, g)),
        (Expr::Negation(x), g) => negate(product(x.into_operand(), g)),
        (f, Expr::Negation(x)) => negate(product(f, x.into_operand())),
        (Expr::Product(p), g) if p.f().is_num() => {
            let (c, x) = p.into_operands();
            product(c, product(x, g))
        },
        (f, Expr::Product(p)) if p.f().is_num() => {
            let (c, x) = p.into_operands();
            product(c, product(f, x))
        },

        // cancellation
        (f, g) if is_reciprocal_of(&f, &g) || is_reciprocal_of(&g, &f) => {
            trace!("cancelling `{}` with `{}`", f, g);
            one()
        },
        (Expr::Product(p), Expr::Reciprocal(r)) if p.g() == r.operand() => p.into_operands().0,
        (Expr::Product(p), Expr::Reciprocal(r)) if p.f() == r.operand() => p.into_operands().1,

        // equal bases
        (f, g) if f == g => power(f, Expr::from(2)),
        (Expr::Power(p), g) if *p.f() == g => {
            let (base, exp) = p.into_operands();
            power(base, sum(exp, one()))
        },
        (f, Expr::Power(p)) if *p.f() == f => {
            let (base, exp) = p.into_operands();
            power(base, sum(one(), exp))
        },
        (Expr::Power(p), Expr::Power(q)) if p.f() == q.f() => {
            let (base, m) = p.into_operands();
            let (_, n) = q.into_operands();
            power(base, sum(m, n))
        },

        (f, g) => Expr::Product(Binary::new(f, g)),
    }
}

/// Creates the reciprocal `1 / x`.
///
/// Non-zero numeric literals are inverted directly, double reciprocals cancel, and a numeric
/// coefficient is inverted separately from the rest of its product. The reciprocal of a literal
/// zero is kept as an unevaluated node, which fails to evaluate.
pub fn reciprocal(x: Expr) -> Expr {
    match x {
        Expr::Num(n) => match n.recip() {
            Some(r) => Expr::Num(r),
            None => Expr::Reciprocal(Unary::new(Expr::Num(n))),
        },
        Expr::Reciprocal(inner) => inner.into_operand(),
        Expr::Negation(inner) => negate(reciprocal(inner.into_operand())),
        Expr::Product(p) if p.f().is_num() => {
            let (c, rest) = p.into_operands();
            product(reciprocal(c), reciprocal(rest))
        },
        x => Expr::Reciprocal(Unary::new(x)),
    }
}

/// Creates the quotient `f / g`, i.e. `f * (1 / g)`.
pub fn div(f: Expr, g: Expr) -> Expr {
    product(f, reciprocal(g))
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use crate::symbolic::{num, pi, sin, sym};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fold_numbers() {
        assert_eq!(product(num(2), num(3)), num(6));
        assert_eq!(product(num(rational((2, 3))), num(rational((3, 4)))), num(rational((1, 2))));
        assert_eq!(div(num(1), num(4)), num(0.25));
    }

    #[test]
    fn identities() {
        let x = sym("x");
        assert_eq!(product(x.clone(), num(1)), x);
        assert_eq!(product(num(1), x.clone()), x);
        assert_eq!(product(x.clone(), num(0)), num(0));
        assert_eq!(product(num(0), sin(x.clone())), num(0));
        assert_eq!(product(num(-1), x.clone()), negate(x.clone()));
    }

    #[test]
    fn coefficient_moves_left() {
        let x = sym("x");
        assert_eq!(product(x.clone(), num(3)).to_string(), "( 3 * x )");
        assert_eq!(product(num(2), product(num(3), x.clone())), product(num(6), x.clone()));
        assert_eq!(
            product(product(num(2), x.clone()), sym("y")).to_string(),
            "( 2 * ( x * y ) )",
        );
        assert_eq!(product(num(2), negate(x.clone())), product(num(-2), x.clone()));
    }

    #[test]
    fn cancellation() {
        let x = sym("x");
        let y = sym("y");
        assert_eq!(div(x.clone(), x.clone()), num(1));
        assert_eq!(div(product(x.clone(), y.clone()), y.clone()), x);
        assert_eq!(div(product(x.clone(), y.clone()), x.clone()), y);
        assert_eq!(div(product(num(3), pi()), pi()), num(3));
        assert_eq!(div(pi(), product(num(2), pi())), num(rational((1, 2))));
    }

    #[test]
    fn equal_bases() {
        let x = sym("x");
        assert_eq!(product(x.clone(), x.clone()).to_string(), "( x ^ 2 )");
        assert_eq!(product(product(x.clone(), x.clone()), x.clone()).to_string(), "( x ^ 3 )");
        assert_eq!(
            product(power(x.clone(), num(2)), power(x.clone(), num(3))).to_string(),
            "( x ^ 5 )",
        );
    }

    #[test]
    fn reciprocals() {
        let x = sym("x");
        assert_eq!(reciprocal(num(4)), num(rational((1, 4))));
        assert_eq!(reciprocal(reciprocal(x.clone())), x);
        assert_eq!(reciprocal(num(0)).to_string(), "( 1 / 0 )");
        assert_eq!(reciprocal(negate(x.clone())), negate(reciprocal(x.clone())));
    }
}
