//! Powers and modulos.

use crate::symbolic::{
    consts::{one, zero},
    expr::{Binary, Expr},
};
use super::multiply::product;

/// Creates the power `f ^ g`.
///
/// Numeric literals are folded when the result can be computed ([`Number::checked_pow`]), a zero
/// exponent or a base of one gives `1`, an exponent of one gives the base, and nested powers are
/// merged (`(x ^ 2) ^ 3 = x ^ 6`).
///
/// [`Number::checked_pow`]: crate::symbolic::number::Number::checked_pow
pub fn power(f: Expr, g: Expr) -> Expr {
    if g.is_zero() || f.is_one() {
        return one();
    }
    if g.is_one() {
        return f;
    }

    match (f, g) {
        (Expr::Num(a), Expr::Num(b)) => match a.checked_pow(&b) {
            Some(n) => Expr::Num(n),
            None => Expr::Power(Binary::new(Expr::Num(a), Expr::Num(b))),
        },
        (Expr::Power(p), g) => {
            let (base, exp) = p.into_operands();
            power(base, product(exp, g))
        },
        (f, g) => Expr::Power(Binary::new(f, g)),
    }
}

/// Creates the floored modulo `f % g`, whose result takes the sign of `g`.
///
/// Numeric literals are folded unless `g` is zero, and `0 % g` is `0`.
pub fn modulo(f: Expr, g: Expr) -> Expr {
    match (f, g) {
        (Expr::Num(a), Expr::Num(b)) => match a.checked_rem(&b) {
            Some(n) => Expr::Num(n),
            None => Expr::Modulo(Binary::new(Expr::Num(a), Expr::Num(b))),
        },
        (f, _) if f.is_zero() => zero(),
        (f, g) => Expr::Modulo(Binary::new(f, g)),
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use crate::symbolic::{num, pi, sym};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn fold_numbers() {
        assert_eq!(power(num(2), num(10)), num(1024));
        assert_eq!(power(num(2), num(-2)), num(rational((1, 4))));
        assert_eq!(power(num(9.0), num(0.5)), num(3));
    }

    #[test]
    fn inexact_powers_are_kept() {
        assert_eq!(power(num(2), num(rational((1, 2)))).to_string(), "( 2 ^ ( 1 / 2 ) )");
        assert_eq!(power(num(0), num(-1)).to_string(), "( 0 ^ -1 )");
    }

    #[test]
    fn identities() {
        let x = sym("x");
        assert_eq!(power(x.clone(), num(0)), num(1));
        assert_eq!(power(x.clone(), num(1)), x);
        assert_eq!(power(num(1), x.clone()), num(1));
        assert_eq!(power(pi(), num(1)), pi());
    }

    #[test]
    fn nested_powers() {
        let x = sym("x");
        assert_eq!(power(power(x.clone(), num(2)), num(3)), power(x.clone(), num(6)));
        assert_eq!(power(power(num(2), num(rational((1, 2)))), num(2)), num(2));
    }

    #[test]
    fn floored_modulo() {
        assert_eq!(modulo(num(7), num(3)), num(1));
        assert_eq!(modulo(num(-7), num(3)), num(2));
        assert_eq!(modulo(num(7), num(-3)), num(-2));
        assert_eq!(modulo(num(5.5), num(2)), num(1.5));
        assert_eq!(modulo(num(0), sym("x")), num(0));
        assert_eq!(modulo(num(1), num(0)).to_string(), "( 1 % 0 )");
        assert_eq!(modulo(sym("x"), num(2)).to_string(), "( x % 2 )");
    }
}
