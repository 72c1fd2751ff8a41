//! Arithmetic operators on [`Expr`].
//!
//! Every operator forwards to the matching constructor, so `f + g` builds exactly the same
//! expression as `sum(f, g)`. Host numbers can appear on either side of an operator:
//! `pi() / 2` and `2 * sym("x")` both work.

use crate::symbolic::{consts::zero, expr::Expr};
use rug::Rational;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use super::{div, modulo, negate, power, product, sub, sum};

impl Expr {
    /// Raises the expression to the given power. See [`power`].
    pub fn pow(self, exp: impl Into<Expr>) -> Expr {
        power(self, exp.into())
    }
}

/// Implements a binary operator for every combination of owned and borrowed [`Expr`]s.
macro_rules! expr_op {
    ($trait:ident, $method:ident, $constructor:ident) => {
        impl $trait for Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Self::Output {
                $constructor(self, rhs)
            }
        }

        impl $trait<&Expr> for Expr {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Self::Output {
                $constructor(self, rhs.clone())
            }
        }

        impl $trait<Expr> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: Expr) -> Self::Output {
                $constructor(self.clone(), rhs)
            }
        }

        impl $trait<&Expr> for &Expr {
            type Output = Expr;

            fn $method(self, rhs: &Expr) -> Self::Output {
                $constructor(self.clone(), rhs.clone())
            }
        }
    };
}

/// Implements a binary operator between [`Expr`]s and host numbers, in both directions.
macro_rules! expr_op_primitive {
    ($trait:ident, $method:ident, $constructor:ident, $($ty:ty),*) => {
        $(
            impl $trait<$ty> for Expr {
                type Output = Expr;

                fn $method(self, rhs: $ty) -> Self::Output {
                    $constructor(self, Expr::from(rhs))
                }
            }

            impl $trait<$ty> for &Expr {
                type Output = Expr;

                fn $method(self, rhs: $ty) -> Self::Output {
                    $constructor(self.clone(), Expr::from(rhs))
                }
            }

            impl $trait<Expr> for $ty {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Self::Output {
                    $constructor(Expr::from(self), rhs)
                }
            }

            impl $trait<&Expr> for $ty {
                type Output = Expr;

                fn $method(self, rhs: &Expr) -> Self::Output {
                    $constructor(Expr::from(self), rhs.clone())
                }
            }
        )*
    };
}

/// Implements a compound assignment operator in terms of its constructor.
macro_rules! expr_op_assign {
    ($trait:ident, $method:ident, $constructor:ident) => {
        impl $trait for Expr {
            fn $method(&mut self, rhs: Expr) {
                let lhs = std::mem::replace(self, zero());
                *self = $constructor(lhs, rhs);
            }
        }

        impl $trait<&Expr> for Expr {
            fn $method(&mut self, rhs: &Expr) {
                let lhs = std::mem::replace(self, zero());
                *self = $constructor(lhs, rhs.clone());
            }
        }
    };
}

expr_op!(Add, add, sum);
expr_op!(Sub, sub, sub);
expr_op!(Mul, mul, product);
expr_op!(Div, div, div);
expr_op!(Rem, rem, modulo);

expr_op_primitive!(Add, add, sum, i32, i64, u32, f64, Rational);
expr_op_primitive!(Sub, sub, sub, i32, i64, u32, f64, Rational);
expr_op_primitive!(Mul, mul, product, i32, i64, u32, f64, Rational);
expr_op_primitive!(Div, div, div, i32, i64, u32, f64, Rational);
expr_op_primitive!(Rem, rem, modulo, i32, i64, u32, f64, Rational);

expr_op_assign!(AddAssign, add_assign, sum);
expr_op_assign!(SubAssign, sub_assign, sub);
expr_op_assign!(MulAssign, mul_assign, product);
expr_op_assign!(DivAssign, div_assign, div);

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        negate(self)
    }
}

impl Neg for &Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        negate(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use crate::symbolic::{num, pi, sym};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn operators_match_constructors() {
        let x = sym("x");
        let y = sym("y");
        assert_eq!(&x + &y, sum(x.clone(), y.clone()));
        assert_eq!(&x - &y, sub(x.clone(), y.clone()));
        assert_eq!(&x * &y, product(x.clone(), y.clone()));
        assert_eq!(&x / &y, div(x.clone(), y.clone()));
        assert_eq!(&x % &y, modulo(x.clone(), y.clone()));
        assert_eq!(-&x, negate(x.clone()));
        assert_eq!(x.clone().pow(2), power(x, num(2)));
    }

    #[test]
    fn host_numbers_on_either_side() {
        let x = sym("x");
        assert_eq!(2 * &x, &x * 2);
        assert_eq!((pi() / 2).to_string(), "( ( 1 / 2 ) * pi )");
        assert_eq!(1 - num(3), num(-2));
        assert_eq!(num(1) + 0.5, num(1.5));
        assert_eq!(rational((1, 3)) * num(3), num(1));
        assert_eq!(7u32 % num(4), num(3));
    }

    #[test]
    fn compound_assignment() {
        let mut expr = sym("x");
        expr += sym("x");
        assert_eq!(expr, 2 * sym("x"));
        expr *= num(3);
        assert_eq!(expr, 6 * sym("x"));
        expr -= 6 * sym("x");
        assert_eq!(expr, num(0));
        expr += num(4);
        expr /= num(8);
        assert_eq!(expr, num(rational((1, 2))));
    }
}
