//! Substitution of symbols.

use crate::symbolic::{
    expr::Expr,
    formula::{modulo, negate, power, product, reciprocal, sum},
    functions::{cos, log, log10, log2, sin, tan},
};
use std::{borrow::Borrow, collections::HashMap, hash::Hash};

impl Expr {
    /// Replaces every symbol that appears as a key in `map` with the corresponding expression.
    ///
    /// Symbols missing from `map` are left alone. Every node above a leaf is rebuilt through its
    /// constructor, so the result is simplified again with the substituted values in place:
    ///
    /// ```
    /// use dydx_compute::symbolic::{num, pi, sin, sym};
    /// use std::collections::HashMap;
    ///
    /// let expr = sin(sym("x")) * sym("y");
    /// let map = HashMap::from([("x", pi() / 2)]);
    /// assert_eq!(expr.subst(&map), sym("y"));
    /// ```
    pub fn subst<S>(&self, map: &HashMap<S, Expr>) -> Expr
    where
        S: Borrow<str> + Hash + Eq,
    {
        match self {
            Self::Num(_) | Self::Pi | Self::E => self.clone(),
            Self::Symbol(name) => map.get(name.as_str()).cloned().unwrap_or_else(|| self.clone()),
            Self::Sin(x) => sin(x.operand().subst(map)),
            Self::Cos(x) => cos(x.operand().subst(map)),
            Self::Tan(x) => tan(x.operand().subst(map)),
            Self::Log(x) => log(x.operand().subst(map)),
            Self::Log2(x) => log2(x.operand().subst(map)),
            Self::Log10(x) => log10(x.operand().subst(map)),
            Self::Sum(b) => sum(b.f().subst(map), b.g().subst(map)),
            Self::Product(b) => product(b.f().subst(map), b.g().subst(map)),
            Self::Power(b) => power(b.f().subst(map), b.g().subst(map)),
            Self::Modulo(b) => modulo(b.f().subst(map), b.g().subst(map)),
            Self::Negation(x) => negate(x.operand().subst(map)),
            Self::Reciprocal(x) => reciprocal(x.operand().subst(map)),
        }
    }
}
