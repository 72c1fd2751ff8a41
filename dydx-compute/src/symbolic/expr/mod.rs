//! The expression tree.
//!
//! An [`Expr`] is an immutable tree of numeric literals, the constants `pi` and `e`, named
//! symbols, the unary functions `sin`, `cos`, `tan`, `log`, `log2` and `log10`, and the formula
//! nodes (sums, products, powers, modulos, negations and reciprocals).
//!
//! # Construction
//!
//! Leaves can be built directly ([`Expr::Symbol`], [`Expr::Pi`], or any number through
//! [`From`]). Nodes with operands are created through the module-level constructor functions,
//! such as [`sin`](crate::symbolic::sin) or [`product`](crate::symbolic::product), or through the
//! arithmetic operators on [`Expr`]. Their operands are wrapped in [`Unary`] and [`Binary`], whose
//! fields and constructors are private to this crate, so a new operand wrapper can only come out
//! of a constructor function.
//!
//! Constructors apply their simplification rules eagerly, so a freshly constructed expression
//! never contains a node that a rule could have collapsed. For example, the `log` constructor
//! rewrites the logarithm of a product into a sum of logarithms immediately.
//!
//! The wrappers are not tied to the variant they were built for. Moving one out of a node and into
//! another variant of the same arity skips that variant's rules:
//!
//! ```
//! use dydx_compute::symbolic::{sin, sym, Expr};
//!
//! // `Log` around a product, which `log` itself would never build
//! if let Expr::Sin(u) = sin(sym("x") * sym("y")) {
//!     let moved = Expr::Log(u);
//!     assert_eq!(moved.to_string(), "log( ( x * y ) )");
//! }
//! ```
//!
//! Rebuild through the constructor functions instead (e.g. `log(u.into_operand())`) to keep the
//! rules applied.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation is structural. Numeric literals compare by value (so `1/2`
//! equals `0.5`), symbols compare by name, and every other node compares by kind and operands.
//! Structural equality is not semantic equality: `x + y` and `y + x` are **not** equal.

mod iter;
mod render;

use crate::symbolic::{error::InvalidNumericConversion, number::Number};
use dydx_error::Error;
use rug::{Float, Integer, Rational};
use std::fmt;

pub use iter::ExprIter;
pub(crate) use render::render_with_span;

/// A node with a single operand, such as `sin(x)` or `-x`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unary(Box<Expr>);

impl Unary {
    pub(crate) fn new(operand: Expr) -> Self {
        Self(Box::new(operand))
    }

    /// Returns the operand.
    pub fn operand(&self) -> &Expr {
        &self.0
    }

    /// Returns the operand, consuming the node.
    pub fn into_operand(self) -> Expr {
        *self.0
    }
}

/// A node with two operands, such as `f + g` or `f ^ g`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Binary {
    f: Box<Expr>,
    g: Box<Expr>,
}

impl Binary {
    pub(crate) fn new(f: Expr, g: Expr) -> Self {
        Self { f: Box::new(f), g: Box::new(g) }
    }

    /// Returns the left operand.
    pub fn f(&self) -> &Expr {
        &self.f
    }

    /// Returns the right operand.
    pub fn g(&self) -> &Expr {
        &self.g
    }

    /// Returns both operands, consuming the node.
    pub fn into_operands(self) -> (Expr, Expr) {
        (*self.f, *self.g)
    }
}

/// The operator of a formula node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Operator {
    /// Addition, `f + g`.
    Add,

    /// Multiplication, `f * g`.
    Mul,

    /// Exponentiation, `f ^ g`.
    Pow,

    /// Floored modulo, `f % g`.
    Mod,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add => write!(f, "+"),
            Self::Mul => write!(f, "*"),
            Self::Pow => write!(f, "^"),
            Self::Mod => write!(f, "%"),
        }
    }
}

/// A symbolic expression.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Expr {
    /// A numeric literal, such as `2`, `1/3` or `0.5`.
    Num(Number),

    /// The constant `pi`.
    Pi,

    /// Euler's number, `e`.
    E,

    /// A named symbol, such as `x`.
    Symbol(String),

    /// `sin(x)`
    Sin(Unary),

    /// `cos(x)`
    Cos(Unary),

    /// `tan(x)`
    Tan(Unary),

    /// The natural logarithm, `log(x)`.
    Log(Unary),

    /// `log2(x)`
    Log2(Unary),

    /// `log10(x)`
    Log10(Unary),

    /// `f + g`
    Sum(Binary),

    /// `f * g`
    Product(Binary),

    /// `f ^ g`
    Power(Binary),

    /// `f % g`
    Modulo(Binary),

    /// `-x`
    Negation(Unary),

    /// `1 / x`
    Reciprocal(Unary),
}

impl Expr {
    /// Returns a short, human-readable name for the kind of node this is.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Num(_) => "number",
            Self::Pi => "pi",
            Self::E => "e",
            Self::Symbol(_) => "symbol",
            Self::Sin(_) => "sin",
            Self::Cos(_) => "cos",
            Self::Tan(_) => "tan",
            Self::Log(_) => "log",
            Self::Log2(_) => "log2",
            Self::Log10(_) => "log10",
            Self::Sum(_) => "sum",
            Self::Product(_) => "product",
            Self::Power(_) => "power",
            Self::Modulo(_) => "modulo",
            Self::Negation(_) => "negation",
            Self::Reciprocal(_) => "reciprocal",
        }
    }

    /// Returns true if the expression is a numeric literal.
    pub fn is_num(&self) -> bool {
        matches!(self, Self::Num(_))
    }

    /// If the expression is a numeric literal, returns a reference to the contained number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Num(n) => Some(n),
            _ => None,
        }
    }

    /// If the expression is a numeric literal, returns the contained number.
    pub fn into_number(self) -> Option<Number> {
        match self {
            Self::Num(n) => Some(n),
            _ => None,
        }
    }

    /// Returns true if the expression is the numeric literal zero.
    pub fn is_zero(&self) -> bool {
        self.as_number().is_some_and(Number::is_zero)
    }

    /// Returns true if the expression is the numeric literal one (the multiplicative identity).
    pub fn is_one(&self) -> bool {
        self.as_number().is_some_and(Number::is_one)
    }

    /// Returns true if the expression is the numeric literal negative one.
    pub fn is_minus_one(&self) -> bool {
        self.as_number().is_some_and(|n| *n == -1)
    }

    /// If the expression is a [`Expr::Symbol`], returns the name of the symbol.
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// Returns true if the expression is exactly the symbol with the given name.
    pub fn is_symbol(&self, name: &str) -> bool {
        self.as_symbol() == Some(name)
    }

    /// If the expression is a formula node ([`Expr::Sum`], [`Expr::Product`], [`Expr::Power`], or
    /// [`Expr::Modulo`]), returns its operator.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Sum(_) => Some(Operator::Add),
            Self::Product(_) => Some(Operator::Mul),
            Self::Power(_) => Some(Operator::Pow),
            Self::Modulo(_) => Some(Operator::Mod),
            _ => None,
        }
    }

    /// Returns true if the expression is a formula node with the given operator.
    pub fn is_formula(&self, op: Operator) -> bool {
        self.operator() == Some(op)
    }

    /// If the expression is a formula node, returns its left and right operands.
    pub fn operands(&self) -> Option<(&Expr, &Expr)> {
        match self {
            Self::Sum(b) | Self::Product(b) | Self::Power(b) | Self::Modulo(b) => Some((b.f(), b.g())),
            _ => None,
        }
    }

    /// Returns true if the symbol with the given name appears anywhere in the expression.
    pub fn contains_symbol(&self, name: &str) -> bool {
        self.post_order_iter().any(|expr| expr.is_symbol(name))
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render::write_expr(f, self)
    }
}

/// Creates a symbol with the given name.
pub fn sym(name: impl Into<String>) -> Expr {
    Expr::Symbol(name.into())
}

/// Creates a numeric literal with the given value.
pub fn num(n: impl Into<Number>) -> Expr {
    Expr::Num(n.into())
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Self::Num(n)
    }
}

macro_rules! expr_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(n: $ty) -> Self {
                    Self::Num(Number::from(n))
                }
            }

            impl PartialEq<$ty> for Expr {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_number().is_some_and(|n| *n == Number::from(other.clone()))
                }
            }
        )*
    };
}

expr_from_number!(i32, i64, u32, f64, Integer, Rational, Float);

/// Converts a numeric literal into its [`Number`].
///
/// Fails with [`InvalidNumericConversion`] if the expression is anything other than a numeric
/// literal, including the constants `pi` and `e`, which have no exact numeric representation.
impl TryFrom<&Expr> for Number {
    type Error = Error;

    fn try_from(expr: &Expr) -> Result<Self, Self::Error> {
        match expr {
            Expr::Num(n) => Ok(n.clone()),
            other => {
                let len = other.to_string().len();
                Err(Error::new(vec![0..len], InvalidNumericConversion { found: other.kind_name() }))
            },
        }
    }
}

/// Converts a numeric literal into an [`f64`]. See the [`TryFrom<&Expr>`] implementation for
/// [`Number`].
impl TryFrom<&Expr> for f64 {
    type Error = Error;

    fn try_from(expr: &Expr) -> Result<Self, Self::Error> {
        Number::try_from(expr).map(|n| n.to_f64())
    }
}
