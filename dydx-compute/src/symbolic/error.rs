use ariadne::Fmt;
use dydx_attrs::ErrorKind;
use dydx_error::EXPR;

/// A symbol was reached during evaluation. Symbols have no numeric value of their own; they must
/// be substituted before the expression can be evaluated.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate the symbol `{}`", self.name),
    labels = ["this symbol has no value"],
    help = format!(
        "substitute a value for `{}` with `{}` before evaluating",
        (&self.name).fg(EXPR),
        "Expr::subst".fg(EXPR),
    ),
)]
pub struct UnevaluableSymbol {
    /// The name of the symbol.
    pub name: String,
}

/// The integrand (or part of it) has no antiderivative rule.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot integrate an expression of kind `{}`", self.kind),
    labels = ["no antiderivative rule applies here"],
    help = format!(
        "only numbers, {}, {}, symbols, {} and {} can be integrated with respect to `{}`",
        "pi".fg(EXPR),
        "e".fg(EXPR),
        "sin".fg(EXPR),
        "cos".fg(EXPR),
        (&self.with).fg(EXPR),
    ),
)]
pub struct UnsupportedIntegrand {
    /// The symbol of integration.
    pub with: String,

    /// The kind of the expression that could not be integrated.
    pub kind: &'static str,
}

/// An expression that is not a numeric literal was converted into a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a numeric literal",
    labels = [format!("this is a {}", self.found)],
    help = "use `eval` to compute the value of a non-literal expression",
)]
pub struct InvalidNumericConversion {
    /// The kind of expression that was found instead.
    pub found: &'static str,
}
