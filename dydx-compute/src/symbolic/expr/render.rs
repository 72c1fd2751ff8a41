//! Rendering of expressions as text.
//!
//! Leaves render as themselves (`2`, `pi`, `e`, `x`), functions render as `sin( x )`, and
//! formula nodes are always fully parenthesized: `( f + g )`, `( f * g )`, `( f ^ g )`,
//! `( f % g )`, `( - x )` and `( 1 / x )`. The output is meant for display only.

use std::{fmt::{self, Write}, ops::Range};
use super::Expr;

/// A writer that tracks how many bytes have been written, and records the byte range of a single
/// target node while it is being rendered.
struct SpanWriter<'e, W> {
    inner: W,
    pos: usize,
    target: Option<&'e Expr>,
    span: Option<Range<usize>>,
}

impl<W: Write> Write for SpanWriter<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.pos += s.len();
        self.inner.write_str(s)
    }
}

impl<'e, W: Write> SpanWriter<'e, W> {
    fn new(inner: W, target: Option<&'e Expr>) -> Self {
        Self { inner, pos: 0, target, span: None }
    }

    /// Writes a function call, such as `sin( x )`.
    fn call(&mut self, name: &str, arg: &Expr) -> fmt::Result {
        write!(self, "{}( ", name)?;
        self.expr(arg)?;
        write!(self, " )")
    }

    /// Writes a parenthesized binary formula, such as `( f + g )`.
    fn formula(&mut self, f: &Expr, op: &str, g: &Expr) -> fmt::Result {
        write!(self, "( ")?;
        self.expr(f)?;
        write!(self, " {} ", op)?;
        self.expr(g)?;
        write!(self, " )")
    }

    fn expr(&mut self, expr: &Expr) -> fmt::Result {
        let start = self.pos;
        match expr {
            Expr::Num(n) => write!(self, "{}", n)?,
            Expr::Pi => write!(self, "pi")?,
            Expr::E => write!(self, "e")?,
            Expr::Symbol(name) => write!(self, "{}", name)?,
            Expr::Sin(x) => self.call("sin", x.operand())?,
            Expr::Cos(x) => self.call("cos", x.operand())?,
            Expr::Tan(x) => self.call("tan", x.operand())?,
            Expr::Log(x) => self.call("log", x.operand())?,
            Expr::Log2(x) => self.call("log2", x.operand())?,
            Expr::Log10(x) => self.call("log10", x.operand())?,
            Expr::Sum(b) => self.formula(b.f(), "+", b.g())?,
            Expr::Product(b) => self.formula(b.f(), "*", b.g())?,
            Expr::Power(b) => self.formula(b.f(), "^", b.g())?,
            Expr::Modulo(b) => self.formula(b.f(), "%", b.g())?,
            Expr::Negation(x) => {
                write!(self, "( - ")?;
                self.expr(x.operand())?;
                write!(self, " )")?;
            },
            Expr::Reciprocal(x) => {
                write!(self, "( 1 / ")?;
                self.expr(x.operand())?;
                write!(self, " )")?;
            },
        }

        if self.span.is_none() && self.target.is_some_and(|target| std::ptr::eq(target, expr)) {
            self.span = Some(start..self.pos);
        }
        Ok(())
    }
}

/// Writes the rendered form of `expr` into `w`.
pub(crate) fn write_expr<W: Write>(w: W, expr: &Expr) -> fmt::Result {
    SpanWriter::new(w, None).expr(expr)
}

/// Renders `root`, returning the text along with the byte range that `target` occupies in it.
///
/// `target` is compared by **address**, so it must be a reference to a node inside `root` (or
/// `root` itself) for a span to be found.
pub(crate) fn render_with_span(root: &Expr, target: &Expr) -> (String, Option<Range<usize>>) {
    let mut writer = SpanWriter::new(String::new(), Some(target));
    // writing into a `String` cannot fail
    let _ = writer.expr(root);
    (writer.inner, writer.span)
}

#[cfg(test)]
mod tests {
    use crate::primitive::rational;
    use crate::symbolic::{cos, e, log, log10, log2, num, pi, sin, sym, tan, Expr};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn leaves() {
        assert_eq!(num(2).to_string(), "2");
        assert_eq!(num(rational((1, 2))).to_string(), "( 1 / 2 )");
        assert_eq!(pi().to_string(), "pi");
        assert_eq!(e().to_string(), "e");
        assert_eq!(sym("x").to_string(), "x");
    }

    #[test]
    fn functions() {
        assert_eq!(sin(sym("x")).to_string(), "sin( x )");
        assert_eq!(cos(sym("x")).to_string(), "cos( x )");
        assert_eq!(tan(sym("x")).to_string(), "tan( x )");
        assert_eq!(log(sym("x")).to_string(), "log( x )");
        assert_eq!(log2(sym("x")).to_string(), "log2( x )");
        assert_eq!(log10(sym("x")).to_string(), "log10( x )");
    }

    #[test]
    fn formulas() {
        let x = sym("x");
        let y = sym("y");
        assert_eq!((x.clone() + y.clone()).to_string(), "( x + y )");
        assert_eq!((x.clone() * y.clone()).to_string(), "( x * y )");
        assert_eq!(x.clone().pow(y.clone()).to_string(), "( x ^ y )");
        assert_eq!((x.clone() % y.clone()).to_string(), "( x % y )");
        assert_eq!((-x.clone()).to_string(), "( - x )");
        assert_eq!((num(1) / x.clone()).to_string(), "( 1 / x )");
        assert_eq!(sin(x.clone() * y).to_string(), "sin( ( x * y ) )");
    }

    #[test]
    fn span_of_nested_node() {
        let expr = sin(sym("x")) + cos(sym("y"));
        let Expr::Sum(sum) = &expr else {
            panic!("expected a sum, got {}", expr);
        };
        let Expr::Cos(cos) = sum.g() else {
            panic!("expected cos, got {}", sum.g());
        };

        let (text, span) = render_with_span(&expr, cos.operand());
        assert_eq!(text, "( sin( x ) + cos( y ) )");
        let span = span.unwrap();
        assert_eq!(&text[span], "y");

        let (_, span) = render_with_span(&expr, &expr);
        assert_eq!(span, Some(0..text.len()));
    }

    #[test]
    fn span_of_foreign_node_is_none() {
        let expr = sin(sym("x"));
        let other = sym("x");
        let (_, span) = render_with_span(&expr, &other);
        assert_eq!(span, None);
    }
}
