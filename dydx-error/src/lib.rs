//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Errors raised by the symbolic engine do not come from parsed source code. Instead, their spans
//! index into the **rendered text** of the expression the failing operation was called on, so a
//! report can point at the exact sub-expression (such as a free symbol) that caused the failure.

// lets `#[derive(ErrorKind)]` refer to `dydx_error` from inside this crate's own tests
extern crate self as dydx_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns `self` as [`Any`], so the concrete kind of error can be recovered.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of a rendered expression that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the rendered expression that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the kind of this error as `T`, if it is one.
    pub fn kind_as<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if the kind of this error is `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.kind_as::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, using `src` as the text the spans point into.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src: &str) {
        let report = self.build_report("expr");
        if let Err(err) = report.eprint(("expr", Source::from(src))) {
            eprintln!("failed to print error report: {}", err);
        }
    }

    /// Writes the report for this error into a [`String`], using `src` as the text the spans
    /// point into. The output contains ANSI color codes.
    pub fn report_to_string(&self, src: &str) -> String {
        let mut buf = Vec::new();
        let report = self.build_report("expr");
        match report.write(("expr", Source::from(src)), &mut buf) {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(err) => format!("failed to write error report: {}", err),
        }
    }
}
