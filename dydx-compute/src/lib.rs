//! A small symbolic expression engine.
//!
//! Expressions are trees of numbers, the constants `pi` and `e`, symbols, the functions `sin`,
//! `cos`, `tan`, `log`, `log2` and `log10`, and sums, products, powers and modulos of them. They
//! can be rendered as text, evaluated numerically, have their symbols substituted, and be
//! differentiated or (for a handful of shapes) integrated symbolically.
//!
//! ```
//! use dydx_compute::symbolic::{cos, pi, sin, sym};
//!
//! let x = sym("x");
//! let f = sin(x.clone());
//! assert_eq!(f.to_string(), "sin( x )");
//! assert_eq!(f.dx(), cos(x.clone()));
//! assert_eq!(f.integrate_dx().unwrap(), -cos(x));
//! assert_eq!(sin(pi() / 2), 1);
//! ```
//!
//! See the [`symbolic`] module for details.

pub mod consts;
pub mod primitive;
pub mod symbolic;
