//! Numeric constants used when evaluating expressions. This module consists of static constants
//! that return [`Float`]s with the given value.

use once_cell::sync::Lazy;
use rug::Float;
use super::primitive::float;

/// Euler's number.
pub static E: Lazy<Float> = Lazy::new(|| float(1).exp());

pub static PI: Lazy<Float> = Lazy::new(|| float(-1).acos());

/// Positive infinity.
pub static INFINITY: Lazy<Float> = Lazy::new(|| float(rug::float::Special::Infinity));
