//! Exact values of `sin` and `cos` at the quarter turns of the unit circle.

use crate::primitive::rational;
use crate::symbolic::{expr::Expr, number::Number};
use once_cell::sync::Lazy;

/// The outputs of `sin` and `cos` at one of the angles in [`TABLE`].
#[derive(Debug)]
pub struct TrigOut {
    pub sin: Expr,
    pub cos: Expr,
}

/// Angles are stored as their quotient by `pi`, reduced into `[0, 2)`. So `1/2` stands for
/// `pi / 2 rad` (90 deg), and `3/2` stands for `3pi / 2 rad` (270 deg).
static TABLE: Lazy<[(Number, TrigOut); 4]> = Lazy::new(|| [
    // 0 rad = 0 deg
    (Number::from(0), TrigOut { sin: Expr::from(0), cos: Expr::from(1) }),
    // pi/2 rad = 90 deg
    (Number::from(rational((1, 2))), TrigOut { sin: Expr::from(1), cos: Expr::from(0) }),
    // pi rad = 180 deg
    (Number::from(1), TrigOut { sin: Expr::from(0), cos: Expr::from(-1) }),
    // 3pi/2 rad = 270 deg
    (Number::from(rational((3, 2))), TrigOut { sin: Expr::from(-1), cos: Expr::from(0) }),
]);

/// Looks up the outputs for the given reduced angle.
pub fn lookup(reduced: &Number) -> Option<&'static TrigOut> {
    TABLE.iter()
        .find(|(angle, _)| angle == reduced)
        .map(|(_, out)| out)
}
