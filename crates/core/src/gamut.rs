//! sRGB gamut membership test.

use crate::color::LinearRgb;

/// Returns `true` iff every component of `c` lies in the closed interval
/// [0, 1]. Boundary values are in gamut; NaN components are not.
pub fn is_in_gamut(c: LinearRgb) -> bool {
    let unit = 0.0..=1.0;
    unit.contains(&c.r) && unit.contains(&c.g) && unit.contains(&c.b)
}
