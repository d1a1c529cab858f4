//! Numeric `f64` constants.

pub use std::f64::consts::*;

pub const TWO_PI: f64 = TAU;
pub const HALF_PI: f64 = FRAC_PI_2;
pub const DEGREES_PER_RADIAN: f64 = 180.0 * FRAC_1_PI;
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;
