//! Numeric `f32` constants.

pub use std::f32::consts::*;

pub const TWO_PI: f32 = TAU;
pub const HALF_PI: f32 = FRAC_PI_2;
pub const DEGREES_PER_RADIAN: f32 = 180.0 * FRAC_1_PI;
pub const RADIANS_PER_DEGREE: f32 = PI / 180.0;
