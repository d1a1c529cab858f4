//! Numbers and numerics.

use num_traits as nt;
use std::fmt;

/// Gathers traits useful for working with generic floating point types.
pub trait Float:
    nt::Float
    + nt::FromPrimitive
    + approx::AbsDiffEq<Epsilon = Self>
    + approx::RelativeEq
    + fmt::Debug
    + fmt::Display
    + Default
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    const NEG_ONE: Self;
    const PI: Self;
    const TWO_PI: Self;
    const DEGREES_PER_RADIAN: Self;
    const RADIANS_PER_DEGREE: Self;
    /// The difference between `1.0` and the next larger representable number.
    /// Serves as the near-zero threshold for length, divisor and determinant
    /// checks.
    const EPSILON: Self;
}

macro_rules! impl_float {
    ($f:tt) => {
        impl Float for $f {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const NEG_ONE: Self = -1.0;
            const PI: Self = std::$f::consts::PI;
            const TWO_PI: Self = std::$f::consts::TAU;
            const DEGREES_PER_RADIAN: Self = 180.0 * std::$f::consts::FRAC_1_PI;
            const RADIANS_PER_DEGREE: Self = std::$f::consts::PI / 180.0;
            const EPSILON: Self = $f::EPSILON;
        }
    };
}

impl_float!(f32);
impl_float!(f64);
