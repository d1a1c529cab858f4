//! Angles in degrees or radians.

use crate::num::Float;

/// An angle in some unit, convertible to radians for use in rotations.
pub trait Angle<F: Float>: Copy {
    /// The value of the angle in radians.
    fn radians(self) -> F;

    /// The value of the angle in degrees.
    fn degrees(self) -> F {
        radians_to_degrees(self.radians())
    }
}

/// An angle in degrees.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Degrees<F>(pub F);

/// An angle in radians.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Radians<F>(pub F);

impl<F: Float> Angle<F> for Degrees<F> {
    #[inline]
    fn radians(self) -> F {
        degrees_to_radians(self.0)
    }

    #[inline]
    fn degrees(self) -> F {
        self.0
    }
}

impl<F: Float> Angle<F> for Radians<F> {
    #[inline]
    fn radians(self) -> F {
        self.0
    }
}

#[inline]
pub fn radians_to_degrees<F: Float>(radians: F) -> F {
    radians * F::DEGREES_PER_RADIAN
}

#[inline]
pub fn degrees_to_radians<F: Float>(degrees: F) -> F {
    degrees * F::RADIANS_PER_DEGREE
}
