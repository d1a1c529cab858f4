//! Generic 3D vectors and 4x4 affine transform matrices.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod angle;
pub mod consts;
pub mod matrix;
pub mod num;
pub mod vector;

pub use angle::{Angle, Degrees, Radians};
pub use matrix::{Matrix3D, Matrix3Dd, Matrix3Df, transform_vector};
pub use num::Float;
pub use vector::{Vector3D, Vector3Dd, Vector3Df};
