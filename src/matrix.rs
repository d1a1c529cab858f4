//! Matrices.

use crate::{
    angle::{Angle, Degrees},
    num::Float,
    vector::Vector3D,
};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 4x4 matrix representing an affine transform in homogeneous coordinates.
///
/// Elements are stored row-major and indexed as `(row, column)`. Vectors are
/// treated as rows multiplied from the left, so the upper-left 3x3 block holds
/// the linear part (rotation and scaling) and the fourth row holds the
/// translation. Composing transforms with `a * b` yields the transform that
/// applies `a` first and `b` second.
///
/// A newly created matrix is the identity. The named transform operations
/// ([`translate`](Self::translate), [`scale`](Self::scale),
/// [`rotate_x`](Self::rotate_x) and friends) right-multiply the matrix by the
/// corresponding elementary transform.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix3D<T> {
    data: [[T; 4]; 4],
}

pub type Matrix3Df = Matrix3D<f32>;
pub type Matrix3Dd = Matrix3D<f64>;

// SAFETY: `Matrix3D` is `repr(C)` around a nested array of `T`, so it has no
// padding and every bit pattern valid for `T` is valid for the matrix.
unsafe impl<T: Zeroable> Zeroable for Matrix3D<T> {}
unsafe impl<T: Pod> Pod for Matrix3D<T> {}

/// Transforms the given vector by the given matrix.
///
/// The vector is treated as the homogeneous row `(x, y, z, 1)` and the
/// fourth column of the matrix is assumed to be `(0, 0, 0, 1)`, so
///
/// `result.x = x * m(0, 0) + y * m(1, 0) + z * m(2, 0) + m(3, 0)`
///
/// and analogously for `y` and `z` with columns 1 and 2.
///
/// All forms of vector-matrix multiplication (`vector * matrix`,
/// `matrix * vector` and `vector *= matrix`) delegate to this function.
#[inline]
pub fn transform_vector<F: Float>(vector: &Vector3D<F>, matrix: &Matrix3D<F>) -> Vector3D<F> {
    let m = &matrix.data;
    let (x, y, z) = (vector.x(), vector.y(), vector.z());
    Vector3D::new(
        x * m[0][0] + y * m[1][0] + z * m[2][0] + m[3][0],
        x * m[0][1] + y * m[1][1] + z * m[2][1] + m[3][1],
        x * m[0][2] + y * m[1][2] + z * m[2][2] + m[3][2],
    )
}

impl<T: Copy> Matrix3D<T> {
    /// Creates a matrix by copying the given table of rows.
    #[inline]
    pub const fn from_table(table: [[T; 4]; 4]) -> Self {
        Self { data: table }
    }

    /// Returns a copy of the matrix elements as a table of rows.
    #[inline]
    pub const fn data(&self) -> [[T; 4]; 4] {
        self.data
    }

    /// Returns a copy of the given row.
    ///
    /// # Panics
    /// If `i` is not in `0..4`.
    #[inline]
    pub const fn row(&self, i: usize) -> [T; 4] {
        self.data[i]
    }

    /// Returns the element in row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not in `0..4`.
    #[inline]
    pub const fn element(&self, i: usize, j: usize) -> T {
        self.data[i][j]
    }

    /// Returns a mutable reference to the element in row `i` and column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is not in `0..4`.
    #[inline]
    pub fn element_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data[i][j]
    }
}

impl<F: Float> Matrix3D<F> {
    /// Creates the identity matrix.
    #[inline]
    pub const fn new() -> Self {
        Self::identity()
    }

    /// Creates the identity matrix.
    #[inline]
    pub const fn identity() -> Self {
        let mut data = [[F::ZERO; 4]; 4];
        data[0][0] = F::ONE;
        data[1][1] = F::ONE;
        data[2][2] = F::ONE;
        data[3][3] = F::ONE;
        Self { data }
    }

    /// Creates a matrix with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self {
            data: [[F::ZERO; 4]; 4],
        }
    }

    /// Creates the elementary transform translating by the given offsets.
    #[inline]
    pub const fn from_translation(dx: F, dy: F, dz: F) -> Self {
        let mut m = Self::identity();
        m.data[3][0] = dx;
        m.data[3][1] = dy;
        m.data[3][2] = dz;
        m
    }

    /// Creates the elementary transform scaling by the given factor along
    /// each axis.
    #[inline]
    pub const fn from_scaling(sx: F, sy: F, sz: F) -> Self {
        let mut m = Self::identity();
        m.data[0][0] = sx;
        m.data[1][1] = sy;
        m.data[2][2] = sz;
        m
    }

    /// Creates the elementary transform rotating by the given angle in
    /// radians about the x-axis.
    pub fn from_rotation_x(angle: F) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.data[1][1] = c;
        m.data[1][2] = s;
        m.data[2][1] = -s;
        m.data[2][2] = c;
        m
    }

    /// Creates the elementary transform rotating by the given angle in
    /// radians about the y-axis.
    pub fn from_rotation_y(angle: F) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.data[0][0] = c;
        m.data[2][0] = s;
        m.data[0][2] = -s;
        m.data[2][2] = c;
        m
    }

    /// Creates the elementary transform rotating by the given angle in
    /// radians about the z-axis.
    pub fn from_rotation_z(angle: F) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Self::identity();
        m.data[0][0] = c;
        m.data[0][1] = s;
        m.data[1][0] = -s;
        m.data[1][1] = c;
        m
    }

    /// Resets the matrix to the identity.
    #[inline]
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Applies a translation by `dx` and `dy` after the current transform.
    ///
    /// Only the x- and y-offsets are written into the elementary translation,
    /// so `dz` has no effect. Existing callers depend on this. Use
    /// [`translate_xyz`](Self::translate_xyz) to translate along all three
    /// axes.
    pub fn translate(&mut self, dx: F, dy: F, dz: F) {
        if !dz.is_zero() {
            log::debug!("Ignoring z-offset {dz} of translation, use `translate_xyz` to apply it");
        }
        let mut translation = Self::identity();
        translation.data[3][0] = dx;
        translation.data[3][1] = dy;
        *self *= translation;
    }

    /// Applies a translation by the given offsets along all three axes after
    /// the current transform.
    #[inline]
    pub fn translate_xyz(&mut self, dx: F, dy: F, dz: F) {
        *self *= Self::from_translation(dx, dy, dz);
    }

    /// Applies a scaling by the given factor along each axis after the current
    /// transform.
    #[inline]
    pub fn scale(&mut self, sx: F, sy: F, sz: F) {
        *self *= Self::from_scaling(sx, sy, sz);
    }

    /// Applies a rotation by the given angle in radians about the x-axis after
    /// the current transform.
    #[inline]
    pub fn rotate_x(&mut self, angle: F) {
        *self *= Self::from_rotation_x(angle);
    }

    /// Applies a rotation by the given angle in radians about the y-axis after
    /// the current transform.
    #[inline]
    pub fn rotate_y(&mut self, angle: F) {
        *self *= Self::from_rotation_y(angle);
    }

    /// Applies a rotation by the given angle in radians about the z-axis after
    /// the current transform.
    #[inline]
    pub fn rotate_z(&mut self, angle: F) {
        *self *= Self::from_rotation_z(angle);
    }

    #[inline]
    pub fn rotate_degrees_x(&mut self, angle: F) {
        self.rotate_x_by(Degrees(angle));
    }

    #[inline]
    pub fn rotate_degrees_y(&mut self, angle: F) {
        self.rotate_y_by(Degrees(angle));
    }

    #[inline]
    pub fn rotate_degrees_z(&mut self, angle: F) {
        self.rotate_z_by(Degrees(angle));
    }

    /// Applies a rotation by the given angle, in any unit, about the x-axis
    /// after the current transform.
    #[inline]
    pub fn rotate_x_by<A: Angle<F>>(&mut self, angle: A) {
        self.rotate_x(angle.radians());
    }

    /// Applies a rotation by the given angle, in any unit, about the y-axis
    /// after the current transform.
    #[inline]
    pub fn rotate_y_by<A: Angle<F>>(&mut self, angle: A) {
        self.rotate_y(angle.radians());
    }

    /// Applies a rotation by the given angle, in any unit, about the z-axis
    /// after the current transform.
    #[inline]
    pub fn rotate_z_by<A: Angle<F>>(&mut self, angle: A) {
        self.rotate_z(angle.radians());
    }

    /// Computes the transpose of the matrix.
    pub fn transposed(&self) -> Self {
        let mut transposed = *self;
        for i in 0..4 {
            for j in 0..4 {
                transposed.data[j][i] = self.data[i][j];
            }
        }
        transposed
    }

    /// Computes the determinant of the matrix.
    pub fn determinant(&self) -> F {
        let (s, c) = self.laplace_minors();
        determinant_from_minors(&s, &c)
    }

    /// Computes the inverse of the matrix.
    ///
    /// Unless the determinant is strictly greater than the machine epsilon of
    /// the element type, the matrix is treated as non-invertible and the
    /// identity matrix is returned. This includes every matrix with a negative
    /// determinant, such as reflections. Use
    /// [`try_inverse`](Self::try_inverse) to detect non-invertible matrices
    /// instead.
    pub fn inverse(&self) -> Self {
        let (s, c) = self.laplace_minors();
        let determinant = determinant_from_minors(&s, &c);

        if determinant > F::EPSILON {
            let mut inverse = self.adjugate_from_minors(&s, &c);
            inverse /= determinant;
            inverse
        } else {
            log::debug!(
                "Using identity as inverse of matrix with non-positive determinant {determinant}"
            );
            Self::identity()
        }
    }

    /// Computes the inverse of the matrix, or returns [`None`] if the absolute
    /// value of the determinant does not exceed the machine epsilon of the
    /// element type.
    pub fn try_inverse(&self) -> Option<Self> {
        let (s, c) = self.laplace_minors();
        let determinant = determinant_from_minors(&s, &c);

        if determinant.abs() > F::EPSILON {
            let mut inverse = self.adjugate_from_minors(&s, &c);
            inverse /= determinant;
            Some(inverse)
        } else {
            None
        }
    }

    /// Computes the 2x2 minors of the upper two rows (`s`) and of the lower
    /// two rows (`c`) used in the Laplace expansion of the determinant and
    /// adjugate.
    fn laplace_minors(&self) -> ([F; 6], [F; 6]) {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.data;

        let s = [
            a00 * a11 - a10 * a01,
            a00 * a12 - a10 * a02,
            a00 * a13 - a10 * a03,
            a01 * a12 - a11 * a02,
            a01 * a13 - a11 * a03,
            a02 * a13 - a12 * a03,
        ];
        let c = [
            a20 * a31 - a30 * a21,
            a20 * a32 - a30 * a22,
            a20 * a33 - a30 * a23,
            a21 * a32 - a31 * a22,
            a21 * a33 - a31 * a23,
            a22 * a33 - a32 * a23,
        ];
        (s, c)
    }

    fn adjugate_from_minors(&self, s: &[F; 6], c: &[F; 6]) -> Self {
        let [
            [a00, a01, a02, a03],
            [a10, a11, a12, a13],
            [a20, a21, a22, a23],
            [a30, a31, a32, a33],
        ] = self.data;

        Self::from_table([
            [
                a11 * c[5] - a12 * c[4] + a13 * c[3],
                -a01 * c[5] + a02 * c[4] - a03 * c[3],
                a31 * s[5] - a32 * s[4] + a33 * s[3],
                -a21 * s[5] + a22 * s[4] - a23 * s[3],
            ],
            [
                -a10 * c[5] + a12 * c[2] - a13 * c[1],
                a00 * c[5] - a02 * c[2] + a03 * c[1],
                -a30 * s[5] + a32 * s[2] - a33 * s[1],
                a20 * s[5] - a22 * s[2] + a23 * s[1],
            ],
            [
                a10 * c[4] - a11 * c[2] + a13 * c[0],
                -a00 * c[4] + a01 * c[2] - a03 * c[0],
                a30 * s[4] - a31 * s[2] + a33 * s[0],
                -a20 * s[4] + a21 * s[2] - a23 * s[0],
            ],
            [
                -a10 * c[3] + a11 * c[1] - a12 * c[0],
                a00 * c[3] - a01 * c[1] + a02 * c[0],
                -a30 * s[3] + a31 * s[1] - a32 * s[0],
                a20 * s[3] - a21 * s[1] + a22 * s[0],
            ],
        ])
    }

    fn product(&self, other: &Self) -> Self {
        let mut product = Self::zeros();
        for i in 0..4 {
            for j in 0..4 {
                product.data[i][j] = self.data[i][0] * other.data[0][j]
                    + self.data[i][1] * other.data[1][j]
                    + self.data[i][2] * other.data[2][j]
                    + self.data[i][3] * other.data[3][j];
            }
        }
        product
    }

    fn map_elements(&mut self, mut f: impl FnMut(F) -> F) {
        for row in &mut self.data {
            for element in row {
                *element = f(*element);
            }
        }
    }
}

fn determinant_from_minors<F: Float>(s: &[F; 6], c: &[F; 6]) -> F {
    s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
}

impl<F: Float> Default for Matrix3D<F> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Copy> From<[[T; 4]; 4]> for Matrix3D<T> {
    #[inline]
    fn from(table: [[T; 4]; 4]) -> Self {
        Self::from_table(table)
    }
}

impl<T: Copy> From<Matrix3D<T>> for [[T; 4]; 4] {
    #[inline]
    fn from(matrix: Matrix3D<T>) -> Self {
        matrix.data
    }
}

impl_binop_assign!([F: Float] MulAssign, mul_assign, Matrix3D<F>, F, |a, b| {
    a.map_elements(|element| element * *b);
});

// Unlike for vectors, division by a near-zero scalar is not guarded
impl_binop_assign!([F: Float] DivAssign, div_assign, Matrix3D<F>, F, |a, b| {
    a.map_elements(|element| element / *b);
});

impl_binop_assign!([F: Float] MulAssign, mul_assign, Matrix3D<F>, Matrix3D<F>, |a, b| {
    *a = a.product(b);
});

impl_binop_assign!([F: Float] MulAssign, mul_assign, Vector3D<F>, Matrix3D<F>, |a, b| {
    *a = transform_vector(a, b);
});

impl_binop!([F: Float] Mul, mul, Matrix3D<F>, F, Matrix3D<F>, |a, b| {
    let mut product = *a;
    product *= b;
    product
});

impl_binop!([] Mul, mul, f32, Matrix3D<f32>, Matrix3D<f32>, |a, b| { b * a });

impl_binop!([] Mul, mul, f64, Matrix3D<f64>, Matrix3D<f64>, |a, b| { b * a });

impl_binop!([F: Float] Div, div, Matrix3D<F>, F, Matrix3D<F>, |a, b| {
    let mut quotient = *a;
    quotient /= b;
    quotient
});

impl_binop!([F: Float] Mul, mul, Matrix3D<F>, Matrix3D<F>, Matrix3D<F>, |a, b| {
    let mut product = *a;
    product *= b;
    product
});

impl_binop!([F: Float] Mul, mul, Vector3D<F>, Matrix3D<F>, Vector3D<F>, |a, b| {
    transform_vector(a, b)
});

impl_binop!([F: Float] Mul, mul, Matrix3D<F>, Vector3D<F>, Vector3D<F>, |a, b| {
    transform_vector(b, a)
});

/// Accesses the element at `(row, column)`.
///
/// # Panics
/// If the row or column is not in `0..4`.
impl<T> Index<(usize, usize)> for Matrix3D<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i][j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix3D<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.data[i][j]
    }
}

impl_abs_diff_eq!(Matrix3D<F>, |a, b, epsilon| {
    a.data
        .iter()
        .flatten()
        .zip(b.data.iter().flatten())
        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
});

impl_relative_eq!(Matrix3D<F>, |a, b, epsilon, max_relative| {
    a.data
        .iter()
        .flatten()
        .zip(b.data.iter().flatten())
        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
});

impl<T: fmt::Display> fmt::Display for Matrix3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "[{}, {}, {}, {}]", row[0], row[1], row[2], row[3])?;
        }
        Ok(())
    }
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use super::*;
    use approx::assert_abs_diff_eq;
    use arbitrary::{Arbitrary, Result, Unstructured};

    const MAX_OPERATIONS: u32 = 4;
    const MAX_TRANSLATION: f64 = 100.0;

    /// An affine transform composed of a few random translations, scalings
    /// and rotations with bounded magnitudes.
    #[derive(Clone, Debug)]
    pub struct ArbitraryAffineTransform(pub Matrix3D<f64>);

    impl Arbitrary<'_> for ArbitraryAffineTransform {
        fn arbitrary(u: &mut Unstructured<'_>) -> Result<Self> {
            let mut matrix = Matrix3D::identity();
            for _ in 0..u.int_in_range(0..=MAX_OPERATIONS)? {
                match u.int_in_range(0..=4)? {
                    0 => matrix.translate_xyz(
                        arbitrary_translation(u)?,
                        arbitrary_translation(u)?,
                        arbitrary_translation(u)?,
                    ),
                    1 => matrix.scale(
                        arbitrary_scale_factor(u)?,
                        arbitrary_scale_factor(u)?,
                        arbitrary_scale_factor(u)?,
                    ),
                    2 => matrix.rotate_x(arbitrary_angle(u)?),
                    3 => matrix.rotate_y(arbitrary_angle(u)?),
                    _ => matrix.rotate_z(arbitrary_angle(u)?),
                }
            }
            Ok(Self(matrix))
        }
    }

    fn arbitrary_unit_value(u: &mut Unstructured<'_>) -> Result<f64> {
        Ok(f64::from(u.int_in_range(0..=1000000)?) / 1000000.0)
    }

    fn arbitrary_translation(u: &mut Unstructured<'_>) -> Result<f64> {
        Ok(MAX_TRANSLATION * (2.0 * arbitrary_unit_value(u)? - 1.0))
    }

    fn arbitrary_scale_factor(u: &mut Unstructured<'_>) -> Result<f64> {
        Ok(0.5 + 1.5 * arbitrary_unit_value(u)?)
    }

    fn arbitrary_angle(u: &mut Unstructured<'_>) -> Result<f64> {
        Ok(<f64 as Float>::TWO_PI * arbitrary_unit_value(u)?)
    }

    pub fn fuzz_test_affine_transform_inversion(transform: ArbitraryAffineTransform) {
        let matrix = transform.0;
        let inverse = matrix.inverse();

        assert_abs_diff_eq!(matrix * inverse, Matrix3D::identity(), epsilon = 1e-6);
        assert_abs_diff_eq!(
            matrix.try_inverse().unwrap(),
            inverse,
            epsilon = 1e-12
        );

        for point in [
            Vector3D::zeros(),
            Vector3D::new(1.0, -2.0, 3.0),
            Vector3D::new(-50.0, 25.0, 10.0),
        ] {
            let transformed = point * matrix;
            assert_abs_diff_eq!(transformed * inverse, point, epsilon = 1e-6);
        }
    }
}
