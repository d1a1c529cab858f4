//! Vectors.

use crate::num::Float;
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// A 3-dimensional vector.
///
/// Used both for points and for directions. Arithmetic and geometric
/// operations require a [`Float`] element type; construction, component access
/// and equality work for any `Copy` type.
///
/// Equality is exact and componentwise. Use the [`approx`] traits for
/// comparisons that should tolerate round-off.
#[repr(C)]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector3D<T> {
    x: T,
    y: T,
    z: T,
}

pub type Vector3Df = Vector3D<f32>;
pub type Vector3Dd = Vector3D<f64>;

// SAFETY: `Vector3D` is `repr(C)` with three fields of the same type, so it has
// no padding and every bit pattern valid for `T` is valid for the vector.
unsafe impl<T: Zeroable> Zeroable for Vector3D<T> {}
unsafe impl<T: Pod> Pod for Vector3D<T> {}

impl<T: Copy> Vector3D<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    #[inline]
    pub fn set_z(&mut self, z: T) {
        self.z = z;
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }
}

impl<F: Float> Vector3D<F> {
    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ZERO)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(F::ONE, F::ZERO, F::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(F::ZERO, F::ONE, F::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(F::ZERO, F::ZERO, F::ONE)
    }

    /// Sets all components to zero.
    #[inline]
    pub fn set_zero(&mut self) {
        *self = Self::zeros();
    }

    /// Whether the squared length of the vector is below the machine epsilon
    /// of the element type. Vectors that are zero up to round-off count as
    /// zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.length_squared() < F::EPSILON
    }

    /// Divides the vector by its length.
    ///
    /// Vectors whose length does not exceed the machine epsilon are left
    /// unchanged.
    pub fn normalize(&mut self) {
        let length = self.length();
        if length > F::EPSILON {
            self.x = self.x / length;
            self.y = self.y / length;
            self.z = self.z / length;
        } else {
            log::trace!("Skipping normalization of near-zero vector {self}");
        }
    }

    /// Computes the normalized version of the vector. See
    /// [`normalize`](Self::normalize) for how near-zero vectors are handled.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut normalized = *self;
        normalized.normalize();
        normalized
    }

    /// Computes the length (Euclidean norm) of the vector.
    #[inline]
    pub fn length(&self) -> F {
        self.length_squared().sqrt()
    }

    /// Computes the square of the length of the vector. Prefer this over
    /// [`length`](Self::length) when only comparing lengths.
    #[inline]
    pub fn length_squared(&self) -> F {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Computes the Euclidean distance between this point and another.
    #[inline]
    pub fn distance(&self, other: &Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Computes the squared Euclidean distance between this point and another.
    #[inline]
    pub fn distance_squared(&self, other: &Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Computes the angle in radians between this vector and another, in the
    /// range `[0, π]`.
    ///
    /// The angle is zero if the product of the two lengths is exactly zero,
    /// which is the only case where the angle is undefined. Short but
    /// non-zero vectors get their true angle.
    pub fn angle(&self, other: &Self) -> F {
        let lengths = self.length() * other.length();
        if lengths.is_zero() {
            return F::ZERO;
        }
        let cos_angle = self.dot(other) / lengths;
        // Round-off can push parallel vectors slightly outside the domain of `acos`
        cos_angle.max(F::NEG_ONE).min(F::ONE).acos()
    }

    /// Returns the vector pointing in the opposite direction.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Copy> From<[T; 3]> for Vector3D<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Copy> From<Vector3D<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3D<T>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl_binop_assign!([F: Float] AddAssign, add_assign, Vector3D<F>, Vector3D<F>, |a, b| {
    a.x = a.x + b.x;
    a.y = a.y + b.y;
    a.z = a.z + b.z;
});

impl_binop_assign!([F: Float] SubAssign, sub_assign, Vector3D<F>, Vector3D<F>, |a, b| {
    a.x = a.x - b.x;
    a.y = a.y - b.y;
    a.z = a.z - b.z;
});

impl_binop_assign!([F: Float] MulAssign, mul_assign, Vector3D<F>, F, |a, b| {
    a.x = a.x * *b;
    a.y = a.y * *b;
    a.z = a.z * *b;
});

// Division by a near-zero scalar leaves the vector unchanged
impl_binop_assign!([F: Float] DivAssign, div_assign, Vector3D<F>, F, |a, b| {
    if b.abs() > F::EPSILON {
        a.x = a.x / *b;
        a.y = a.y / *b;
        a.z = a.z / *b;
    } else {
        log::trace!("Skipping division of vector {a} by near-zero scalar {b}");
    }
});

impl_binop!([F: Float] Add, add, Vector3D<F>, Vector3D<F>, Vector3D<F>, |a, b| {
    let mut sum = *a;
    sum += b;
    sum
});

impl_binop!([F: Float] Sub, sub, Vector3D<F>, Vector3D<F>, Vector3D<F>, |a, b| {
    let mut difference = *a;
    difference -= b;
    difference
});

impl_binop!([F: Float] Mul, mul, Vector3D<F>, F, Vector3D<F>, |a, b| {
    let mut product = *a;
    product *= b;
    product
});

impl_binop!([] Mul, mul, f32, Vector3D<f32>, Vector3D<f32>, |a, b| { b * a });

impl_binop!([] Mul, mul, f64, Vector3D<f64>, Vector3D<f64>, |a, b| { b * a });

impl_binop!([F: Float] Div, div, Vector3D<F>, F, Vector3D<F>, |a, b| {
    let mut quotient = *a;
    quotient /= b;
    quotient
});

impl_unary_op!([F: Float] Neg, neg, Vector3D<F>, Vector3D<F>, |val| {
    val.reversed()
});

impl<T> Index<usize> for Vector3D<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} is out of bounds for a 3-dimensional vector"),
        }
    }
}

impl<T> IndexMut<usize> for Vector3D<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} is out of bounds for a 3-dimensional vector"),
        }
    }
}

impl_abs_diff_eq!(Vector3D<F>, |a, b, epsilon| {
    a.x.abs_diff_eq(&b.x, epsilon)
        && a.y.abs_diff_eq(&b.y, epsilon)
        && a.z.abs_diff_eq(&b.z, epsilon)
});

impl_relative_eq!(Vector3D<F>, |a, b, epsilon, max_relative| {
    a.x.relative_eq(&b.x, epsilon, max_relative)
        && a.y.relative_eq(&b.y, epsilon, max_relative)
        && a.z.relative_eq(&b.z, epsilon, max_relative)
});

impl<T: fmt::Display> fmt::Display for Vector3D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(feature = "fuzzing")]
pub mod fuzzing {
    use super::*;
    use approx::assert_abs_diff_eq;

    const MAX_COMPONENT: f64 = 1e6;

    fn has_bounded_components(v: &Vector3D<f64>) -> bool {
        [v.x, v.y, v.z]
            .iter()
            .all(|c| c.is_finite() && c.abs() <= MAX_COMPONENT)
    }

    pub fn fuzz_test_vector_operations(a: Vector3D<f64>, b: Vector3D<f64>) {
        if !has_bounded_components(&a) || !has_bounded_components(&b) {
            return;
        }

        let normalized = a.normalized();
        if a.length() > f64::EPSILON {
            assert_abs_diff_eq!(normalized.length(), 1.0, epsilon = 1e-9);
        } else {
            assert_eq!(normalized, a);
        }

        let angle = a.angle(&b);
        assert!((0.0..=std::f64::consts::PI).contains(&angle));

        assert_eq!(a.distance(&b), b.distance(&a));
        assert_eq!(a.dot(&b), b.dot(&a));

        let mut divided = a;
        divided /= 0.0;
        assert_eq!(divided, a);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::op_ref)]

    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    prop_compose! {
        fn vector_strategy(max_coord: f64)(
            x in -max_coord..max_coord,
            y in -max_coord..max_coord,
            z in -max_coord..max_coord,
        ) -> Vector3D<f64> {
            Vector3D::new(x, y, z)
        }
    }

    #[test]
    fn creating_default_vector_gives_zeros() {
        let v = Vector3D::<f64>::default();
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
        assert_eq!(v.z(), 0.0);
        assert_eq!(v, Vector3D::zeros());
    }

    #[test]
    fn creating_vector_with_components_works() {
        let v = Vector3D::new(3.0, 4.0, 5.0);
        assert_eq!(v.x(), 3.0);
        assert_eq!(v.y(), 4.0);
        assert_eq!(v.z(), 5.0);
    }

    #[test]
    fn copying_vector_preserves_components() {
        let original = Vector3D::new(1.0, 2.0, 3.0);
        let mut copy = original;
        copy.set_x(10.0);
        assert_eq!(original.x(), 1.0);
        assert_eq!(copy, Vector3D::new(10.0, 2.0, 3.0));
    }

    #[test]
    fn setting_components_works() {
        let mut v = Vector3D::<f32>::zeros();
        v.set_x(1.0);
        v.set_y(2.0);
        v.set_z(3.0);
        assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));

        *v.x_mut() = -1.0;
        *v.y_mut() = -2.0;
        *v.z_mut() = -3.0;
        assert_eq!(v, Vector3D::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn setting_vector_to_zero_works() {
        let mut v = Vector3D::new(3.0, 4.0, 9.0);
        v.set_zero();
        assert_eq!(v.x(), 0.0);
        assert_eq!(v.y(), 0.0);
        assert_eq!(v.z(), 0.0);
        assert!(v.is_zero());
    }

    #[test]
    fn vector_within_round_off_of_zero_is_zero() {
        assert!(Vector3D::new(1e-9, -1e-9, 0.0).is_zero());
        assert!(!Vector3D::new(1e-3, 0.0, 0.0).is_zero());
        assert!(!Vector3D::new(0.0_f32, 0.0, 1.0).is_zero());
    }

    #[test]
    fn normalizing_vector_divides_by_length() {
        let mut v = Vector3D::new(3.0, 4.0, 2.0);
        v.normalize();
        assert_eq!(v.x(), 3.0 / 29.0_f64.sqrt());
        assert_eq!(v.y(), 4.0 / 29.0_f64.sqrt());
        assert_eq!(v.z(), 2.0 / 29.0_f64.sqrt());
    }

    #[test]
    fn normalizing_near_zero_vector_leaves_it_unchanged() {
        let mut v = Vector3D::new(1e-20, 0.0, -1e-20);
        v.normalize();
        assert_eq!(v, Vector3D::new(1e-20, 0.0, -1e-20));

        let mut zero = Vector3D::<f32>::zeros();
        zero.normalize();
        assert_eq!(zero, Vector3D::zeros());
    }

    #[test]
    fn normalized_does_not_modify_original() {
        let v = Vector3D::new(0.0, 0.0, 5.0);
        assert_eq!(v.normalized(), Vector3D::unit_z());
        assert_eq!(v, Vector3D::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn computing_length_works() {
        let v = Vector3D::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn computing_cross_product_works() {
        assert_eq!(
            Vector3D::<f64>::unit_x().cross(&Vector3D::unit_y()),
            Vector3D::unit_z()
        );
        assert_eq!(
            Vector3D::<f64>::unit_y().cross(&Vector3D::unit_x()),
            -Vector3D::unit_z()
        );
        assert_eq!(
            Vector3D::new(1.0, 2.0, 3.0).cross(&Vector3D::new(4.0, 5.0, 6.0)),
            Vector3D::new(-3.0, 6.0, -3.0)
        );
    }

    #[test]
    fn cross_product_of_parallel_vectors_is_zero() {
        let v = Vector3D::new(1.0, -2.0, 0.5);
        assert!(v.cross(&(v * 3.0)).is_zero());
        assert!(v.cross(&Vector3D::zeros()).is_zero());
    }

    #[test]
    fn computing_distance_works() {
        let a = Vector3D::new(1.0, 1.0, 1.0);
        let b = Vector3D::new(3.0, 4.0, 7.0);
        assert_eq!(a.distance_squared(&b), 49.0);
        assert_eq!(a.distance(&b), 7.0);
        assert_eq!(b.distance(&a), 7.0);
    }

    #[test]
    fn computing_angle_between_vectors_works() {
        let x = Vector3D::<f64>::unit_x();
        let y = Vector3D::<f64>::unit_y();
        assert_abs_diff_eq!(x.angle(&y), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(x.angle(&-x), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(
            x.angle(&Vector3D::new(1.0, 1.0, 0.0)),
            FRAC_PI_4,
            epsilon = 1e-12
        );
    }

    #[test]
    fn angle_between_parallel_vectors_is_not_nan() {
        let v = Vector3D::new(0.1, 0.7, 0.3);
        let angle: f64 = v.angle(&(v * 7.0));
        assert!(!angle.is_nan());
        assert_abs_diff_eq!(angle, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_with_zero_vector_is_zero() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v.angle(&Vector3D::zeros()), 0.0);
        assert_eq!(Vector3D::zeros().angle(&v), 0.0);
    }

    #[test]
    fn angle_between_short_perpendicular_vectors_is_right_angle() {
        let a = Vector3D::new(1e-4_f32, 0.0, 0.0);
        let b = Vector3D::new(0.0, 1e-4_f32, 0.0);
        assert!(a.is_zero());
        assert_abs_diff_eq!(a.angle(&b), std::f32::consts::FRAC_PI_2, epsilon = 1e-6);

        let a = Vector3D::new(1e-9_f64, 0.0, 0.0);
        let b = Vector3D::new(0.0, 1e-9_f64, 0.0);
        assert_abs_diff_eq!(a.angle(&b), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle(&-a), PI, epsilon = 1e-12);
    }

    #[test]
    fn reversing_vector_negates_components_without_mutating() {
        let v = Vector3D::new(1.0, -2.0, 3.0);
        assert_eq!(v.reversed(), Vector3D::new(-1.0, 2.0, -3.0));
        assert_eq!(-v, v.reversed());
        assert_eq!(v, Vector3D::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn adding_vectors_works() {
        let a = Vector3D::new(10.0_f32, 7.0, 1.5);
        let b = Vector3D::new(-2.0_f32, 1.0, 2.1);
        assert_relative_eq!(a + b, Vector3D::new(8.0, 8.0, 3.6));
    }

    #[test]
    fn vector_arithmetic_operations_work() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vector3D::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3D::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, Vector3D::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3D::new(2.0, 2.5, 3.0));
        assert_eq!(a.dot(&b), 32.0);
    }

    #[test]
    fn vector_operations_with_different_reference_combinations_work() {
        let a = Vector3D::new(1.0, 2.0, 3.0);
        let b = Vector3D::new(0.5, 0.5, 0.5);
        let expected = Vector3D::new(1.5, 2.5, 3.5);

        assert_eq!(a + b, expected);
        assert_eq!(&a + b, expected);
        assert_eq!(a + &b, expected);
        assert_eq!(&a + &b, expected);
        assert_eq!(&a * 2.0, a * 2.0);
        assert_eq!(2.0 * &a, a * 2.0);
    }

    #[test]
    fn vector_assignment_operations_work() {
        let mut v = Vector3D::new(1.0, 2.0, 3.0);
        v += Vector3D::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3D::new(2.0, 3.0, 4.0));
        v -= &Vector3D::new(2.0, 2.0, 2.0);
        assert_eq!(v, Vector3D::new(0.0, 1.0, 2.0));
        v *= 3.0;
        assert_eq!(v, Vector3D::new(0.0, 3.0, 6.0));
        v /= 3.0;
        assert_eq!(v, Vector3D::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn dividing_vector_by_near_zero_scalar_leaves_it_unchanged() {
        let v = Vector3D::new(1.0, 2.0, 3.0);

        let mut divided = v;
        divided /= 0.0;
        assert_eq!(divided, v);

        divided /= -1e-20;
        assert_eq!(divided, v);

        assert_eq!(v / 0.0, v);
    }

    #[test]
    fn dividing_vector_by_negative_scalar_works() {
        let v = Vector3D::new(2.0, -4.0, 6.0);
        assert_eq!(v / -2.0, Vector3D::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn vector_equality_is_exact() {
        let a = Vector3D::new(0.1 + 0.2, 1.0, 1.0);
        let b = Vector3D::new(0.3, 1.0, 1.0);
        assert!(a != b);
        assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        assert_eq!(a, a);
    }

    #[test]
    fn indexing_vector_works() {
        let mut v = Vector3D::new(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[2], 3.0);
        v[1] = 5.0;
        assert_eq!(v.y(), 5.0);
    }

    #[test]
    #[should_panic]
    fn indexing_vector_out_of_bounds_panics() {
        let v = Vector3D::new(1.0, 2.0, 3.0);
        let _component = v[3];
    }

    #[test]
    fn converting_vector_to_and_from_array_works() {
        let v = Vector3D::from([1.0, 2.0, 3.0]);
        assert_eq!(v, Vector3D::new(1.0, 2.0, 3.0));
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn displaying_vector_works() {
        assert_eq!(Vector3D::new(1.0, -2.5, 3.0).to_string(), "(1, -2.5, 3)");
    }

    #[test]
    fn casting_vector_to_bytes_works() {
        let v = Vector3D::new(1.0_f32, 2.0, 3.0);
        let bytes: &[u8] = bytemuck::bytes_of(&v);
        assert_eq!(bytes.len(), 12);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(floats, &[1.0, 2.0, 3.0]);
    }

    proptest! {
        #[test]
        fn adding_reversed_vector_gives_zero(v in vector_strategy(1e3)) {
            prop_assert_eq!(v + (-v), Vector3D::zeros());
        }

        #[test]
        fn length_is_square_root_of_self_dot_product(v in vector_strategy(1e3)) {
            prop_assert_eq!(v.length_squared(), v.dot(&v));
            prop_assert_eq!(v.length(), v.dot(&v).sqrt());
        }

        #[test]
        fn normalized_vector_has_unit_length(v in vector_strategy(1e3)) {
            prop_assume!(v.length() > 1e-6);
            assert_abs_diff_eq!(v.normalized().length_squared(), 1.0, epsilon = 1e-9);
        }

        #[test]
        fn cross_product_with_self_is_zero(v in vector_strategy(1e3)) {
            prop_assert_eq!(v.cross(&v), Vector3D::zeros());
        }

        #[test]
        fn dot_product_is_commutative(a in vector_strategy(1e3), b in vector_strategy(1e3)) {
            prop_assert_eq!(a.dot(&b), b.dot(&a));
        }

        #[test]
        fn distance_is_symmetric(a in vector_strategy(1e3), b in vector_strategy(1e3)) {
            prop_assert_eq!(a.distance_squared(&b), b.distance_squared(&a));
            prop_assert_eq!(a.distance(&b), (b - a).length());
        }

        #[test]
        fn cross_product_is_orthogonal_to_operands(
            a in vector_strategy(1e2),
            b in vector_strategy(1e2),
        ) {
            let c = a.cross(&b);
            assert_abs_diff_eq!(c.dot(&a), 0.0, epsilon = 1e-6);
            assert_abs_diff_eq!(c.dot(&b), 0.0, epsilon = 1e-6);
        }
    }
}
