/// 2D point type.
pub type Point2<T> = nalgebra::Point2<T>;

/// 2D vector type.
pub type Vector2<T> = nalgebra::Vector2<T>;

/// 3D vector type, used for homogeneous lifts and right-hand sides.
pub type Vector3<T> = nalgebra::Vector3<T>;

/// 2x2 matrix type (linear part of an affine map).
pub type Matrix2<T> = nalgebra::Matrix2<T>;

/// 3x3 matrix type (normal matrix, homogeneous affine matrix).
pub type Matrix3<T> = nalgebra::Matrix3<T>;

/// 2x3 matrix type (`[A | b]` affine matrix).
pub type Matrix2x3<T> = nalgebra::Matrix2x3<T>;

/// Default relative tolerance for singularity checks: `sqrt(epsilon)` of `T`.
#[must_use]
pub fn default_tolerance<T: nalgebra::RealField + Copy>() -> T {
    T::default_epsilon().sqrt()
}

/// Lifts a 2D point to homogeneous coordinates `(x, y, 1)`.
#[must_use]
pub fn homogeneous<T: nalgebra::RealField + Copy>(p: &Point2<T>) -> Vector3<T> {
    Vector3::new(p.x, p.y, T::one())
}
