use std::fmt;

use nalgebra::RealField;

use crate::error::{AffineFitError, Result};
use crate::math::{homogeneous, Matrix2, Matrix2x3, Matrix3, Point2, Vector2};

/// A 2D affine transformation `p ↦ A·p + b`.
///
/// Stored as the 2x3 matrix `[A | b]`:
///
/// ```text
/// | a00  a01  b0 |
/// | a10  a11  b1 |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform<T: RealField + Copy> {
    matrix: Matrix2x3<T>,
}

impl<T: RealField + Copy> AffineTransform<T> {
    /// Creates a transform from a 2x3 `[A | b]` matrix.
    #[must_use]
    pub fn new(matrix: Matrix2x3<T>) -> Self {
        Self { matrix }
    }

    /// Creates a transform from its linear part and translation.
    #[must_use]
    pub fn from_parts(linear: Matrix2<T>, translation: Vector2<T>) -> Self {
        let mut matrix = Matrix2x3::zeros();
        matrix.fixed_view_mut::<2, 2>(0, 0).copy_from(&linear);
        matrix.set_column(2, &translation);
        Self { matrix }
    }

    /// The identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::from_parts(Matrix2::identity(), Vector2::zeros())
    }

    /// Returns the 2x3 `[A | b]` matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix2x3<T> {
        &self.matrix
    }

    /// Returns the 2x2 linear part `A`.
    #[must_use]
    pub fn linear(&self) -> Matrix2<T> {
        self.matrix.fixed_view::<2, 2>(0, 0).into_owned()
    }

    /// Returns the translation `b`.
    #[must_use]
    pub fn translation(&self) -> Vector2<T> {
        self.matrix.column(2).into_owned()
    }

    /// Returns the 3x3 homogeneous matrix with last row `(0, 0, 1)`.
    #[must_use]
    pub fn to_homogeneous(&self) -> Matrix3<T> {
        let mut h = Matrix3::identity();
        h.fixed_view_mut::<2, 3>(0, 0).copy_from(&self.matrix);
        h
    }

    /// Determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> T {
        self.linear().determinant()
    }

    /// Maps a single point.
    #[must_use]
    pub fn apply(&self, p: &Point2<T>) -> Point2<T> {
        Point2::from(self.matrix * homogeneous(p))
    }

    /// Maps every point of a slice.
    #[must_use]
    pub fn apply_all(&self, points: &[Point2<T>]) -> Vec<Point2<T>> {
        points.iter().map(|p| self.apply(p)).collect()
    }

    /// Returns the transform applying `self` first, then `next`.
    #[must_use]
    pub fn then(&self, next: &Self) -> Self {
        let h = next.to_homogeneous() * self.to_homogeneous();
        Self::new(h.fixed_view::<2, 3>(0, 0).into_owned())
    }

    /// Returns the inverse transform.
    ///
    /// # Errors
    ///
    /// Returns [`AffineFitError::SingularSystem`] if the linear part is not
    /// invertible.
    pub fn inverse(&self) -> Result<Self> {
        let Some(inv) = self.linear().try_inverse() else {
            return Err(AffineFitError::singular(T::zero()));
        };
        Ok(Self::from_parts(inv, -(inv * self.translation())))
    }

    /// Per-point Euclidean distances between `self.apply(source[i])` and
    /// `target[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`AffineFitError::InputMismatch`] if the slices differ in
    /// length.
    pub fn residuals(&self, source: &[Point2<T>], target: &[Point2<T>]) -> Result<Vec<T>> {
        if source.len() != target.len() {
            return Err(AffineFitError::InputMismatch {
                source_len: source.len(),
                target_len: target.len(),
            });
        }
        Ok(source
            .iter()
            .zip(target)
            .map(|(p, q)| (self.apply(p) - q).norm())
            .collect())
    }

    /// Root-mean-square residual over all correspondences. Zero for empty
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`AffineFitError::InputMismatch`] if the slices differ in
    /// length.
    pub fn rms_error(&self, source: &[Point2<T>], target: &[Point2<T>]) -> Result<T> {
        let residuals = self.residuals(source, target)?;
        if residuals.is_empty() {
            return Ok(T::zero());
        }
        let sum_sq = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        #[allow(clippy::cast_precision_loss)]
        let n: T = nalgebra::convert(residuals.len() as f64);
        Ok((sum_sq / n).sqrt())
    }
}

impl<T: RealField + Copy> Default for AffineTransform<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: RealField + Copy> From<Matrix2x3<T>> for AffineTransform<T> {
    fn from(matrix: Matrix2x3<T>) -> Self {
        Self::new(matrix)
    }
}

impl<T: RealField + Copy> fmt::Display for AffineTransform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.matrix;
        write!(
            f,
            "[{}, {}, {};\n {}, {}, {}]",
            m[(0, 0)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 0)],
            m[(1, 1)],
            m[(1, 2)]
        )
    }
}
