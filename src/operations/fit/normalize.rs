use nalgebra::RealField;

use crate::math::{Matrix2, Point2, Vector2};
use crate::transform::AffineTransform;

/// Similarity moving a point set's centroid to the origin and scaling it so
/// the mean distance from the origin is `sqrt(2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization<T: RealField + Copy> {
    centroid: Point2<T>,
    scale: T,
}

impl<T: RealField + Copy> Normalization<T> {
    /// Computes the normalization of `points`.
    ///
    /// Empty or fully coincident sets get a unit scale. Non-finite input
    /// yields a non-finite centroid, which the conditioning check rejects
    /// later.
    #[must_use]
    pub fn of(points: &[Point2<T>]) -> Self {
        if points.is_empty() {
            return Self {
                centroid: Point2::origin(),
                scale: T::one(),
            };
        }

        #[allow(clippy::cast_precision_loss)]
        let n: T = nalgebra::convert(points.len() as f64);
        let sum = points
            .iter()
            .fold(Vector2::zeros(), |acc: Vector2<T>, p| acc + p.coords);
        let centroid = Point2::from(sum / n);

        let mean_dist = points
            .iter()
            .fold(T::zero(), |acc, p| acc + (p - centroid).norm())
            / n;
        let sqrt2: T = nalgebra::convert(std::f64::consts::SQRT_2);
        let scale = sqrt2 / mean_dist;
        let scale = if mean_dist > T::zero() && scale.is_finite() {
            scale
        } else {
            T::one()
        };

        Self { centroid, scale }
    }

    /// Centroid of the normalized set.
    #[must_use]
    pub fn centroid(&self) -> &Point2<T> {
        &self.centroid
    }

    /// Isotropic scale factor.
    #[must_use]
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Maps a point into normalized coordinates.
    #[must_use]
    pub fn apply(&self, p: &Point2<T>) -> Point2<T> {
        Point2::from((p - self.centroid) * self.scale)
    }

    /// Maps every point of a slice into normalized coordinates.
    #[must_use]
    pub fn apply_all(&self, points: &[Point2<T>]) -> Vec<Point2<T>> {
        points.iter().map(|p| self.apply(p)).collect()
    }

    /// The normalization as an affine transform.
    #[must_use]
    pub fn forward(&self) -> AffineTransform<T> {
        AffineTransform::from_parts(
            Matrix2::identity() * self.scale,
            -self.centroid.coords * self.scale,
        )
    }

    /// The map from normalized coordinates back to the original frame.
    #[must_use]
    pub fn inverse(&self) -> AffineTransform<T> {
        AffineTransform::from_parts(Matrix2::identity() / self.scale, self.centroid.coords)
    }
}
