use nalgebra::RealField;

use crate::error::{AffineFitError, Result};
use crate::math::{Matrix2x3, Point2};
use crate::transform::AffineTransform;

use super::normal::{normal_matrix, rhs_vector, Axis};
use super::normalize::Normalization;
use super::options::FitOptions;
use super::solve::invert_normal_matrix;

/// Fits the affine map taking `source[i]` to `target[i]` in the
/// least-squares sense.
pub struct AffineFit<'a, T: RealField + Copy> {
    source: &'a [Point2<T>],
    target: &'a [Point2<T>],
    options: FitOptions<T>,
}

impl<'a, T: RealField + Copy> AffineFit<'a, T> {
    /// Creates a new `AffineFit` operation with default options.
    #[must_use]
    pub fn new(source: &'a [Point2<T>], target: &'a [Point2<T>]) -> Self {
        Self {
            source,
            target,
            options: FitOptions::default(),
        }
    }

    /// Replaces the fit options.
    #[must_use]
    pub fn with_options(mut self, options: FitOptions<T>) -> Self {
        self.options = options;
        self
    }

    /// Executes the fit.
    ///
    /// Both point sets are first centred and scaled (see [`Normalization`]),
    /// so the conditioning check only fails on a real geometric degeneracy.
    /// The normal matrix is built from the normalized source points, one
    /// right-hand side per output axis, and the normal matrix is inverted
    /// once to solve both systems. The normalizations are then folded back
    /// in. Row `j` of the result holds `(A_j0, A_j1, b_j)`.
    ///
    /// # Errors
    ///
    /// - [`AffineFitError::InputMismatch`] if the point sets differ in length.
    /// - [`AffineFitError::SingularSystem`] if the source points do not
    ///   determine a unique solution (fewer than three, coincident or
    ///   collinear points), or if [`FitOptions::require_invertible`] is set
    ///   and the fitted linear part is singular.
    pub fn execute(&self) -> Result<AffineTransform<T>> {
        let (source, target) = (self.source, self.target);
        if source.len() != target.len() {
            return Err(AffineFitError::InputMismatch {
                source_len: source.len(),
                target_len: target.len(),
            });
        }

        let source_norm = Normalization::of(source);
        let target_norm = Normalization::of(target);
        let p = source_norm.apply_all(source);
        let q = target_norm.apply_all(target);

        let normal = normal_matrix(&p);
        let inverse = invert_normal_matrix(&normal, self.options.singular_tolerance)?;

        let mut matrix = Matrix2x3::zeros();
        for axis in Axis::ALL {
            let coefficients = inverse * rhs_vector(axis, &p, &q)?;
            matrix.set_row(axis.index(), &coefficients.transpose());
        }
        let transform = source_norm
            .forward()
            .then(&AffineTransform::new(matrix))
            .then(&target_norm.inverse());

        if self.options.require_invertible {
            check_invertible(&transform, self.options.linear_tolerance)?;
        }

        tracing::debug!(points = source.len(), "affine fit solved");
        Ok(transform)
    }
}

/// Rejects transforms whose linear part is numerically singular.
fn check_invertible<T: RealField + Copy>(
    transform: &AffineTransform<T>,
    tolerance: T,
) -> Result<()> {
    let linear = transform.linear();
    let scale = linear.norm_squared();
    let ratio = if scale > T::zero() {
        transform.determinant().abs() / scale
    } else {
        T::zero()
    };

    if ratio <= tolerance || !ratio.is_finite() {
        tracing::debug!(ratio = %ratio, "fitted linear part is singular");
        return Err(AffineFitError::singular(ratio));
    }
    Ok(())
}

/// Estimates the affine transform mapping `source` onto `target` with
/// default [`FitOptions`].
///
/// # Errors
///
/// See [`AffineFit::execute`].
pub fn estimate<T: RealField + Copy>(
    source: &[Point2<T>],
    target: &[Point2<T>],
) -> Result<AffineTransform<T>> {
    AffineFit::new(source, target).execute()
}

/// Estimates the affine transform mapping `source` onto `target`.
///
/// # Errors
///
/// See [`AffineFit::execute`].
pub fn estimate_with<T: RealField + Copy>(
    source: &[Point2<T>],
    target: &[Point2<T>],
    options: &FitOptions<T>,
) -> Result<AffineTransform<T>> {
    AffineFit::new(source, target).with_options(*options).execute()
}
