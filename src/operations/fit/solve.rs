use nalgebra::RealField;

use crate::error::{AffineFitError, Result};
use crate::math::Matrix3;

/// Ratio of the smallest to the largest absolute eigenvalue of a symmetric
/// matrix. Zero for the zero matrix.
#[must_use]
pub fn reciprocal_condition<T: RealField + Copy>(m: &Matrix3<T>) -> T {
    let eigenvalues = m.symmetric_eigenvalues();
    let hi = eigenvalues.iter().fold(T::zero(), |acc, v| acc.max(v.abs()));
    if hi <= T::zero() {
        return T::zero();
    }
    let lo = eigenvalues.iter().fold(hi, |acc, v| acc.min(v.abs()));
    lo / hi
}

/// Inverts a symmetric normal matrix, refusing near-singular input.
///
/// # Errors
///
/// Returns [`AffineFitError::SingularSystem`] if the matrix has non-finite
/// entries, if its reciprocal condition number does not exceed `tolerance`,
/// or if the inversion itself fails.
pub fn invert_normal_matrix<T: RealField + Copy>(
    m: &Matrix3<T>,
    tolerance: T,
) -> Result<Matrix3<T>> {
    if !m.iter().all(|v| v.is_finite()) {
        tracing::debug!("normal matrix has non-finite entries");
        return Err(AffineFitError::singular(T::zero()));
    }

    let rcond = reciprocal_condition(m);
    if rcond <= tolerance {
        tracing::debug!(reciprocal_condition = %rcond, "normal matrix is singular");
        return Err(AffineFitError::singular(rcond));
    }
    tracing::debug!(reciprocal_condition = %rcond, "normal matrix accepted");

    m.try_inverse().ok_or_else(|| AffineFitError::singular(rcond))
}
