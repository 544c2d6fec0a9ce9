use nalgebra::RealField;

use crate::error::{AffineFitError, Result};
use crate::math::{homogeneous, Matrix3, Point2, Vector3};

/// Output coordinate fitted by one of the two linear systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Both axes, in row order of the resulting transform.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Row index of this axis (0 for x, 1 for y).
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// Returns the coordinate of `p` along this axis.
    #[must_use]
    pub fn of<T: RealField + Copy>(self, p: &Point2<T>) -> T {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = AffineFitError;

    fn try_from(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            other => Err(AffineFitError::InvalidAxis(other)),
        }
    }
}

/// Accumulates the normal matrix `Σ p̃ p̃ᵀ` over the homogeneous lifts of
/// `points`.
///
/// The result is symmetric positive semidefinite; its bottom-right entry is
/// the number of points.
#[must_use]
pub fn normal_matrix<T: RealField + Copy>(points: &[Point2<T>]) -> Matrix3<T> {
    points.iter().fold(Matrix3::zeros(), |acc, p| {
        let lifted = homogeneous(p);
        acc + lifted * lifted.transpose()
    })
}

/// Accumulates the right-hand side `Σ p̃_i · q_i[axis]` for one output axis.
///
/// # Errors
///
/// Returns [`AffineFitError::InputMismatch`] if `source` and `target` differ
/// in length.
pub fn rhs_vector<T: RealField + Copy>(
    axis: Axis,
    source: &[Point2<T>],
    target: &[Point2<T>],
) -> Result<Vector3<T>> {
    if source.len() != target.len() {
        return Err(AffineFitError::InputMismatch {
            source_len: source.len(),
            target_len: target.len(),
        });
    }

    Ok(source
        .iter()
        .zip(target)
        .fold(Vector3::zeros(), |acc, (p, q)| {
            acc + homogeneous(p) * axis.of(q)
        }))
}
