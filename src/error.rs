use thiserror::Error;

/// Error type for affine estimation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffineFitError {
    #[error("point sets differ in length: {source_len} source points, {target_len} target points")]
    InputMismatch { source_len: usize, target_len: usize },

    /// The linear system has no unique solution. `reciprocal_condition` is
    /// the ratio of the smallest to the largest eigenvalue magnitude that was
    /// rejected (zero for exactly singular or non-finite systems).
    #[error("singular system (reciprocal condition {reciprocal_condition:e})")]
    SingularSystem { reciprocal_condition: f64 },

    #[error("invalid axis index {0}, expected 0 (x) or 1 (y)")]
    InvalidAxis(usize),
}

impl AffineFitError {
    /// Builds a [`AffineFitError::SingularSystem`] from a generic scalar.
    pub(crate) fn singular<T: nalgebra::RealField + Copy>(reciprocal_condition: T) -> Self {
        Self::SingularSystem {
            reciprocal_condition: nalgebra::try_convert::<T, f64>(reciprocal_condition)
                .unwrap_or(0.0),
        }
    }
}

/// Convenience type alias for results using [`AffineFitError`].
pub type Result<T> = std::result::Result<T, AffineFitError>;
