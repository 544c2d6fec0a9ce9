use nalgebra::RealField;

use crate::math::default_tolerance;

/// Tuning knobs for [`AffineFit`](super::AffineFit).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions<T> {
    /// Threshold on the reciprocal condition number of the normal matrix,
    /// built from centred and scaled source points. At or below it the
    /// source configuration counts as degenerate.
    pub singular_tolerance: T,
    /// Reject fits whose linear part is singular (e.g. collinear targets).
    pub require_invertible: bool,
    /// Threshold on `|det A| / ‖A‖²_F` of the fitted linear part, checked
    /// when `require_invertible` is set. The ratio approximates
    /// `σ_min / σ_max`, so maps more anisotropic than `1 / linear_tolerance`
    /// are rejected as well.
    pub linear_tolerance: T,
}

impl<T: RealField + Copy> FitOptions<T> {
    /// Sets the normal matrix threshold.
    #[must_use]
    pub fn with_singular_tolerance(mut self, tolerance: T) -> Self {
        self.singular_tolerance = tolerance;
        self
    }

    /// Sets whether a singular linear part is an error.
    #[must_use]
    pub fn with_require_invertible(mut self, require: bool) -> Self {
        self.require_invertible = require;
        self
    }

    /// Sets the linear part threshold.
    #[must_use]
    pub fn with_linear_tolerance(mut self, tolerance: T) -> Self {
        self.linear_tolerance = tolerance;
        self
    }
}

impl<T: RealField + Copy> Default for FitOptions<T> {
    /// `singular_tolerance = sqrt(ε)`, `linear_tolerance = 64ε`.
    fn default() -> Self {
        let ulps: T = nalgebra::convert(64.0);
        Self {
            singular_tolerance: default_tolerance(),
            require_invertible: true,
            linear_tolerance: T::default_epsilon() * ulps,
        }
    }
}
