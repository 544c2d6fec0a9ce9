//! Least-squares affine estimation from point correspondences.
//!
//! Closed-form solution of the normal equations after Späth, *Fitting affine
//! and orthogonal transformations between two sets of points*, Mathematical
//! Communications 9 (2004), 27-34, solved in Hartley-normalized coordinates.

mod estimate;
mod normal;
mod normalize;
mod options;
mod solve;

pub use estimate::{estimate, estimate_with, AffineFit};
pub use normal::{normal_matrix, rhs_vector, Axis};
pub use normalize::Normalization;
pub use options::FitOptions;
pub use solve::{invert_normal_matrix, reciprocal_condition};
