pub mod error;
pub mod math;
pub mod operations;
pub mod transform;

pub use error::{AffineFitError, Result};
pub use operations::fit::{estimate, estimate_with, AffineFit, FitOptions};
pub use transform::AffineTransform;
