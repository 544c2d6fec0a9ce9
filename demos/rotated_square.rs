//! Fits the affine map taking the diamond `(±1, 0), (0, ±1)` onto the same
//! diamond rotated by 45° and centred at `(1, 1)`, then prints the resulting
//! 2x3 matrix.
//!
//! ```text
//! cargo run --example rotated_square
//! RUST_LOG=affinefit=debug cargo run --example rotated_square
//! ```

use affinefit::math::Point2;
use affinefit::{estimate, AffineFitError};

fn main() -> Result<(), AffineFitError> {
    // Default: WARN for everything, INFO for affinefit.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("affinefit=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let h = std::f32::consts::FRAC_1_SQRT_2;
    let p = [
        Point2::new(1.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(-1.0, 0.0),
        Point2::new(0.0, -1.0),
    ];
    let q = [
        Point2::new(1.0 + h, 1.0 + h),
        Point2::new(1.0 - h, 1.0 + h),
        Point2::new(1.0 - h, 1.0 - h),
        Point2::new(1.0 + h, 1.0 - h),
    ];

    let transform = estimate(&p, &q)?;
    println!("{transform}");
    Ok(())
}
