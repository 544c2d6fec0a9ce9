mod affine;

pub use affine::AffineTransform;
