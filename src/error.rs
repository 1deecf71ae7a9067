use thiserror::Error;

/// Rejected input when constructing a [`crate::body::Body`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum BodyError {
    #[error("body mass must be finite and strictly positive, got {0}")]
    InvalidMass(f64),

    #[error("body {field} must be finite")]
    NonFinite { field: &'static str },
}
