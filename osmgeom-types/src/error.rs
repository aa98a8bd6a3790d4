//! Error type used by the crate.

use thiserror::Error;

use crate::geometry_type::GeometryType;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// The geometry holds a different variant than the one requested.
    #[error("expected {expected} geometry, got {actual}")]
    TypeMismatch {
        /// Requested geometry type.
        expected: GeometryType,
        /// Actual geometry type.
        actual: GeometryType,
    },
    /// Argument of an operation is outside of its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The operation is undefined for a null or empty geometry.
    #[error("operation is undefined for an empty geometry")]
    EmptyGeometry,
}
