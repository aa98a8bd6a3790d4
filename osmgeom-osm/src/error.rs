//! Error types used by the crate.

use thiserror::Error;

/// Error parsing OSM objects from their OPL text representation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OplError {
    /// Input contains no object.
    #[error("empty input")]
    Empty,

    /// Object is of a different type than the one requested.
    #[error("expected object of type '{expected}', got '{token}'")]
    ObjectType {
        /// Expected object type letter.
        expected: char,
        /// Token that was found instead.
        token: String,
    },

    /// Object or node id is not a number.
    #[error("invalid id: {0}")]
    Id(String),

    /// Coordinate is not a number.
    #[error("invalid coordinate: {0}")]
    Coordinate(String),

    /// Node reference has a wrong format.
    #[error("invalid node reference: {0}")]
    NodeRef(String),
}
