//! Error types for design generation.

use thiserror::Error;

use crate::ShapeId;

/// Result type for host API calls.
pub type HostResult<T> = Result<T, HostError>;

/// Result type for design operations.
pub type DesignResult<T> = Result<T, DesignError>;

/// Errors raised by the host canvas API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HostError {
    /// Shape not found in the document.
    #[error("Shape not found: {0}")]
    ShapeNotFound(ShapeId),

    /// Position or size the host cannot represent.
    #[error("Invalid geometry for {field}: {value}")]
    InvalidGeometry {
        /// The attribute being set.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Attempted to append to a shape that cannot hold children.
    #[error("Shape {0} cannot hold children")]
    InvalidParent(ShapeId),

    /// Any other refusal from the host.
    #[error("{0}")]
    Rejected(String),
}

/// Errors that can occur while generating a design.
#[derive(Debug, Error)]
pub enum DesignError {
    /// The host API failed while creating or configuring a shape.
    #[error(transparent)]
    Host(#[from] HostError),

    /// Request serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
