//! # Mesh Errors
//!
//! Error types for mesh generation and the transform helpers.
//!
//! Parameter errors are raised before any buffer is allocated, so a failed
//! call never leaves partially filled output behind.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A shape parameter violates the generator's preconditions
    #[error("Invalid {parameter}: {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },

    /// Too many vertices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },

    /// An output buffer could not be allocated
    #[error("Failed to allocate {buffer} buffer of {len} elements")]
    AllocationFailed {
        buffer: &'static str,
        len: usize,
        #[source]
        source: TryReserveError,
    },

    /// Mesh validation failed
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    /// Viewport with a zero dimension
    #[error("Invalid viewport: {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_parameter("slices", "must be even: 5");
        assert_eq!(err.to_string(), "Invalid slices: must be even: 5");

        let err = MeshError::TooManyVertices { count: 10, max: 5 };
        assert!(err.to_string().contains("max: 5"));
    }

    #[test]
    fn test_allocation_error_keeps_source() {
        let source = Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = MeshError::AllocationFailed {
            buffer: "positions",
            len: usize::MAX,
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("positions"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
