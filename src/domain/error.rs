//! Error types for the staff portal.
//!
//! This module defines the centralized error type [`PortalError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate.

use thiserror::Error;

/// The main error type for staff portal operations.
///
/// Store reductions never fail, so these variants only describe problems at
/// the edges: startup configuration, decoding inbound actions and payloads,
/// loading themes, and writing log files.
///
/// # Examples
///
/// ```
/// use staff_portal::PortalError;
///
/// fn validate_capacity(capacity: usize) -> Result<(), PortalError> {
///     if capacity == 0 {
///         return Err(PortalError::Config("message capacity must be positive".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_capacity(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PortalError {
    /// Configuration is invalid.
    ///
    /// Raised while constructing the store or the application state. These
    /// errors are fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An inbound action could not be decoded.
    ///
    /// Raised when an external collaborator sends an action whose tag is not
    /// part of the action vocabulary, or whose payload is malformed.
    #[error("Action rejected: {0}")]
    Action(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON payload (student list, user record) could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for staff portal operations.
pub type Result<T> = std::result::Result<T, PortalError>;
