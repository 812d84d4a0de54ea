//! # Centralized Error Handling
//!
//! This module defines the crate-wide error type [`LandingError`]. It follows the
//! `thiserror` pattern used across the workspace.
//!
//! Most failures on the landing page are not errors at all:
//!
//! - A rejected email address is a [`Rejection`](crate::signup::Rejection) value
//!   surfaced as UI text.
//! - An absent DOM element is an `Option::None` and the dependent behavior is skipped.
//!
//! What remains is covered here:
//!
//! 1. **Configuration** - [`Config`](LandingError::Config)
//! 2. **Strict mounting** - [`MissingElement`](LandingError::MissingElement)
//! 3. **Host calls** - [`Dom`](LandingError::Dom)
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{LandingError, Result};
//!
//! fn tick_interval(ms: u32) -> Result<u32> {
//!     if ms == 0 {
//!         return Err(LandingError::Config("tick_interval_ms must be positive".to_string()));
//!     }
//!     Ok(ms)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, LandingError>`.
pub type Result<T> = std::result::Result<T, LandingError>;

#[derive(Debug, Error)]
pub enum LandingError {
    /// Configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A required page element is absent and strict mounting is enabled.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// The host environment rejected a call (observer construction, listener registration).
    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<serde_json::Error> for LandingError {
    fn from(err: serde_json::Error) -> Self {
        LandingError::Config(format!("JSON error: {}", err))
    }
}

impl From<lib_utils::time::Error> for LandingError {
    fn from(err: lib_utils::time::Error) -> Self {
        LandingError::Config(format!("Target instant out of range: {}", err))
    }
}
