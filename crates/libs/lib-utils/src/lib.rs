//! # Utilities Library
//!
//! Shared utility functions for time handling and input validation.

pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use time::{now_utc, format_date, format_local_date, add_days};
pub use validation::is_valid_email;
