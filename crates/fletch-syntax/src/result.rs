//! Result type alias for accessor operations

use crate::error::SyntaxError;

/// Convenience result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SyntaxError>;
