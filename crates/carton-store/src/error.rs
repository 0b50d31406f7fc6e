//! # Store Error Type
//!
//! The cart transitions themselves are total functions and never fail; the
//! only fallible operation in the system is decoding an action object that
//! arrives as JSON from a view layer. Everything else is either a success or
//! a silent no-op.

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Errors raised at the store boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The action JSON did not decode to a known command.
    ///
    /// ## When This Occurs
    /// - Unknown `type` tag
    /// - Missing or malformed `payload` for a command that requires one
    /// - Input that is not JSON at all
    #[error("invalid cart command: {0}")]
    InvalidCommand(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_message() {
        let err: StoreError = serde_json::from_str::<serde_json::Value>("not json")
            .unwrap_err()
            .into();
        assert!(err.to_string().starts_with("invalid cart command:"));
    }
}
