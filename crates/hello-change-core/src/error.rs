//! # Error Types
//!
//! Domain-specific error types for hello-change-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hello-change-core errors (this file)                                   │
//! │  ├── CoreError::InvalidArgument    - caller must fix its input          │
//! │  ├── CoreError::InsufficientFunds  - not enough bills, state unchanged  │
//! │  └── CoreError::CapacityExceeded   - totals would overflow u64          │
//! │                                                                         │
//! │  hello-change-cli errors (separate crate)                               │
//! │  ├── ArgsError    - malformed command line                              │
//! │  └── ConfigError  - bad environment configuration                       │
//! │                                                                         │
//! │  NOT an error: "no change possible" is `Ok(None)` from the strategy     │
//! │  and the register.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (denomination, counts)
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::denomination::Denomination;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Malformed input to a core operation.
    ///
    /// ## When This Occurs
    /// - Negative bill count passed to [`Cash::from_counts`](crate::Cash::from_counts)
    /// - Zero count passed to [`Cash::from_single_denomination`](crate::Cash::from_single_denomination)
    /// - Unknown face value passed to [`Denomination::from_face_value`]
    /// - Negative change amount, or one above
    ///   [`DpChangeStrategy::MAX_AMOUNT`](crate::DpChangeStrategy::MAX_AMOUNT)
    /// - Counts whose money amount or bill count does not fit in `u64`
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A subtraction would drive a denomination's count below zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Register holds: 1 x $5
    ///      │
    ///      ▼
    /// take 0 0 3 0 0
    ///      │
    ///      ▼
    /// InsufficientFunds { denomination: $5, requested: 3, available: 1 }
    ///      │
    ///      ▼
    /// UI shows: "Sorry: Not sufficient $5 bills: requested 3, available 1"
    /// ```
    #[error("Not sufficient {denomination} bills: requested {requested}, available {available}")]
    InsufficientFunds {
        denomination: Denomination,
        requested: u64,
        available: u64,
    },

    /// A deposit would push a bill count or a total past `u64::MAX`.
    ///
    /// The register keeps its previous contents.
    #[error("Cash capacity exceeded: bill counts and totals must not exceed {}", u64::MAX)]
    CapacityExceeded,
}

impl CoreError {
    /// Shorthand for building a [`CoreError::InvalidArgument`].
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientFunds {
            denomination: Denomination::Five,
            requested: 3,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Not sufficient $5 bills: requested 3, available 1"
        );

        let err = CoreError::invalid_argument("count must be positive");
        assert_eq!(err.to_string(), "Invalid argument: count must be positive");

        assert_eq!(
            CoreError::CapacityExceeded.to_string(),
            "Cash capacity exceeded: bill counts and totals must not exceed 18446744073709551615"
        );
    }
}
