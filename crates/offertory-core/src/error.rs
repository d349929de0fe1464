//! # Error Types
//!
//! Domain-specific error types for offertory-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  offertory-core errors (this file)                                      │
//! │  ├── CoreError        - Words / layout failures (stop the receipt)      │
//! │  └── ValidationError  - Record field checks (advisory, caller decides)  │
//! │                                                                         │
//! │  receipt-cli errors (separate crate)                                    │
//! │  ├── ConfigError      - Bad OFFERTORY_* environment values              │
//! │  └── CliError         - I/O, JSON, CoreError, and ValidationError       │
//! │                         tagged with the record path                     │
//! │                                                                         │
//! │  Flow: CoreError / ValidationError → CliError → anyhow (main)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Unknown reason/method/currency tags, a missing receipt number, a missing
//! payment date: all of these degrade to raw tags or empty text on the
//! receipt. Only the conditions in [`CoreError`] stop a receipt from
//! being produced.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core receipt logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An input cannot be turned into words or a receipt.
    ///
    /// ## When This Occurs
    /// - Amount is negative (no sign handling in words or on receipts)
    /// - Amount does not fit in 64-bit cents
    /// - Reason tag is blank, so the line item has no description at all
    ///
    /// ## User Workflow
    /// ```text
    /// Download Receipt (amount: -5.00)
    ///      │
    ///      ▼
    /// ReceiptDocumentBuilder::build
    ///      │
    ///      ▼
    /// InvalidArgument { field: "amount", reason: "must not be negative" }
    ///      │
    ///      ▼
    /// UI shows: "Failed to generate receipt"
    /// ```
    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl CoreError {
    /// Shorthand used throughout the crate.
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These mirror the checks the payment form runs before saving a record.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., currency code that is not three letters).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
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
        let err = CoreError::invalid("amount", "must not be negative");
        assert_eq!(err.to_string(), "Invalid amount: must not be negative");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "full_name".to_string(),
        };
        assert_eq!(err.to_string(), "full_name is required");

        let err = ValidationError::TooLong {
            field: "received_by".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "received_by must be at most 200 characters");
    }
}
