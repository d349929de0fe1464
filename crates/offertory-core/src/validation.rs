//! # Validation Module
//!
//! Record checks for the layer that creates payments.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Payment form (browser)                                       │
//! │  └── Immediate feedback while typing                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── validate_receipt_record before saving / exporting                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ReceiptDocumentBuilder                                       │
//! │  └── Only rejects negative amounts and blank reasons; everything       │
//! │      else prints, even when incomplete                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use offertory_core::validation::{validate_currency_code, validate_payer_name};
//!
//! assert!(validate_payer_name("Tendai Moyo").is_ok());
//! assert!(validate_currency_code("usd1").is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{non_blank, PaymentReason, ReceiptRecord};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest accepted person name.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates the payer's full name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
pub fn validate_payer_name(name: &str) -> ValidationResult<()> {
    validate_name("full_name", name)
}

/// Validates the name of the staff member who received the payment.
pub fn validate_received_by(name: &str) -> ValidationResult<()> {
    validate_name("received_by", name)
}

fn validate_name(field: &str, name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates the free-text reason.
///
/// ## Rules
/// - Required when the reason is `Other`
/// - Ignored for every other reason
pub fn validate_reason_other(
    reason: &PaymentReason,
    reason_other: &Option<String>,
) -> ValidationResult<()> {
    if *reason == PaymentReason::Other && non_blank(reason_other).is_none() {
        return Err(ValidationError::Required {
            field: "reason_other".to_string(),
        });
    }

    Ok(())
}

/// Validates an ISO 4217 code: exactly three ASCII letters.
///
/// ## Example
/// ```rust
/// use offertory_core::validation::validate_currency_code;
///
/// assert!(validate_currency_code("ZAR").is_ok());
/// assert!(validate_currency_code("").is_err());
/// assert!(validate_currency_code("RAND").is_err());
/// ```
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be a three-letter ISO code".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a payment amount.
///
/// ## Rules
/// - Must round to at least one cent; zero-value receipts are not recorded
/// - Must fit in 64-bit cents
///
/// ## Example
/// ```rust
/// use offertory_core::validation::validate_amount;
/// use rust_decimal::Decimal;
///
/// assert!(validate_amount(Decimal::new(5, 3)).is_ok()); // 0.005 prints $0.01
/// assert!(validate_amount(Decimal::new(4, 3)).is_err()); // 0.004 prints $0.00
/// ```
pub fn validate_amount(amount: Decimal) -> ValidationResult<()> {
    let money = Money::from_decimal(amount).map_err(|_| ValidationError::InvalidFormat {
        field: "amount".to_string(),
        reason: "is too large".to_string(),
    })?;

    if !money.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Record Validator
// =============================================================================

/// Runs every check on a record and returns the first failure.
///
/// ## Check Order
/// full_name → amount → received_by → reason_other → currency
pub fn validate_receipt_record(record: &ReceiptRecord) -> ValidationResult<()> {
    validate_payer_name(&record.full_name)?;
    validate_amount(record.amount)?;
    validate_received_by(&record.received_by)?;
    validate_reason_other(&record.reason, &record.reason_other)?;
    validate_currency_code(record.currency.code())?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Currency;
    use rust_decimal_macros::dec;

    fn record() -> ReceiptRecord {
        serde_json::from_value(serde_json::json!({
            "receipt_number": "RCP-0001",
            "full_name": "Tendai Moyo",
            "amount": 10,
            "reason": "offering",
            "payment_method": "cash",
            "received_by": "Elder Chipo"
        }))
        .unwrap()
    }

    #[test]
    fn test_validate_names() {
        assert!(validate_payer_name("Tendai Moyo").is_ok());
        assert!(validate_payer_name("").is_err());
        assert!(validate_payer_name("   ").is_err());
        assert!(validate_payer_name(&"A".repeat(201)).is_err());
        assert!(validate_received_by(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_amount() {
        assert!(validate_amount(dec!(0.01)).is_ok());
        assert!(validate_amount(dec!(0)).is_err());
        assert!(validate_amount(dec!(-5)).is_err());
    }

    #[test]
    fn test_validate_amount_uses_printed_cents() {
        assert!(matches!(
            validate_amount(dec!(0.004)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(validate_amount(dec!(0.005)).is_ok());
        assert!(matches!(
            validate_amount(Decimal::MAX),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_validate_reason_other() {
        assert!(validate_reason_other(&PaymentReason::Tithe, &None).is_ok());
        assert!(validate_reason_other(&PaymentReason::Other, &None).is_err());
        assert!(validate_reason_other(&PaymentReason::Other, &Some(" ".to_string())).is_err());
        assert!(
            validate_reason_other(&PaymentReason::Other, &Some("Choir Uniforms".to_string()))
                .is_ok()
        );
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("zwl").is_ok());
        assert!(validate_currency_code("US").is_err());
        assert!(validate_currency_code("U$D").is_err());
    }

    #[test]
    fn test_validate_record_ok() {
        assert!(validate_receipt_record(&record()).is_ok());
    }

    #[test]
    fn test_validate_record_first_failure() {
        let mut record = record();
        record.full_name = String::new();
        record.amount = dec!(0);
        let err = validate_receipt_record(&record).unwrap_err();
        assert!(matches!(err, ValidationError::Required { ref field } if field == "full_name"));
    }

    #[test]
    fn test_validate_record_missing_receiver() {
        let mut record = record();
        record.received_by = " ".to_string();
        let err = validate_receipt_record(&record).unwrap_err();
        assert_eq!(err.to_string(), "received_by is required");
    }

    #[test]
    fn test_validate_record_unknown_currency() {
        let mut record = record();
        record.currency = Currency::Unknown("DOLLARS".to_string());
        assert!(matches!(
            validate_receipt_record(&record).unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
    }
}
