//! # Domain Types
//!
//! Records and tag enums consumed by the receipt builder.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ReceiptRecord   │   │  PaymentReason  │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  receipt_number │   │  Tithe          │   │  Cash           │       │
//! │  │  full_name      │   │  Offering       │   │  BankTransfer   │       │
//! │  │  amount         │   │  Subscription   │   │  EcoCash        │       │
//! │  │  currency       │   │  Project        │   │  OtherMobile    │       │
//! │  │  reason         │   │  Conference     │   │  Unknown(tag)   │       │
//! │  │  payment_method │   │  Other          │   └─────────────────┘       │
//! │  │  received_by    │   │  Unknown(tag)   │                             │
//! │  └─────────────────┘   └─────────────────┘   ┌─────────────────┐       │
//! │                                              │    Currency     │       │
//! │  ┌─────────────────┐                         │  Usd Zwl Zar    │       │
//! │  │  Letterhead     │  church name, subtitle, │  Unknown(code)  │       │
//! │  │  (config)       │  contact details        └─────────────────┘       │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tags With an Unknown Arm
//! The backend sends reasons, methods and currencies as raw strings. Each
//! enum deserializes through `From<String>`, so a tag the frontend does not
//! know yet lands in `Unknown(tag)` and prints as itself instead of failing
//! the whole record.

use std::borrow::Cow;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::words::money_to_words;

// =============================================================================
// Payment Reason
// =============================================================================

/// Why the money was given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentReason {
    Tithe,
    Offering,
    Subscription,
    /// Building or project fund.
    Project,
    /// Conference fund.
    Conference,
    /// Free-text reason in `ReceiptRecord::reason_other`.
    Other,
    /// Tag with no registered label.
    Unknown(String),
}

impl PaymentReason {
    /// Every registered reason, in form display order.
    pub const KNOWN: [PaymentReason; 6] = [
        PaymentReason::Tithe,
        PaymentReason::Offering,
        PaymentReason::Subscription,
        PaymentReason::Project,
        PaymentReason::Conference,
        PaymentReason::Other,
    ];

    /// Raw tag as stored by the backend.
    pub fn tag(&self) -> &str {
        match self {
            PaymentReason::Tithe => "tithe",
            PaymentReason::Offering => "offering",
            PaymentReason::Subscription => "subscription",
            PaymentReason::Project => "project",
            PaymentReason::Conference => "conference",
            PaymentReason::Other => "other",
            PaymentReason::Unknown(tag) => tag,
        }
    }

    /// Display label; unknown tags display as themselves.
    pub fn label(&self) -> &str {
        match self {
            PaymentReason::Tithe => "Tithe",
            PaymentReason::Offering => "Offering",
            PaymentReason::Subscription => "Subscription",
            PaymentReason::Project => "Building/Project",
            PaymentReason::Conference => "Conference Fund",
            PaymentReason::Other => "Other",
            PaymentReason::Unknown(tag) => tag,
        }
    }
}

impl From<String> for PaymentReason {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "tithe" => PaymentReason::Tithe,
            "offering" => PaymentReason::Offering,
            "subscription" => PaymentReason::Subscription,
            "project" => PaymentReason::Project,
            "conference" => PaymentReason::Conference,
            "other" => PaymentReason::Other,
            _ => PaymentReason::Unknown(tag),
        }
    }
}

impl From<PaymentReason> for String {
    fn from(reason: PaymentReason) -> Self {
        match reason {
            PaymentReason::Unknown(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for PaymentReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How the money was received.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethod {
    /// Physical cash.
    Cash,
    BankTransfer,
    /// EcoCash mobile money.
    EcoCash,
    /// Any other mobile money wallet.
    OtherMobile,
    /// Tag with no registered label.
    Unknown(String),
}

impl PaymentMethod {
    /// Every registered method, in form display order.
    pub const KNOWN: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::BankTransfer,
        PaymentMethod::EcoCash,
        PaymentMethod::OtherMobile,
    ];

    pub fn tag(&self) -> &str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::BankTransfer => "bank_transfer",
            PaymentMethod::EcoCash => "ecocash",
            PaymentMethod::OtherMobile => "other_mobile",
            PaymentMethod::Unknown(tag) => tag,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::EcoCash => "EcoCash",
            PaymentMethod::OtherMobile => "Other Mobile",
            PaymentMethod::Unknown(tag) => tag,
        }
    }
}

impl From<String> for PaymentMethod {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "cash" => PaymentMethod::Cash,
            "bank_transfer" => PaymentMethod::BankTransfer,
            "ecocash" => PaymentMethod::EcoCash,
            "other_mobile" => PaymentMethod::OtherMobile,
            _ => PaymentMethod::Unknown(tag),
        }
    }
}

impl From<PaymentMethod> for String {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Unknown(tag) => tag,
            known => known.tag().to_string(),
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Currency
// =============================================================================

/// ISO 4217 currency of a payment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    #[default]
    Usd,
    /// Zimbabwe dollar.
    Zwl,
    /// South African rand.
    Zar,
    /// Any other code, kept verbatim.
    Unknown(String),
}

impl Currency {
    /// ISO code as stored by the backend.
    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Zwl => "ZWL",
            Currency::Zar => "ZAR",
            Currency::Unknown(code) => code,
        }
    }

    /// Narrow symbol used in en-US money formatting, if the currency has one.
    ///
    /// Codes without one are printed as `ZAR 23.50`.
    pub fn narrow_symbol(&self) -> Option<&'static str> {
        match self {
            Currency::Usd => Some("$"),
            _ => None,
        }
    }
}

impl From<String> for Currency {
    fn from(code: String) -> Self {
        match code.as_str() {
            "USD" => Currency::Usd,
            "ZWL" => Currency::Zwl,
            "ZAR" => Currency::Zar,
            _ => Currency::Unknown(code),
        }
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        match currency {
            Currency::Unknown(code) => code,
            known => known.code().to_string(),
        }
    }
}

// =============================================================================
// Letterhead
// =============================================================================

/// Church letterhead printed on every receipt.
///
/// Configuration, not per-record data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Letterhead {
    /// Printed large at the top left.
    pub name: String,
    /// Assembly / province descriptor under the name.
    pub subtitle: String,
    /// Name used in the closing acknowledgement.
    pub short_name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl Default for Letterhead {
    fn default() -> Self {
        Letterhead {
            name: "APOSTOLIC FAITH MISSION ZIMBABWE".to_string(),
            subtitle: "Chegutu Town Assembly · Mid North Province".to_string(),
            short_name: "AFM Chegutu Assembly".to_string(),
            address: None,
            phone: None,
            email: None,
        }
    }
}

impl Letterhead {
    /// Address, phone and email joined with `·`, blanks skipped.
    ///
    /// `None` when no contact detail is configured.
    pub fn contact_line(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.address, &self.phone, &self.email]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

// =============================================================================
// Receipt Record
// =============================================================================

/// Snapshot of one payment, as loaded from the backend.
///
/// Field names match the backend JSON payload. Everything the layout can
/// live without is optional or defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptRecord {
    /// Assigned by the backend. Empty prints as an empty slot.
    #[serde(default)]
    pub receipt_number: String,

    /// Payer's full name.
    pub full_name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Amount as entered; rounded to cents when printed.
    #[ts(type = "number")]
    pub amount: Decimal,

    #[serde(default)]
    #[ts(as = "String")]
    pub currency: Currency,

    #[ts(as = "String")]
    pub reason: PaymentReason,

    /// Free text used when `reason` is `other`.
    #[serde(default)]
    pub reason_other: Option<String>,

    #[ts(as = "String")]
    pub payment_method: PaymentMethod,

    /// Bank or mobile-money reference.
    #[serde(default)]
    pub payment_reference: Option<String>,

    /// `YYYY-MM-DD` (a full ISO timestamp is accepted too).
    #[serde(default)]
    pub payment_date: Option<String>,

    /// `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub payment_time: Option<String>,

    /// Wording stored when the record was saved.
    #[serde(default)]
    pub amount_in_words: Option<String>,

    /// Staff member who took the payment.
    #[serde(default)]
    pub received_by: String,

    #[serde(default)]
    pub notes: Option<String>,

    /// Per-record church name; overrides the configured letterhead name.
    #[serde(default)]
    pub church_name: Option<String>,
}

impl ReceiptRecord {
    /// Amount rounded to cents.
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`] for a negative or oversized amount.
    pub fn money(&self) -> CoreResult<Money> {
        if self.amount.is_sign_negative() && !self.amount.is_zero() {
            return Err(CoreError::invalid("amount", "must not be negative"));
        }
        Money::from_decimal(self.amount)
    }

    /// Description printed on the line item.
    ///
    /// `Other` prints its override, or the raw `other` tag when the
    /// override is blank. Everything else prints the reason label (raw tag
    /// for unknown reasons).
    pub fn reason_label(&self) -> &str {
        match (&self.reason, non_blank(&self.reason_other)) {
            (PaymentReason::Other, Some(text)) => text,
            (PaymentReason::Other, None) => self.reason.tag(),
            (reason, _) => reason.label(),
        }
    }

    /// Label printed under "Payment Method".
    pub fn method_label(&self) -> &str {
        self.payment_method.label()
    }

    /// Stored wording when present, otherwise computed from the amount.
    ///
    /// ## Example
    /// ```rust
    /// use offertory_core::types::ReceiptRecord;
    ///
    /// let record: ReceiptRecord = serde_json::from_str(r#"{
    ///     "full_name": "Tendai Moyo",
    ///     "amount": 23.5,
    ///     "reason": "tithe",
    ///     "payment_method": "cash"
    /// }"#).unwrap();
    ///
    /// assert_eq!(record.amount_words().unwrap(), "Twenty-Three Dollars and Fifty Cents Only");
    /// ```
    pub fn amount_words(&self) -> CoreResult<Cow<'_, str>> {
        match non_blank(&self.amount_in_words) {
            Some(stored) => Ok(Cow::Borrowed(stored)),
            None => money_to_words(self.money()?).map(Cow::Owned),
        }
    }

    /// Church name for the title block, falling back to the letterhead.
    pub fn church_name<'a>(&'a self, letterhead: &'a Letterhead) -> &'a str {
        non_blank(&self.church_name).unwrap_or(&letterhead.name)
    }
}

/// Trimmed contents of an optional field, `None` when missing or blank.
pub(crate) fn non_blank(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================
