//! # offertory-core: Pure Receipt Logic
//!
//! Turns a church payment record into printable words and a laid-out
//! receipt page. No I/O: callers load records and save documents.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Offertory Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Payments page / receipt-cli                         │   │
//! │  │     load record JSON ──► build ──► save receipt-<n>.<ext>        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ offertory-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  money  │ │  words  │ │ receipt │ │ document │ │ format │  │   │
//! │  │   │ rounding│ │ "Only"  │ │ layout  │ │ draw ops │ │ $ date │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - ReceiptRecord, Letterhead, reason/method/currency tags
//! - [`money`] - Integer-cents Money with decimal rounding
//! - [`words`] - Amount in words
//! - [`format`] - Currency, date and time display strings
//! - [`document`] - ReceiptDocument drawing model
//! - [`receipt`] - ReceiptDocumentBuilder
//! - [`validation`] - Record validation for the saving layer
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use offertory_core::words::amount_to_words;
//! use rust_decimal::Decimal;
//!
//! let words = amount_to_words(Decimal::new(101, 2)).unwrap();
//! assert_eq!(words, "One Dollar and One Cent Only");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod document;
pub mod error;
pub mod format;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use document::ReceiptDocument;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use receipt::ReceiptDocumentBuilder;
pub use types::*;
pub use words::amount_to_words;
