//! # Receipt Layout
//!
//! Lays out one payment as a single A4 page of draw operations.
//!
//! ## Page Structure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CHURCH NAME (bold 18)                                   Receipt (28)   │
//! │  subtitle (9, grey)                                                     │
//! │ ─────────────────────────────────────────────────────────────────────── │ 0.2
//! │ ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ │ 0.8
//! │  CUSTOMER DETAILS                          RECEIPT NUMBER:   RCP-0042   │
//! │  Payer Name (bold 14)                          Date: February 15, 2026  │
//! │  email / phone                                                          │
//! │                                                                         │
//! │  DESCRIPTION OF SERVICES                                       AMOUNT   │
//! │ ─────────────────────────────────────────────────────────────────────── │ 0.1
//! │  Tithe                                                         $23.50   │
//! │  Twenty-Three Dollars and Fifty Cents Only (italic)                     │
//! │ ─────────────────────────────────────────────────────────────────────── │
//! │  Transaction Status                                      Paid In Full   │
//! │ ─────────────────────────────────────────────────────────────────────── │
//! │                                         Payment Method           Cash   │
//! │                                        ──────────────────────────────── │
//! │                                         Total Paid             $23.50   │
//! │                                                                         │
//! │  Received by: Elder Chipo                           Signature           │
//! │  ────────────────────                      ────────────────────         │
//! │ ─────────────────────────────────────────────────────────────────────── │
//! │                  Thanks for doing business with us!                     │
//! │            Thank you for choosing ... (italic acknowledgement)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The vertical cursor only moves down. Nothing is paginated; a very long
//! description simply runs off the bottom of the page.
//!
//! ## Failure Policy
//! Missing optional data (receipt number, date, contact lines) prints as an
//! empty slot. Only a negative/oversized amount or a blank reason tag is
//! rejected, since a receipt without an amount or description is worse than
//! no receipt.

use tracing::{debug, trace};

use crate::document::{
    receipt_file_stem, Align, DrawOp, FontWeight, PageSize, ReceiptDocument, Rgb, TextStyle,
};
use crate::error::{CoreError, CoreResult};
use crate::format::{format_currency, format_long_date, format_time};
use crate::types::{Currency, Letterhead, PaymentMethod, PaymentReason, ReceiptRecord};

/// Page margin in millimetres.
pub const MARGIN: f64 = 20.0;

/// Fixed status line; there are no partial or pending payments.
pub const TRANSACTION_STATUS: &str = "Paid In Full";

const THIN_RULE: f64 = 0.2;
const THICK_RULE: f64 = 0.8;
const HAIRLINE: f64 = 0.1;

/// Width of the right-aligned payment summary box.
const SUMMARY_WIDTH: f64 = 60.0;
/// Length of each signature line.
const SIGNATURE_WIDTH: f64 = 50.0;

const SECONDARY: Rgb = Rgb::grey(80);
const SUBTLE: Rgb = Rgb::grey(100);

// =============================================================================
// Builder
// =============================================================================

/// Builds [`ReceiptDocument`]s for one church letterhead.
///
/// Stateless between calls: the same record always yields the same
/// document, and one builder can be shared across threads.
///
/// ## Example
/// ```rust
/// use offertory_core::receipt::ReceiptDocumentBuilder;
/// use offertory_core::types::{Letterhead, ReceiptRecord};
///
/// let record: ReceiptRecord = serde_json::from_str(r#"{
///     "receipt_number": "RCP-0042",
///     "full_name": "Tendai Moyo",
///     "amount": 23.5,
///     "reason": "tithe",
///     "payment_method": "cash",
///     "payment_date": "2026-02-15",
///     "received_by": "Elder Chipo"
/// }"#).unwrap();
///
/// let builder = ReceiptDocumentBuilder::new(Letterhead::default());
/// let doc = builder.build(&record).unwrap();
///
/// assert_eq!(doc.file_stem(), "receipt-RCP-0042");
/// assert!(doc.texts().any(|t| t == "Twenty-Three Dollars and Fifty Cents Only"));
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptDocumentBuilder {
    letterhead: Letterhead,
    page: PageSize,
}

impl ReceiptDocumentBuilder {
    pub fn new(letterhead: Letterhead) -> Self {
        ReceiptDocumentBuilder {
            letterhead,
            page: PageSize::A4,
        }
    }

    pub fn letterhead(&self) -> &Letterhead {
        &self.letterhead
    }

    /// Lays out `record` on a single page.
    ///
    /// ## Errors
    /// [`CoreError::InvalidArgument`] when the amount is negative or too
    /// large, or the reason tag is blank.
    pub fn build(&self, record: &ReceiptRecord) -> CoreResult<ReceiptDocument> {
        if record.reason.tag().trim().is_empty() {
            return Err(CoreError::invalid("reason", "must not be blank"));
        }
        let amount = record.money()?;
        let words = record.amount_words()?;

        log_fallbacks(record);

        let amount_text = format_currency(amount, &record.currency);
        let mut page = Canvas::new(self.page);
        let left = MARGIN;
        let right = self.page.width - MARGIN;
        let content_width = right - left;
        let mut y = MARGIN + 10.0;

        // Title block
        page.text(
            left,
            y,
            record.church_name(&self.letterhead),
            TextStyle::new(18.0, FontWeight::Bold),
            Align::Left,
        );
        page.text(
            left,
            y + 5.0,
            &self.letterhead.subtitle,
            TextStyle::new(9.0, FontWeight::Normal).color(SUBTLE),
            Align::Left,
        );
        page.text(
            right,
            y,
            "Receipt",
            TextStyle::new(28.0, FontWeight::Light),
            Align::Right,
        );

        // Double rule: thin stroke, then a heavier one just below
        y += 15.0;
        page.rule(left, right, y, THIN_RULE);
        page.rule(left, right, y + 1.5, THICK_RULE);

        // Customer details (left) and receipt info (right)
        y += 15.0;
        let label = TextStyle::new(8.0, FontWeight::Bold);
        page.text(left, y, "CUSTOMER DETAILS", label, Align::Left);
        page.text(
            left,
            y + 7.0,
            &record.full_name,
            TextStyle::new(14.0, FontWeight::Bold),
            Align::Left,
        );

        let contact = TextStyle::new(9.0, FontWeight::Medium).color(SECONDARY);
        let mut contact_y = y + 14.0;
        for line in [&record.email, &record.phone]
            .into_iter()
            .filter_map(|field| field.as_deref())
            .filter(|line| !line.trim().is_empty())
        {
            page.text(left, contact_y, line, contact, Align::Left);
            contact_y += 5.0;
        }

        page.text(right - 50.0, y, "RECEIPT NUMBER:", label, Align::Left);
        page.text(
            right,
            y,
            &record.receipt_number,
            TextStyle::new(8.0, FontWeight::Black),
            Align::Right,
        );
        page.text(
            right,
            y + 5.0,
            &date_line(record),
            TextStyle::new(8.0, FontWeight::Medium).color(SECONDARY),
            Align::Right,
        );

        // Line item table
        y += 25.0;
        let header = TextStyle::new(8.0, FontWeight::Black);
        page.text(left, y, "DESCRIPTION OF SERVICES", header, Align::Left);
        page.text(right, y, "AMOUNT", header, Align::Right);
        y += 3.0;
        page.rule(left, right, y, HAIRLINE);

        y += 8.0;
        let item = TextStyle::new(10.0, FontWeight::Bold);
        page.wrapped_text(left, y, record.reason_label(), item, content_width * 0.7);
        page.text(right, y, &amount_text, item, Align::Right);

        y += 5.0;
        page.wrapped_text(
            left,
            y,
            &words,
            TextStyle::new(8.0, FontWeight::Normal)
                .italic()
                .color(SECONDARY),
            content_width * 0.7,
        );

        // Transaction status, framed by hairlines
        y += 8.0;
        page.rule(left, right, y, HAIRLINE);
        y += 5.0;
        page.text(left, y, "Transaction Status", label, Align::Left);
        page.text(right, y, TRANSACTION_STATUS, header, Align::Right);
        y += 3.0;
        page.rule(left, right, y, HAIRLINE);

        // Summary box
        y += 12.0;
        let summary_x = right - SUMMARY_WIDTH;
        page.text(summary_x, y, "Payment Method", label, Align::Left);
        page.text(
            right,
            y,
            record.method_label(),
            TextStyle::new(8.0, FontWeight::Normal),
            Align::Right,
        );
        y += 3.0;
        page.rule(summary_x, right, y, HAIRLINE);
        y += 5.0;
        page.text(
            summary_x,
            y,
            "Total Paid",
            TextStyle::new(9.0, FontWeight::Black),
            Align::Left,
        );
        page.text(
            right,
            y,
            &amount_text,
            TextStyle::new(14.0, FontWeight::Black),
            Align::Right,
        );

        // Signature lines, captions sit just above the line
        y += 20.0;
        let caption = TextStyle::new(8.0, FontWeight::Normal).color(SECONDARY);
        page.rule(left, left + SIGNATURE_WIDTH, y, HAIRLINE);
        page.text(
            left,
            y - 2.0,
            &format!("Received by: {}", record.received_by),
            caption,
            Align::Left,
        );
        page.rule(right - SIGNATURE_WIDTH, right, y, HAIRLINE);
        page.text(
            right - SIGNATURE_WIDTH / 2.0,
            y - 2.0,
            "Signature",
            caption,
            Align::Center,
        );

        // Footer
        y += 15.0;
        page.rule(left, right, y, THIN_RULE);
        let center = self.page.width / 2.0;
        y += 8.0;
        page.text(
            center,
            y,
            "Thanks for doing business with us!",
            TextStyle::new(10.0, FontWeight::Bold),
            Align::Center,
        );
        y += 5.0;
        page.push(DrawOp::Text {
            x: center,
            y,
            text: acknowledgement(&self.letterhead),
            style: TextStyle::new(8.0, FontWeight::Normal)
                .italic()
                .color(SECONDARY),
            align: Align::Center,
            max_width: Some(content_width * 0.8),
        });
        if let Some(contact_line) = self.letterhead.contact_line() {
            y += 6.0;
            page.text(
                center,
                y,
                &contact_line,
                TextStyle::new(7.0, FontWeight::Normal).color(SUBTLE),
                Align::Center,
            );
        }

        let document = page.finish(receipt_file_stem(&record.receipt_number));
        trace!(
            receipt_number = %record.receipt_number,
            ops = document.ops().len(),
            "Receipt laid out"
        );
        Ok(document)
    }
}

/// Closing paragraph naming the organization.
pub fn acknowledgement(letterhead: &Letterhead) -> String {
    format!(
        "Thank you for choosing {}. Your generous giving supports the work of the ministry.",
        letterhead.short_name
    )
}

/// `Date: February 15, 2026`, with ` at 2:30 PM` when a time is recorded.
fn date_line(record: &ReceiptRecord) -> String {
    let date = format_long_date(record.payment_date.as_deref().unwrap_or_default());
    let time = format_time(record.payment_time.as_deref().unwrap_or_default());
    match (date.is_empty(), time.is_empty()) {
        (_, true) => format!("Date: {date}"),
        (true, false) => format!("Time: {time}"),
        (false, false) => format!("Date: {date} at {time}"),
    }
}

fn log_fallbacks(record: &ReceiptRecord) {
    if let PaymentReason::Unknown(tag) = &record.reason {
        debug!(%tag, "No label for payment reason, printing raw tag");
    }
    if let PaymentMethod::Unknown(tag) = &record.payment_method {
        debug!(%tag, "No label for payment method, printing raw tag");
    }
    if let Currency::Unknown(code) = &record.currency {
        debug!(%code, "Unregistered currency, printing code prefix");
    }
    if record.amount_in_words.as_deref().is_some_and(|w| !w.trim().is_empty()) {
        debug!(receipt_number = %record.receipt_number, "Using stored amount in words");
    }
}

// =============================================================================
// Canvas
// =============================================================================

/// Collects draw operations for one page.
struct Canvas {
    page: PageSize,
    ops: Vec<DrawOp>,
}

impl Canvas {
    fn new(page: PageSize) -> Self {
        Canvas {
            page,
            ops: Vec::with_capacity(40),
        }
    }

    fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    fn text(&mut self, x: f64, y: f64, text: &str, style: TextStyle, align: Align) {
        self.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style,
            align,
            max_width: None,
        });
    }

    fn wrapped_text(&mut self, x: f64, y: f64, text: &str, style: TextStyle, max_width: f64) {
        self.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            style,
            align: Align::Left,
            max_width: Some(max_width),
        });
    }

    fn rule(&mut self, x1: f64, x2: f64, y: f64, width: f64) {
        self.push(DrawOp::Rule {
            x1,
            x2,
            y,
            width,
            color: Rgb::BLACK,
        });
    }

    fn finish(self, file_stem: String) -> ReceiptDocument {
        ReceiptDocument::new(self.page, MARGIN, file_stem, self.ops)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
