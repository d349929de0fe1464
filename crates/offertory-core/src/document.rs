//! # Receipt Document Model
//!
//! A laid-out page: an ordered list of positioned text and rule strokes,
//! in millimetres from the top-left corner. Renderers (PDF, print preview,
//! plain text) consume it; nothing here knows how to draw.
//!
//! ```text
//! (0,0) ───────────────────────────────► x (mm)
//!   │   ┌─────────────────────────────┐
//!   │   │ DrawOp::Text  { x, y, .. }  │  y is the text baseline
//!   │   │ DrawOp::Rule  { x1, x2, y } │  horizontal stroke
//!   ▼   └─────────────────────────────┘
//!   y (mm)
//! ```
//!
//! Content past the bottom of the page is clipped by the renderer; the
//! builder never paginates.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Page
// =============================================================================

/// Page dimensions in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// ISO A4 portrait.
    pub const A4: PageSize = PageSize {
        width: 210.0,
        height: 297.0,
    };
}

// =============================================================================
// Styles
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    Light,
    Normal,
    Medium,
    Bold,
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum FontSlant {
    Upright,
    Italic,
}

/// Horizontal anchor of a text run relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Neutral grey with all three channels at `level`.
    pub const fn grey(level: u8) -> Rgb {
        Rgb(level, level, level)
    }
}

/// Font settings for one text run. `size` is in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TextStyle {
    pub size: f64,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn new(size: f64, weight: FontWeight) -> Self {
        TextStyle {
            size,
            weight,
            slant: FontSlant::Upright,
            color: Rgb::BLACK,
        }
    }

    pub const fn italic(mut self) -> Self {
        self.slant = FontSlant::Italic;
        self
    }

    pub const fn color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }
}

// =============================================================================
// Draw Operations
// =============================================================================

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawOp {
    /// A single line of text with its baseline at `y`.
    Text {
        x: f64,
        y: f64,
        text: String,
        style: TextStyle,
        align: Align,
        /// Wrap width in millimetres, if the renderer should wrap.
        max_width: Option<f64>,
    },
    /// Horizontal stroke from `x1` to `x2`. `width` is the stroke weight.
    Rule {
        x1: f64,
        x2: f64,
        y: f64,
        width: f64,
        color: Rgb,
    },
}

// =============================================================================
// Document
// =============================================================================

/// A finished single-page receipt.
///
/// Immutable once built: fields are private and there are no mutators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptDocument {
    page: PageSize,
    margin: f64,
    file_stem: String,
    ops: Vec<DrawOp>,
}

impl ReceiptDocument {
    pub(crate) fn new(page: PageSize, margin: f64, file_stem: String, ops: Vec<DrawOp>) -> Self {
        ReceiptDocument {
            page,
            margin,
            file_stem,
            ops,
        }
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    pub fn margin(&self) -> f64 {
        self.margin
    }

    /// Suggested file name without extension, e.g. `receipt-RCP-0042`.
    pub fn file_stem(&self) -> &str {
        &self.file_stem
    }

    /// Draw operations in paint order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text of every text run, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            DrawOp::Rule { .. } => None,
        })
    }

    /// Every rule stroke as `(x1, x2, y, width)`, in paint order.
    pub fn rules(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rule { x1, x2, y, width, .. } => Some((*x1, *x2, *y, *width)),
            DrawOp::Text { .. } => None,
        })
    }

    /// First text op whose text equals `needle`.
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }
}

/// `receipt-<number>`, with characters outside `[A-Za-z0-9._-]` replaced.
///
/// ## Example
/// ```rust
/// use offertory_core::document::receipt_file_stem;
///
/// assert_eq!(receipt_file_stem("RCP-2026/0042"), "receipt-RCP-2026_0042");
/// assert_eq!(receipt_file_stem(""), "receipt-unnumbered");
/// ```
pub fn receipt_file_stem(receipt_number: &str) -> String {
    let number = receipt_number.trim();
    if number.is_empty() {
        return "receipt-unnumbered".to_string();
    }

    let safe: String = number
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("receipt-{safe}")
}
