//! # Receipt Export
//!
//! Saves a [`ReceiptDocument`] as `receipt-<number>.json` (the draw
//! operations, for a PDF or print renderer) or `receipt-<number>.txt`
//! (a fixed-width preview).
//!
//! ## Text Rendering
//! ```text
//! page x (mm) ──► column = round(x × width / page_width)
//! page y (mm) ──► row key = round(y × 2)       (half-millimetre rows)
//!
//! rule width ≥ 0.5  →  ====================
//! rule width < 0.5  →  --------------------
//! ```
//! Text runs on the same row that would overlap are pushed right, one
//! space apart, in paint order (a label stays ahead of its value).
//! Wrapped text prints on continuation lines directly under its row.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use offertory_core::document::{Align, DrawOp};
use offertory_core::ReceiptDocument;
use tracing::{debug, info};

use crate::error::{CliError, CliResult};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Serialized draw operations.
    #[default]
    Json,
    /// Fixed-width text preview.
    Text,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Text => "txt",
        }
    }
}

/// Renders the document in `format`.
pub fn render(doc: &ReceiptDocument, format: ExportFormat, text_width: usize) -> CliResult<String> {
    match format {
        ExportFormat::Json => serde_json::to_string_pretty(doc).map_err(CliError::Serialize),
        ExportFormat::Text => Ok(render_text(doc, text_width)),
    }
}

/// Writes `<dir>/<file_stem>.<ext>` and returns the path.
pub fn write_receipt(
    doc: &ReceiptDocument,
    format: ExportFormat,
    dir: &Path,
    text_width: usize,
) -> CliResult<PathBuf> {
    let contents = render(doc, format, text_width)?;

    fs::create_dir_all(dir).map_err(|source| CliError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(format!("{}.{}", doc.file_stem(), format.extension()));
    fs::write(&path, contents).map_err(|source| CliError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), "Receipt written");
    Ok(path)
}

// =============================================================================
// Text Renderer
// =============================================================================

#[derive(Default)]
struct Row {
    /// (line within the row, start column, text), in paint order. Line 0
    /// sits on the baseline; wrapped text continues on lines 1, 2, ...
    texts: Vec<(usize, usize, String)>,
    /// (start column, end column, fill char), drawn on line 0.
    rules: Vec<(usize, usize, char)>,
}

/// Renders the page on a `width`-column grid.
pub fn render_text(doc: &ReceiptDocument, width: usize) -> String {
    let scale = width as f64 / doc.page().width;
    let column = |x: f64| ((x * scale).round().max(0.0) as usize).min(width);
    let mut rows: BTreeMap<i64, Row> = BTreeMap::new();

    for op in doc.ops() {
        match op {
            DrawOp::Text {
                x,
                y,
                text,
                align,
                max_width,
                ..
            } => {
                let lines = match max_width {
                    Some(max) => wrap(text, column(*max).max(1)),
                    None => vec![text.clone()],
                };
                let row = rows.entry(row_key(*y)).or_default();
                for (line_no, line) in lines.into_iter().enumerate() {
                    let len = line.chars().count();
                    let anchor = column(*x);
                    let start = match align {
                        Align::Left => anchor,
                        Align::Center => anchor.saturating_sub(len / 2),
                        Align::Right => anchor.saturating_sub(len),
                    };
                    row.texts.push((line_no, start, line));
                }
            }
            DrawOp::Rule { x1, x2, y, width: stroke, .. } => {
                let fill = if *stroke >= 0.5 { '=' } else { '-' };
                rows.entry(row_key(*y))
                    .or_default()
                    .rules
                    .push((column(*x1), column(*x2), fill));
            }
        }
    }

    debug!(rows = rows.len(), width, "Rendering text receipt");

    let mut out = String::new();
    let mut previous: Option<i64> = None;
    for (key, row) in rows {
        // Keep larger vertical gaps visible
        if previous.is_some_and(|prev| key - prev > 12) {
            out.push('\n');
        }
        for line in row_to_lines(&row, width) {
            out.push_str(line.trim_end());
            out.push('\n');
        }
        previous = Some(key);
    }
    out
}

fn row_key(y: f64) -> i64 {
    (y * 2.0).round() as i64
}

fn row_to_lines(row: &Row, width: usize) -> Vec<String> {
    let line_count = row
        .texts
        .iter()
        .map(|(line_no, _, _)| line_no + 1)
        .max()
        .unwrap_or(1);
    let mut lines: Vec<Vec<char>> = vec![vec![' '; width]; line_count];

    for &(start, end, fill) in &row.rules {
        for cell in lines[0].iter_mut().take(end).skip(start) {
            *cell = fill;
        }
    }

    // Occupied (start, end) spans per line
    let mut placed: Vec<Vec<(usize, usize)>> = vec![Vec::new(); line_count];

    for (line_no, start, text) in &row.texts {
        let len = text.chars().count();
        let spans = &mut placed[*line_no];

        // A run that would touch an earlier one moves past everything
        // already on the line, keeping paint order left to right.
        let collides = spans
            .iter()
            .any(|&(a, b)| *start <= b && a <= start + len);
        let start = if collides {
            spans.iter().map(|&(_, b)| b + 1).max().unwrap_or(*start)
        } else {
            *start
        };
        spans.push((start, start + len));

        let line = &mut lines[*line_no];
        if line.len() < start + len {
            line.resize(start + len, ' ');
        }
        for (cell, ch) in line[start..].iter_mut().zip(text.chars()) {
            *cell = ch;
        }
    }

    lines.into_iter().map(|line| line.into_iter().collect()).collect()
}

/// Greedy word wrap to `width` columns. Words longer than a line are
/// kept whole.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if !current.is_empty() && needed > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use offertory_core::{Letterhead, ReceiptDocumentBuilder, ReceiptRecord};

    fn document() -> ReceiptDocument {
        let record: ReceiptRecord = serde_json::from_value(serde_json::json!({
            "receipt_number": "RCP-2026-0042",
            "full_name": "Tendai Moyo",
            "amount": 23.5,
            "reason": "tithe",
            "payment_method": "bank_transfer",
            "payment_date": "2026-02-15",
            "received_by": "Elder Chipo"
        }))
        .unwrap();
        ReceiptDocumentBuilder::new(Letterhead::default())
            .build(&record)
            .unwrap()
    }

    #[test]
    fn test_text_render_title_row() {
        let text = render_text(&document(), 80);
        assert!(text
            .lines()
            .any(|l| l.trim_start().starts_with("APOSTOLIC FAITH MISSION ZIMBABWE")
                && l.ends_with("Receipt")));
    }

    #[test]
    fn test_text_render_rules() {
        let text = render_text(&document(), 80);
        assert!(text.lines().any(|l| l.trim().chars().all(|c| c == '=') && l.trim().len() > 50));
        assert!(text.lines().any(|l| l.trim().chars().all(|c| c == '-') && l.trim().len() > 50));
    }

    #[test]
    fn test_text_render_keeps_all_fields() {
        let text = render_text(&document(), 80);
        for needle in [
            "RECEIPT NUMBER:",
            "RCP-2026-0042",
            "Date: February 15, 2026",
            "Paid In Full",
            "Bank Transfer",
            "Received by: Elder Chipo",
            "Signature",
        ] {
            assert!(text.contains(needle), "missing {needle}:\n{text}");
        }
    }

    #[test]
    fn test_row_overlap_pushes_right() {
        let row = Row {
            texts: vec![(0, 0, "LEFT".to_string()), (0, 2, "RIGHT".to_string())],
            rules: vec![],
        };
        assert_eq!(row_to_lines(&row, 12)[0].trim_end(), "LEFT RIGHT");
    }

    #[test]
    fn test_overlap_keeps_paint_order() {
        // A value anchored left of its label still prints after it
        let row = Row {
            texts: vec![(0, 6, "LABEL:".to_string()), (0, 2, "value".to_string())],
            rules: vec![],
        };
        assert_eq!(row_to_lines(&row, 20)[0].trim_end(), "      LABEL: value");
    }

    #[test]
    fn test_text_overwrites_rule() {
        let row = Row {
            texts: vec![(0, 2, "ab".to_string())],
            rules: vec![(0, 6, '-')],
        };
        assert_eq!(row_to_lines(&row, 8), vec!["--ab--  ".to_string()]);
    }

    #[test]
    fn test_continuation_lines_stay_in_row() {
        let row = Row {
            texts: vec![
                (0, 0, "first".to_string()),
                (1, 0, "second".to_string()),
                (0, 10, "$5.00".to_string()),
            ],
            rules: vec![],
        };
        let lines = row_to_lines(&row, 16);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].trim_end(), "first     $5.00");
        assert_eq!(lines[1].trim_end(), "second");
    }

    #[test]
    fn test_narrow_render_keeps_labels_before_values() {
        let text = render_text(&document(), 40);

        let number_row = text
            .lines()
            .find(|l| l.contains("RCP-2026-0042"))
            .unwrap();
        let label = number_row.find("RECEIPT NUMBER:").unwrap();
        assert!(label < number_row.find("RCP-2026-0042").unwrap(), "{number_row}");

        let method_row = text.lines().find(|l| l.contains("Bank Transfer")).unwrap();
        let label = method_row.find("Payment Method").unwrap();
        assert!(label < method_row.find("Bank Transfer").unwrap(), "{method_row}");
    }

    #[test]
    fn test_narrow_render_wraps_long_reason_above_words() {
        let record: ReceiptRecord = serde_json::from_value(serde_json::json!({
            "receipt_number": "RCP-2026-0043",
            "full_name": "Tendai Moyo",
            "amount": 23.5,
            "reason": "other",
            "reason_other": "Youth camp transport fund for the northern district choir uniform project",
            "payment_method": "cash",
            "received_by": "Elder Chipo"
        }))
        .unwrap();
        let doc = ReceiptDocumentBuilder::new(Letterhead::default())
            .build(&record)
            .unwrap();
        let text = render_text(&doc, 40);
        let lines: Vec<&str> = text.lines().collect();

        let last_reason = lines.iter().position(|l| l.contains("project")).unwrap();
        let words = lines.iter().position(|l| l.contains("Twenty-Three")).unwrap();
        assert!(last_reason < words, "{text}");
        assert!(!lines[words].contains("project"));

        // Every word of the override survives the wrap
        for word in ["Youth", "camp", "transport", "northern", "district", "choir", "uniform"] {
            assert!(text.contains(word), "missing {word}:\n{text}");
        }
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("one two three", 7), vec!["one two", "three"]);
        assert_eq!(wrap("averyveryverylongword", 5), vec!["averyveryverylongword"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_json_render_lists_draw_ops() {
        let doc = document();
        let json = render(&doc, ExportFormat::Json, 80).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let ops = value["ops"].as_array().unwrap();
        assert_eq!(ops.len(), doc.ops().len());
        assert_eq!(ops[0]["kind"], "text");
        assert!(ops.iter().any(|op| op["kind"] == "rule"));
        assert_eq!(value["file_stem"], "receipt-RCP-2026-0042");
    }

    #[test]
    fn test_write_receipt_names_file_after_number() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested");

        let path = write_receipt(&document(), ExportFormat::Text, &out, 80).unwrap();
        assert_eq!(path, out.join("receipt-RCP-2026-0042.txt"));
        assert!(fs::read_to_string(&path).unwrap().contains("Paid In Full"));

        let path = write_receipt(&document(), ExportFormat::Json, &out, 80).unwrap();
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("json"));
    }
}
