//! # Commands
//!
//! One function per subcommand. Each returns a value for `main` to
//! print; none of them touch stdout.
//!
//! ```text
//! words     "23.50" ──► amount_to_words ──► "Twenty-Three Dollars and Fifty Cents Only"
//! build     record.json ──► validate ──► ReceiptDocumentBuilder ──► receipt-<n>.<ext>
//! validate  record.json ──► validate_receipt_record
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use offertory_core::validation::validate_receipt_record;
use offertory_core::{amount_to_words, ReceiptDocumentBuilder, ReceiptRecord};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::export::{write_receipt, ExportFormat};

/// Spells out a decimal amount.
pub fn words(amount: &str) -> CliResult<String> {
    let amount = Decimal::from_str(amount.trim())
        .map_err(|_| CliError::InvalidAmount(amount.to_string()))?;
    Ok(amount_to_words(amount)?)
}

/// Reads a payment record from a JSON file.
pub fn load_record(path: &Path) -> CliResult<ReceiptRecord> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let record: ReceiptRecord = serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        receipt_number = %record.receipt_number,
        "Record loaded"
    );
    Ok(record)
}

/// Builds and saves the receipt for the record at `record_path`.
///
/// Validation failures are logged and the receipt is still produced,
/// unless `strict` is set.
pub fn build(
    config: &CliConfig,
    record_path: &Path,
    format: ExportFormat,
    out: Option<&Path>,
    strict: bool,
) -> CliResult<PathBuf> {
    let record = load_record(record_path)?;

    if let Err(source) = validate_receipt_record(&record) {
        if strict {
            return Err(CliError::InvalidRecord {
                path: record_path.to_path_buf(),
                source,
            });
        }
        warn!(
            receipt_number = %record.receipt_number,
            error = %source,
            "Record is incomplete, building receipt anyway"
        );
    }

    let document = ReceiptDocumentBuilder::new(config.letterhead.clone()).build(&record)?;
    let dir = out.unwrap_or(&config.output_dir);
    let path = write_receipt(&document, format, dir, config.text_width)?;

    info!(
        receipt_number = %record.receipt_number,
        format = format.extension(),
        "Receipt built"
    );
    Ok(path)
}

/// Checks a record without building anything.
pub fn validate(record_path: &Path) -> CliResult<()> {
    let record = load_record(record_path)?;
    validate_receipt_record(&record).map_err(|source| CliError::InvalidRecord {
        path: record_path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use offertory_core::CoreError;
    use tempfile::TempDir;

    fn write_record(dir: &TempDir, name: &str, json: serde_json::Value) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, json.to_string()).unwrap();
        path
    }

    fn complete_record() -> serde_json::Value {
        serde_json::json!({
            "receipt_number": "RCP-0007",
            "full_name": "Rumbidzai Ncube",
            "email": "rumbi@example.org",
            "amount": 100,
            "currency": "USD",
            "reason": "project",
            "payment_method": "ecocash",
            "payment_date": "2026-03-01",
            "payment_time": "09:15:00",
            "received_by": "Deacon Farai"
        })
    }

    #[test]
    fn test_words() {
        assert_eq!(words("23.50").unwrap(), "Twenty-Three Dollars and Fifty Cents Only");
        assert_eq!(words(" 0 ").unwrap(), "Zero Only");
        assert!(matches!(words("ten"), Err(CliError::InvalidAmount(_))));
        assert!(matches!(
            words("-1"),
            Err(CliError::Core(CoreError::InvalidArgument { .. }))
        ));
    }

    #[test]
    fn test_build_writes_receipt() {
        let dir = tempfile::tempdir().unwrap();
        let record = write_record(&dir, "rcp.json", complete_record());
        let out = dir.path().join("out");

        let path = build(
            &CliConfig::default(),
            &record,
            ExportFormat::Text,
            Some(&out),
            true,
        )
        .unwrap();

        assert_eq!(path, out.join("receipt-RCP-0007.txt"));
        let text = fs::read_to_string(path).unwrap();
        assert!(text.contains("Building/Project"));
        assert!(text.contains("One Hundred Dollars Only"));
        assert!(text.contains("EcoCash"));
    }

    #[test]
    fn test_build_defaults_to_config_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let record = write_record(&dir, "rcp.json", complete_record());
        let config = CliConfig {
            output_dir: dir.path().join("receipts"),
            ..CliConfig::default()
        };

        let path = build(&config, &record, ExportFormat::Json, None, false).unwrap();
        assert_eq!(path, dir.path().join("receipts").join("receipt-RCP-0007.json"));
    }

    #[test]
    fn test_build_incomplete_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut json = complete_record();
        json["received_by"] = serde_json::json!("");
        let record = write_record(&dir, "rcp.json", json);

        // Lenient mode still prints the receipt
        let path = build(
            &CliConfig::default(),
            &record,
            ExportFormat::Json,
            Some(dir.path()),
            false,
        )
        .unwrap();
        assert!(path.exists());

        let err = build(
            &CliConfig::default(),
            &record,
            ExportFormat::Json,
            Some(dir.path()),
            true,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::InvalidRecord { .. }));
    }

    #[test]
    fn test_build_negative_amount_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut json = complete_record();
        json["amount"] = serde_json::json!(-5);
        let record = write_record(&dir, "rcp.json", json);

        let err = build(
            &CliConfig::default(),
            &record,
            ExportFormat::Json,
            Some(dir.path()),
            false,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
    }

    #[test]
    fn test_load_record_errors() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        assert!(matches!(load_record(&missing), Err(CliError::Read { .. })));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        assert!(matches!(load_record(&broken), Err(CliError::Parse { .. })));
    }

    #[test]
    fn test_validate() {
        let dir = tempfile::tempdir().unwrap();
        let ok = write_record(&dir, "ok.json", complete_record());
        assert!(validate(&ok).is_ok());

        let mut json = complete_record();
        json["reason"] = serde_json::json!("other");
        let bad = write_record(&dir, "bad.json", json);
        let err = validate(&bad).unwrap_err();
        assert!(err.to_string().contains("reason_other is required"));
    }
}
