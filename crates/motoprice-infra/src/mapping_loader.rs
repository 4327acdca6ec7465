//! CSV loader for the vehicle-model mapping table
//!
//! Expected header: `nama_model,kode_model`. Extra columns are ignored and
//! column order is free. Files exported from spreadsheets often start with a
//! UTF-8 byte-order mark, which is stripped on decode. Any other invalid
//! UTF-8 rejects the file.

use std::path::Path;

use encoding_rs::UTF_8;
use thiserror::Error;

use motoprice_domain::LookupTable;
use motoprice_types::{Error, Resource, Result};

pub const NAME_COLUMN: &str = "nama_model";
pub const CODE_COLUMN: &str = "kode_model";

#[derive(Error, Debug)]
pub enum MappingLoaderError {
    #[error("Failed to parse CSV: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Empty model name in row {row}")]
    EmptyName { row: usize },

    #[error("Invalid model code in row {row}: {value}")]
    InvalidCode { row: usize, value: String },

    #[error("No model rows found")]
    NoRows,

    #[error("File is not valid UTF-8")]
    InvalidEncoding,
}

impl From<MappingLoaderError> for Error {
    fn from(err: MappingLoaderError) -> Self {
        Error::MappingInvalid(err.to_string())
    }
}

/// Load the model table from `path`
///
/// An absent file is reported as `ConfigurationMissing` so the caller can
/// fall back to the placeholder table.
pub fn load_model_table(path: &Path) -> Result<LookupTable> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::missing(Resource::MappingTable, path));
        }
        Err(e) => return Err(e.into()),
    };

    let (decoded, _, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        tracing::error!(path = %path.display(), "model mapping is not valid UTF-8");
        return Err(MappingLoaderError::InvalidEncoding.into());
    }

    let table = parse_model_table(&decoded)?;
    tracing::info!(path = %path.display(), models = table.len(), "loaded model mapping");
    Ok(table)
}

/// Parse mapping CSV text into the model table
pub fn parse_model_table(content: &str) -> Result<LookupTable> {
    let rows = parse_rows(content)?;
    LookupTable::from_entries("model", rows)
}

fn parse_rows(content: &str) -> std::result::Result<Vec<(String, i64)>, MappingLoaderError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let name_idx = column_index(&headers, NAME_COLUMN)?;
    let code_idx = column_index(&headers, CODE_COLUMN)?;

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result?;
        let row_num = row_idx + 2; // header is row 1

        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        let name = record.get(name_idx).unwrap_or("");
        if name.is_empty() {
            return Err(MappingLoaderError::EmptyName { row: row_num });
        }

        let code_str = record.get(code_idx).unwrap_or("");
        let code = parse_code(code_str).ok_or_else(|| MappingLoaderError::InvalidCode {
            row: row_num,
            value: code_str.to_string(),
        })?;

        rows.push((name.to_string(), code));
    }

    if rows.is_empty() {
        return Err(MappingLoaderError::NoRows);
    }

    Ok(rows)
}

fn column_index(
    headers: &csv::StringRecord,
    column: &str,
) -> std::result::Result<usize, MappingLoaderError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| MappingLoaderError::MissingColumn(column.to_string()))
}

/// Integer code; a float with no fractional part ("12.0") is accepted too
fn parse_code(s: &str) -> Option<i64> {
    if let Ok(code) = s.parse::<i64>() {
        return Some(code);
    }
    let value: f64 = s.parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "nama_model,kode_model\nHonda Vario 125,57\nYamaha NMAX,91\nHonda Beat,12\n";

    #[test]
    fn test_parse_sample() {
        let table = parse_model_table(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.resolve("Yamaha NMAX").unwrap(), 91);
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, vec!["Honda Vario 125", "Yamaha NMAX", "Honda Beat"]);
    }

    #[test]
    fn test_columns_in_any_order() {
        let table = parse_model_table("kode_model,nama_model\n7,Suzuki Satria\n").unwrap();
        assert_eq!(table.resolve("Suzuki Satria").unwrap(), 7);
    }

    #[test]
    fn test_missing_column() {
        let err = parse_model_table("model,kode_model\nBeat,1\n").unwrap_err();
        assert!(err.to_string().contains("nama_model"));
    }

    #[test]
    fn test_invalid_code_reports_row() {
        let err = parse_model_table("nama_model,kode_model\nBeat,1\nScoopy,abc\n").unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_float_code_accepted() {
        let table = parse_model_table("nama_model,kode_model\nBeat,12.0\n").unwrap();
        assert_eq!(table.resolve("Beat").unwrap(), 12);
        assert!(parse_model_table("nama_model,kode_model\nBeat,12.5\n").is_err());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let result = parse_model_table("nama_model,kode_model\nBeat,1\nBeat,2\n");
        assert!(matches!(result, Err(Error::MappingInvalid(_))));
    }

    #[test]
    fn test_header_only_rejected() {
        assert!(matches!(
            parse_model_table("nama_model,kode_model\n"),
            Err(Error::MappingInvalid(_))
        ));
    }

    #[test]
    fn test_blank_lines_skipped() {
        let table = parse_model_table("nama_model,kode_model\nBeat,1\n,\nScoopy,2\n").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_load_strips_bom() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\xEF\xBB\xBFnama_model,kode_model\nHonda Beat,12\n")
            .unwrap();
        let table = load_model_table(file.path()).unwrap();
        assert_eq!(table.resolve("Honda Beat").unwrap(), 12);
    }

    #[test]
    fn test_load_invalid_utf8_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // "Yamaha Mio" with a Latin-1 byte in the name
        file.write_all(b"nama_model,kode_model\nYamaha Mi\xF3,41\n")
            .unwrap();
        let err = load_model_table(file.path()).unwrap_err();
        assert!(matches!(err, Error::MappingInvalid(ref msg) if msg.contains("UTF-8")));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_model_table(&dir.path().join("model_mapping.csv")).unwrap_err();
        assert!(err.is_missing(Resource::MappingTable));
    }
}
