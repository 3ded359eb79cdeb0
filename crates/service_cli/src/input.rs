//! Risk register loading
//!
//! Reads [`RiskRecord`]s from CSV or JSON files. The format is chosen by
//! file extension.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use costsim_core::RiskRecord;
use tracing::debug;

use crate::{CliError, Result};

/// Load a risk register from `path`
pub fn load_records(path: &Path) -> Result<Vec<RiskRecord>> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    let reader = BufReader::new(File::open(path)?);
    let records = match extension.as_deref() {
        Some("csv") => read_csv_records(reader)?,
        Some("json") => read_json_records(reader)?,
        _ => {
            return Err(CliError::InvalidArgument(format!(
                "Unsupported input file: {}. Supported: .csv, .json",
                path.display()
            )))
        }
    };

    debug!(path = %path.display(), records = records.len(), "Loaded risk register");
    Ok(records)
}

/// Read CSV rows with a header matching the [`RiskRecord`] field names
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<RiskRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Read a JSON array of [`RiskRecord`]s
pub fn read_json_records<R: Read>(reader: R) -> Result<Vec<RiskRecord>> {
    Ok(serde_json::from_reader(reader)?)
}
