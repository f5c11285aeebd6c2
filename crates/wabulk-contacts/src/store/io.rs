//! CSV exchange format: at least a `Number` column, optional `Name` column.
//! Import tolerates missing and extra columns; export writes exactly
//! `Name,Number`.

use serde::{Deserialize, Serialize};
use wabulk_core::contact::Contact;
use wabulk_core::error::WabulkError;

/// One row of an external tabular source. Both columns are optional so a
/// malformed row surfaces as a skip, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportRow {
    #[serde(default, alias = "Name")]
    pub name: Option<String>,
    #[serde(default, alias = "Number")]
    pub number: Option<String>,
}

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Number")]
    number: &'a str,
}

/// Read rows from a CSV file.
pub fn read_rows(path: &str) -> Result<Vec<ImportRow>, WabulkError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| WabulkError::Contacts(format!("failed to open {path}: {e}")))?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<ImportRow>() {
        match record {
            Ok(row) => rows.push(row),
            // A row the parser cannot shape still counts as a row — it just
            // has no usable number and gets skipped downstream.
            Err(_) => rows.push(ImportRow::default()),
        }
    }
    Ok(rows)
}

/// Write contacts to a CSV file with a `Name,Number` header.
pub fn write_contacts(path: &str, contacts: &[Contact]) -> Result<(), WabulkError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| WabulkError::Contacts(format!("failed to create {path}: {e}")))?;

    for contact in contacts {
        writer
            .serialize(ExportRow {
                name: contact.name.as_deref().unwrap_or(""),
                number: &contact.number,
            })
            .map_err(|e| WabulkError::Contacts(format!("failed to write row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| WabulkError::Contacts(format!("failed to flush {path}: {e}")))?;
    Ok(())
}
