//! Shared CSV reader plumbing for the two loaders.

use crate::error::{TaxonomyError, TaxonomyErrorExt};
use std::fs::File;
use std::path::Path;

/// Opens a CSV file and consumes its header row.
///
/// The header content is discarded, not validated, but its presence is
/// required: an empty file is a format violation.
pub(crate) fn open_csv(path: &Path) -> Result<csv::Reader<File>, TaxonomyError> {
    let file = File::open(path).context(format!("Opening {}", path.display()))?;

    // flexible so field counts are checked by the loaders themselves, with
    // row numbers in the message.
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(file);

    let headers = reader.headers().map_err(|e| TaxonomyError::Format {
        message: e.to_string().into(),
        context: Some("Reading header row".into()),
    })?;
    if headers.is_empty() {
        return Err(TaxonomyError::Format {
            message: "missing header row".into(),
            context: Some(format!("Reading {}", path.display()).into()),
        });
    }

    Ok(reader)
}

/// Checks that a data row carries exactly `expected` fields.
pub(crate) fn check_field_count(
    record: &csv::StringRecord,
    expected: usize,
    row: usize,
) -> Result<(), TaxonomyError> {
    if record.len() != expected {
        return Err(TaxonomyError::Format {
            message: format!("row {row}: expected {expected} fields, got {}", record.len()).into(),
            context: None,
        });
    }
    Ok(())
}
