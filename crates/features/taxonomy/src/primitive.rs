//! Primitive-source CSV loading.
//!
//! Mirrors the taxonomy loader without a normalization step: rows of
//! `stream_id, source_type, source_id, update_frequency` become independent
//! records, duplicates included.

use crate::error::TaxonomyError;
use crate::reader::{check_field_count, open_csv};
use sgrate_domain::PrimitiveSourceRecord;
use std::path::Path;
use tracing::debug;

const PRIMITIVE_FIELDS: usize = 4;

/// Loads the full ordered list of primitive-source records from a CSV file.
///
/// # Errors
/// * [`TaxonomyError::File`] if the file cannot be opened or read.
/// * [`TaxonomyError::Format`] if the CSV is malformed or a row does not
///   carry exactly four fields.
/// * [`TaxonomyError::Parse`] if an update-frequency field is not a base-10
///   integer.
pub fn load_primitive_sources(
    path: impl AsRef<Path>,
) -> Result<Vec<PrimitiveSourceRecord>, TaxonomyError> {
    let path = path.as_ref();
    let mut reader = open_csv(path)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        let row_number = idx + 2;
        let record = row.map_err(|e| TaxonomyError::Format {
            message: e.to_string().into(),
            context: Some(format!("Reading row {row_number}").into()),
        })?;
        check_field_count(&record, PRIMITIVE_FIELDS, row_number)?;

        let update_frequency =
            record[3].trim().parse::<u32>().map_err(|e| TaxonomyError::Parse {
                message: format!("row {row_number}: update_frequency {:?}: {e}", &record[3])
                    .into(),
                context: Some("Parsing update_frequency".into()),
            })?;

        records.push(PrimitiveSourceRecord {
            stream_id: record[0].trim().to_owned(),
            source_type: record[1].trim().to_owned(),
            source_id: record[2].trim().to_owned(),
            update_frequency,
        });
    }

    debug!(path = %path.display(), rows = records.len(), "Loaded primitive-source CSV");
    Ok(records)
}
