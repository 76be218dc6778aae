//! Taxonomy CSV loading.
//!
//! Expected layout: a header row (discarded) followed by data rows of
//! exactly four ordered fields: `parent_of, weight, table, stream_id`.
//! The `table` field is carried in the file for other tooling and skipped
//! here.

use crate::error::TaxonomyError;
use crate::reader::{check_field_count, open_csv};
use rust_decimal::Decimal;
use sgrate_domain::TaxonomyRecord;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const TAXONOMY_FIELDS: usize = 4;

/// Loads the full ordered list of taxonomy records from a CSV file.
///
/// All-or-nothing: no partial results are returned on error.
///
/// # Errors
/// * [`TaxonomyError::File`] if the file cannot be opened or read.
/// * [`TaxonomyError::Format`] if the CSV is malformed or a row does not
///   carry exactly four fields.
/// * [`TaxonomyError::Parse`] if a weight field is not a valid decimal.
pub fn load_taxonomy(path: impl AsRef<Path>) -> Result<Vec<TaxonomyRecord>, TaxonomyError> {
    let path = path.as_ref();
    let mut reader = open_csv(path)?;

    let mut records = Vec::new();
    for (idx, row) in reader.records().enumerate() {
        // Header is row 1 in the file; data rows are numbered from 2.
        let row_number = idx + 2;
        let record = row.map_err(|e| TaxonomyError::Format {
            message: e.to_string().into(),
            context: Some(format!("Reading row {row_number}").into()),
        })?;
        check_field_count(&record, TAXONOMY_FIELDS, row_number)?;

        let weight = Decimal::from_str(record[1].trim()).map_err(|e| TaxonomyError::Parse {
            message: format!("row {row_number}: weight {:?}: {e}", &record[1]).into(),
            context: Some("Parsing weight".into()),
        })?;

        records.push(TaxonomyRecord {
            parent_of: record[0].trim().to_owned(),
            weight,
            stream_id: record[3].trim().to_owned(),
        });
    }

    debug!(path = %path.display(), rows = records.len(), "Loaded taxonomy CSV");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_rows_in_order() {
        let file = write_csv(
            "parent_of,weight,table,stream_id\n\
             parent_a,0.5,t,child_x\n\
             parent_b,0.25,t,child_y\n",
        );
        let records = load_taxonomy(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].parent_of, "parent_a");
        assert_eq!(records[0].weight, Decimal::from_str("0.5").unwrap());
        assert_eq!(records[0].stream_id, "child_x");
        assert_eq!(records[1].parent_of, "parent_b");
    }

    #[test]
    fn header_is_discarded_not_validated() {
        let file = write_csv("anything,goes,in,here\nparent_a,1,t,child_x\n");
        let records = load_taxonomy(file.path()).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = load_taxonomy("/no/such/taxonomy.csv").unwrap_err();
        assert!(matches!(err, TaxonomyError::File { .. }));
    }

    #[test]
    fn empty_file_is_a_format_error() {
        let file = write_csv("");
        let err = load_taxonomy(file.path()).unwrap_err();
        assert!(matches!(err, TaxonomyError::Format { .. }));
    }

    #[test]
    fn short_row_is_a_format_error() {
        let file = write_csv("parent_of,weight,table,stream_id\nparent_a,0.5,t\n");
        let err = load_taxonomy(file.path()).unwrap_err();
        assert!(matches!(err, TaxonomyError::Format { .. }));
    }

    #[test]
    fn bad_weight_is_a_parse_error_with_no_partial_result() {
        let file = write_csv(
            "parent_of,weight,table,stream_id\n\
             parent_a,0.5,t,child_x\n\
             parent_a,not-a-number,t,child_y\n",
        );
        let err = load_taxonomy(file.path()).unwrap_err();
        assert!(matches!(err, TaxonomyError::Parse { .. }));
        assert!(err.to_string().contains("not-a-number"));
    }
}
