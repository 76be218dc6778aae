use rust_decimal::Decimal;
use sgrate_taxonomy::{TaxonomyError, load_taxonomy, normalize};
use std::io::Write;
use std::str::FromStr;

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn taxonomy_csv_normalizes_into_parent_entries() {
    let file = write_csv(
        "parent_of,weight,table,stream_id\n\
         parent_a,0.5,t,child_x\n\
         parent_a,0.5,t,child_y\n",
    );

    let entries = normalize(&load_taxonomy(file.path()).unwrap());

    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert_eq!(entry.stream_id, "parent_a");
    let half = Decimal::from_str("0.5").unwrap();
    assert_eq!(entry.children.len(), 2);
    assert_eq!((entry.children[0].id.as_str(), entry.children[0].weight), ("child_x", half));
    assert_eq!((entry.children[1].id.as_str(), entry.children[1].weight), ("child_y", half));
}

#[test]
fn multi_parent_file_keeps_children_with_their_parents() {
    let file = write_csv(
        "parent_of,weight,table,stream_id\n\
         cpi_food,0.6,t,bread\n\
         cpi_energy,1.0,t,fuel\n\
         cpi_food,0.4,t,milk\n",
    );

    let entries = normalize(&load_taxonomy(file.path()).unwrap());

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].stream_id, "cpi_food");
    assert_eq!(entries[0].children.len(), 2);
    assert_eq!(entries[1].stream_id, "cpi_energy");
    assert_eq!(entries[1].children.len(), 1);
}

#[test]
fn loader_failure_yields_no_records_to_normalize() {
    let file = write_csv(
        "parent_of,weight,table,stream_id\n\
         parent_a,first,t,child_x\n",
    );

    let err = load_taxonomy(file.path()).unwrap_err();
    assert!(matches!(err, TaxonomyError::Parse { .. }));
}
