use tempfile::tempdir;

use crate::engine::core::table::TableFile;
use crate::engine::source::ColumnReader;
use crate::test_helpers::factories::TableFileFactory;

#[test]
fn writes_readable_table_file() {
    let dir = tempdir().unwrap();
    let path = TableFileFactory::new().with_rows_per_block(3).create_in(dir.path());

    let file = TableFile::open(&path).unwrap();
    let table = file.table("DecayTree").unwrap();
    assert_eq!(table.row_count(), 10);

    let px = table.meta().column("H1_PX").unwrap();
    assert_eq!(px.blocks.len(), 4);
    assert!(table.meta().column("eventNumber").is_some());
}

#[test]
fn honours_table_name_and_omitted_column() {
    let dir = tempdir().unwrap();
    let path = TableFileFactory::new()
        .with_table("Other")
        .without_column("H1_PZ")
        .create_in(dir.path());

    let file = TableFile::open(&path).unwrap();
    assert!(file.table("DecayTree").is_err());
    let table = file.table("Other").unwrap();
    assert!(table.meta().column("H1_PZ").is_none());
}
