use std::fs;

use tempfile::tempdir;

use crate::engine::core::table::{ColumnSlice, TableFile, TableFileWriter};
use crate::engine::errors::ScanError;
use crate::engine::source::{ColumnReader, NoopObserver};
use crate::test_helpers::factory::Factory;

fn unavailable_message(err: ScanError) -> String {
    match err {
        ScanError::SourceUnavailable(msg) => msg,
        other => panic!("expected SourceUnavailable, got {other:?}"),
    }
}

#[test]
fn reopened_file_reads_back_written_values() {
    let dir = tempdir().unwrap();
    let factory = Factory::table_file().with_random_rows(37, 11).with_rows_per_block(8);
    let rows = factory.rows().to_vec();
    let path = factory.create_in(dir.path());

    let file = TableFile::open(&path).unwrap();
    let table = file.table("DecayTree").unwrap();
    let mut io = NoopObserver;
    let mut handles = [
        table.bind_column("H1_PX").unwrap(),
        table.bind_column("H1_PY").unwrap(),
        table.bind_column("H1_PZ").unwrap(),
    ];

    assert_eq!(table.row_count(), 37);
    for (row, expected) in rows.iter().enumerate() {
        for (handle, value) in handles.iter_mut().zip(expected) {
            assert_eq!(table.read_at(handle, row as u64, &mut io).unwrap(), *value);
        }
    }
}

#[test]
fn holds_several_tables() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.cscn");
    let mut writer = TableFileWriter::create(&path).unwrap();
    writer
        .add_table("A", &[("x", ColumnSlice::F64(&[1.0, 2.0, 3.0]))], 2)
        .unwrap();
    writer
        .add_table("B", &[("x", ColumnSlice::F64(&[9.0]))], 2)
        .unwrap();
    writer.finish().unwrap();

    let file = TableFile::open(&path).unwrap();
    assert_eq!(file.catalog().tables.len(), 2);
    let b = file.table("B").unwrap();
    let mut x = b.bind_column("x").unwrap();
    assert_eq!(b.read_at(&mut x, 0, &mut NoopObserver).unwrap(), 9.0);
}

#[test]
fn missing_file_is_unavailable() {
    let dir = tempdir().unwrap();
    let err = TableFile::open(&dir.path().join("nope.cscn")).unwrap_err();
    assert!(unavailable_message(err).contains("nope.cscn"));
}

#[test]
fn foreign_file_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("foreign.bin");
    fs::write(&path, vec![0x42u8; 128]).unwrap();

    let err = TableFile::open(&path).unwrap_err();
    assert!(unavailable_message(err).contains("not a table file"));
}

#[test]
fn truncated_file_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = Factory::table_file().create_in(dir.path());
    let mut bytes = fs::read(&path).unwrap();
    bytes.truncate(bytes.len() - 7);
    fs::write(&path, &bytes).unwrap();

    let err = TableFile::open(&path).unwrap_err();
    assert!(unavailable_message(err).contains("footer"));
}

#[test]
fn corrupted_catalog_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = Factory::table_file().create_in(dir.path());
    let mut bytes = fs::read(&path).unwrap();
    // Last catalog byte sits right before the 24-byte footer.
    let idx = bytes.len() - 25;
    bytes[idx] ^= 0xFF;
    fs::write(&path, &bytes).unwrap();

    let err = TableFile::open(&path).unwrap_err();
    assert!(unavailable_message(err).contains("CRC"));
}

#[test]
fn absent_table_lists_known_tables() {
    let dir = tempdir().unwrap();
    let path = Factory::table_file().with_table("Events").create_in(dir.path());
    let file = TableFile::open(&path).unwrap();

    let err = file.table("DecayTree").err().expect("table should be missing");
    let msg = unavailable_message(err);
    assert!(msg.contains("DecayTree"));
    assert!(msg.contains("Events"));
}

#[test]
fn describe_lists_tables_and_columns() {
    let dir = tempdir().unwrap();
    let path = Factory::table_file().with_rows_per_block(4).create_in(dir.path());
    let file = TableFile::open(&path).unwrap();

    let summary = file.describe();
    assert!(summary.starts_with("TableFile: "));
    assert!(summary.contains("version=1"));
    assert!(summary.contains("DecayTree: 10 rows, 4 columns"));

    let table = file.table("DecayTree").unwrap().describe();
    assert!(table.starts_with("Table DecayTree: 10 rows, 4 columns"));
    assert!(table.contains("H1_PX"));
    assert!(table.contains("blocks=3"));
    assert!(table.contains("I64"));
}
