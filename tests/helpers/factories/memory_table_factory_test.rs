use crate::engine::source::{ColumnReader, NoopObserver};
use crate::test_helpers::factories::{MemoryTableFactory, random_momenta};

#[test]
fn creates_three_momentum_columns_from_rows() {
    let factory = MemoryTableFactory::new().with_rows(vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let table = factory.create();
    let mut io = NoopObserver;

    assert_eq!(table.row_count(), 2);
    let mut pz = table.bind_column("H1_PZ").unwrap();
    assert_eq!(table.read_at(&mut pz, 1, &mut io).unwrap(), 6.0);
}

#[test]
fn omitted_column_cannot_be_bound() {
    let table = MemoryTableFactory::new().without_column("H1_PY").create();
    assert!(table.bind_column("H1_PX").is_ok());
    assert!(table.bind_column("H1_PY").is_err());
}

#[test]
fn event_numbers_are_integer_column() {
    let table = MemoryTableFactory::new().with_event_numbers().create();
    let names: Vec<&str> = table.column_names().collect();
    assert_eq!(names, vec!["H1_PX", "H1_PY", "H1_PZ", "eventNumber"]);
}

#[test]
fn random_rows_are_reproducible_per_seed() {
    assert_eq!(random_momenta(50, 7), random_momenta(50, 7));
    assert_ne!(random_momenta(50, 7), random_momenta(50, 8));
    assert_eq!(MemoryTableFactory::new().with_random_rows(12, 1).rows().len(), 12);
}
