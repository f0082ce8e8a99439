pub use super::factories::{MemoryTableFactory, TableFileFactory};

pub struct Factory;

impl Factory {
    pub fn memory_table() -> MemoryTableFactory {
        MemoryTableFactory::new()
    }

    pub fn table_file() -> TableFileFactory {
        TableFileFactory::new()
    }
}
