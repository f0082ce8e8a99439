pub mod column_reader;
pub mod memory_table;
pub mod observer;

pub use column_reader::ColumnReader;
pub use memory_table::{MemoryColumnHandle, MemoryTable};
pub use observer::{BlockRead, IoObserver, NoopObserver};
