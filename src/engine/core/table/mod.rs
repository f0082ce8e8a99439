pub mod catalog;
pub mod cursor;
pub mod table;
pub mod table_file;
pub mod writer;

pub use catalog::{BlockEntry, Catalog, ColumnMeta, TableMeta};
pub use cursor::BlockCursor;
pub use table::Table;
pub use table_file::TableFile;
pub use writer::{ColumnSlice, TableFileWriter};

#[cfg(test)]
mod table_file_test;
