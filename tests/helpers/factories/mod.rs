pub mod memory_table_factory;
pub mod table_file_factory;

pub use memory_table_factory::{MemoryTableFactory, default_momenta, random_momenta};
pub use table_file_factory::TableFileFactory;

#[cfg(test)]
mod memory_table_factory_test;
#[cfg(test)]
mod table_file_factory_test;
