pub mod compression;
pub mod format;
pub mod reader;

pub use format::{ColumnBlockHeader, PhysicalType};
