use indexmap::IndexMap;

use crate::engine::core::column::format::PhysicalType;
use crate::engine::core::column::reader::BlockValues;
use crate::engine::errors::{ScanError, StoreError};
use crate::engine::source::column_reader::ColumnReader;
use crate::engine::source::observer::IoObserver;

/// Column table held entirely in memory. Reads never touch I/O, so observers
/// see no block events.
#[derive(Debug, Clone, Default)]
pub struct MemoryTable {
    row_count: u64,
    columns: IndexMap<String, BlockValues>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryColumnHandle {
    index: usize,
}

impl MemoryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_f64_column(self, name: &str, values: Vec<f64>) -> Result<Self, StoreError> {
        self.with_column(name, BlockValues::F64(values))
    }

    pub fn with_i64_column(self, name: &str, values: Vec<i64>) -> Result<Self, StoreError> {
        self.with_column(name, BlockValues::I64(values))
    }

    fn with_column(mut self, name: &str, values: BlockValues) -> Result<Self, StoreError> {
        if self.columns.contains_key(name) {
            return Err(StoreError::DuplicateColumn {
                table: "<memory>".to_string(),
                column: name.to_string(),
            });
        }
        if self.columns.is_empty() {
            self.row_count = values.len() as u64;
        } else if values.len() as u64 != self.row_count {
            return Err(StoreError::RowCountMismatch {
                column: name.to_string(),
                expected: self.row_count as usize,
                actual: values.len(),
            });
        }
        self.columns.insert(name.to_string(), values);
        Ok(self)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

impl ColumnReader for MemoryTable {
    type Handle = MemoryColumnHandle;

    fn row_count(&self) -> u64 {
        self.row_count
    }

    fn bind_column(&self, name: &str) -> Result<MemoryColumnHandle, ScanError> {
        let (index, _, values) = self
            .columns
            .get_full(name)
            .ok_or_else(|| ScanError::ColumnNotFound(name.to_string()))?;
        match values {
            BlockValues::F64(_) => Ok(MemoryColumnHandle { index }),
            BlockValues::I64(_) => Err(ScanError::ColumnNotFound(format!(
                "{name} is stored as {:?}, expected {:?}",
                PhysicalType::I64,
                PhysicalType::F64
            ))),
        }
    }

    fn read_at(
        &self,
        handle: &mut MemoryColumnHandle,
        row: u64,
        _io: &mut dyn IoObserver,
    ) -> Result<f64, ScanError> {
        if row >= self.row_count {
            return Err(ScanError::InvalidRowIndex {
                row,
                row_count: self.row_count,
            });
        }
        self.columns
            .get_index(handle.index)
            .and_then(|(_, values)| values.get_f64_at(row as usize))
            .ok_or_else(|| ScanError::ColRead(format!("stale column handle {}", handle.index)))
    }
}
