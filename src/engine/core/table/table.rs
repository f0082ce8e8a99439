use std::fmt::Write as _;

use crate::engine::core::column::format::PhysicalType;
use crate::engine::core::table::catalog::{ColumnMeta, TableMeta};
use crate::engine::core::table::cursor::BlockCursor;
use crate::engine::errors::ScanError;
use crate::engine::source::column_reader::ColumnReader;
use crate::engine::source::observer::IoObserver;

/// One named table inside a `TableFile`.
#[derive(Clone, Copy)]
pub struct Table<'a> {
    data: &'a [u8],
    meta: &'a TableMeta,
}

impl<'a> Table<'a> {
    pub(crate) fn new(data: &'a [u8], meta: &'a TableMeta) -> Self {
        Self { data, meta }
    }

    pub fn name(&self) -> &'a str {
        &self.meta.name
    }

    pub fn meta(&self) -> &'a TableMeta {
        self.meta
    }

    fn column(&self, name: &str) -> Result<&'a ColumnMeta, ScanError> {
        self.meta
            .column(name)
            .ok_or_else(|| ScanError::ColumnNotFound(format!("{name} (table {})", self.meta.name)))
    }

    /// Bind a column of any physical type, for dumps and inspection.
    pub fn bind_any(&self, name: &str) -> Result<BlockCursor<'a>, ScanError> {
        Ok(BlockCursor::new(self.column(name)?))
    }

    /// Rendered value of any column type at `row`.
    pub fn format_at(
        &self,
        cursor: &mut BlockCursor<'a>,
        row: u64,
        io: &mut dyn IoObserver,
    ) -> Result<String, ScanError> {
        self.check_row(row)?;
        cursor.format_at(self.data, row, io)
    }

    fn check_row(&self, row: u64) -> Result<(), ScanError> {
        if row >= self.meta.row_count {
            return Err(ScanError::InvalidRowIndex {
                row,
                row_count: self.meta.row_count,
            });
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Table {}: {} rows, {} columns",
            self.meta.name,
            self.meta.row_count,
            self.meta.columns.len()
        );
        for column in &self.meta.columns {
            let comp = column.compressed_bytes();
            let uncomp = column.uncompressed_bytes();
            let ratio = if comp == 0 { 1.0 } else { uncomp as f64 / comp as f64 };
            let _ = writeln!(
                out,
                "  {:<16} {:?}  blocks={}  compressed={}B  uncompressed={}B  ratio={:.2}",
                column.name,
                column.phys,
                column.blocks.len(),
                comp,
                uncomp,
                ratio
            );
        }
        out
    }
}

impl<'a> ColumnReader for Table<'a> {
    type Handle = BlockCursor<'a>;

    fn row_count(&self) -> u64 {
        self.meta.row_count
    }

    fn bind_column(&self, name: &str) -> Result<BlockCursor<'a>, ScanError> {
        let column = self.column(name)?;
        if column.phys != PhysicalType::F64 {
            return Err(ScanError::ColumnNotFound(format!(
                "{name} is stored as {:?}, expected {:?}",
                column.phys,
                PhysicalType::F64
            )));
        }
        Ok(BlockCursor::new(column))
    }

    fn read_at(
        &self,
        handle: &mut BlockCursor<'a>,
        row: u64,
        io: &mut dyn IoObserver,
    ) -> Result<f64, ScanError> {
        self.check_row(row)?;
        handle.f64_at(self.data, row, io)
    }
}
