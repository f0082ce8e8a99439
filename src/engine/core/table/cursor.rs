use std::time::Instant;

use tracing::{Level, debug};

use crate::engine::core::column::reader::io::compressed_range;
use crate::engine::core::column::reader::{BlockValues, ColumnBlockView, decoder_for, decompress_block_with};
use crate::engine::core::table::catalog::{BlockEntry, ColumnMeta};
use crate::engine::errors::ScanError;
use crate::engine::source::observer::{BlockRead, IoObserver};

struct CachedBlock {
    start_row: u64,
    values: BlockValues,
}

impl CachedBlock {
    fn contains(&self, row: u64) -> bool {
        row >= self.start_row && row < self.start_row + self.values.len() as u64
    }
}

/// Column handle for on-disk tables. Keeps the most recently decoded block so
/// a sequential scan decompresses every block exactly once.
pub struct BlockCursor<'a> {
    column: &'a ColumnMeta,
    current: Option<CachedBlock>,
}

impl<'a> BlockCursor<'a> {
    pub(crate) fn new(column: &'a ColumnMeta) -> Self {
        Self {
            column,
            current: None,
        }
    }

    pub fn column_name(&self) -> &str {
        &self.column.name
    }

    /// Value at `row` as f64. `row` must already be checked against the
    /// table's row count.
    pub(crate) fn f64_at(
        &mut self,
        data: &[u8],
        row: u64,
        io: &mut dyn IoObserver,
    ) -> Result<f64, ScanError> {
        let column = self.column;
        let block = self.block_for(data, row, io)?;
        block
            .values
            .get_f64_at((row - block.start_row) as usize)
            .ok_or_else(|| {
                ScanError::ColRead(format!("{}: row {} is not an f64 value", column.name, row))
            })
    }

    /// Rendered value at `row`, whatever the physical type.
    pub(crate) fn format_at(
        &mut self,
        data: &[u8],
        row: u64,
        io: &mut dyn IoObserver,
    ) -> Result<String, ScanError> {
        let column = self.column;
        let block = self.block_for(data, row, io)?;
        block
            .values
            .format_at((row - block.start_row) as usize)
            .ok_or_else(|| ScanError::ColRead(format!("{}: row {} missing", column.name, row)))
    }

    fn block_for(
        &mut self,
        data: &[u8],
        row: u64,
        io: &mut dyn IoObserver,
    ) -> Result<&CachedBlock, ScanError> {
        let hit = self.current.as_ref().is_some_and(|c| c.contains(row));
        if !hit {
            let column = self.column;
            let idx = column.block_index_for(row).ok_or_else(|| {
                ScanError::ColRead(format!("{}: no block holds row {}", column.name, row))
            })?;
            let entry = &column.blocks[idx];
            let values = load_block(column, data, entry, io)?;
            self.current = Some(CachedBlock {
                start_row: entry.start_row,
                values,
            });
        }
        self.current
            .as_ref()
            .ok_or_else(|| ScanError::ColRead("block cache empty after load".into()))
    }
}

fn load_block(
    column: &ColumnMeta,
    data: &[u8],
    entry: &BlockEntry,
    io: &mut dyn IoObserver,
) -> Result<BlockValues, ScanError> {
    let started = Instant::now();
    let (start, end) = compressed_range(entry, data.len())?;
    let values = decompress_block_with(&data[start..end], entry.uncomp_len as usize, |bytes| {
        let view = ColumnBlockView::parse(bytes)?;
        if view.phys != column.phys || view.row_count() != entry.num_rows as usize {
            return Err(ScanError::ColRead(format!(
                "{}: block at {} holds {} {:?} rows, catalog says {} {:?}",
                column.name,
                entry.block_start,
                view.row_count(),
                view.phys,
                entry.num_rows,
                column.phys
            )));
        }
        decoder_for(view.phys).decode(&view)
    })?;
    let elapsed = started.elapsed();

    if tracing::enabled!(Level::DEBUG) {
        debug!(
            target: "engine::table::cursor",
            column = %column.name,
            start_row = entry.start_row,
            rows = entry.num_rows,
            comp_len = entry.comp_len,
            elapsed_us = elapsed.as_micros() as u64,
            "Loaded column block"
        );
    }
    io.on_block_read(
        &column.name,
        BlockRead {
            rows: entry.num_rows,
            compressed_bytes: entry.comp_len as u64,
            uncompressed_bytes: entry.uncomp_len as u64,
            elapsed,
        },
    );
    Ok(values)
}
