use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::engine::core::column::compression::{CompressionCodec, Lz4Codec};
use crate::engine::core::column::format::{ColumnBlockHeader, PhysicalType};
use crate::engine::core::column::reader::view::encode_block;
use crate::engine::core::table::catalog::{BlockEntry, Catalog, ColumnMeta, Footer, TableMeta};
use crate::engine::errors::StoreError;
use crate::shared::storage_header::{BinaryHeader, FileKind};

/// Borrowed values of one column handed to the writer.
#[derive(Debug, Clone, Copy)]
pub enum ColumnSlice<'a> {
    F64(&'a [f64]),
    I64(&'a [i64]),
}

impl ColumnSlice<'_> {
    pub fn len(&self) -> usize {
        match self {
            ColumnSlice::F64(v) => v.len(),
            ColumnSlice::I64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn phys(&self) -> PhysicalType {
        match self {
            ColumnSlice::F64(_) => PhysicalType::F64,
            ColumnSlice::I64(_) => PhysicalType::I64,
        }
    }

    fn payload(&self, start: usize, end: usize) -> Vec<u8> {
        match self {
            ColumnSlice::F64(v) => v[start..end].iter().flat_map(|x| x.to_le_bytes()).collect(),
            ColumnSlice::I64(v) => v[start..end].iter().flat_map(|x| x.to_le_bytes()).collect(),
        }
    }
}

/// Writes a table file: header, column blocks, catalog and footer.
///
/// Tables are appended one at a time with `add_table`; nothing is readable
/// until `finish` has written the catalog.
pub struct TableFileWriter {
    path: PathBuf,
    out: BufWriter<File>,
    offset: u64,
    catalog: Catalog,
    codec: Lz4Codec,
}

impl TableFileWriter {
    pub fn create(path: &Path) -> Result<Self, StoreError> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        let kind = FileKind::TableFile;
        BinaryHeader::new(kind.magic(), kind.version(), 0).write_to(&mut out)?;
        Ok(Self {
            path: path.to_path_buf(),
            out,
            offset: BinaryHeader::TOTAL_LEN as u64,
            catalog: Catalog::default(),
            codec: Lz4Codec,
        })
    }

    pub fn add_table(
        &mut self,
        name: &str,
        columns: &[(&str, ColumnSlice<'_>)],
        rows_per_block: usize,
    ) -> Result<(), StoreError> {
        if rows_per_block == 0 || rows_per_block > ColumnBlockHeader::MAX_ROWS as usize {
            return Err(StoreError::InvalidBlockSize(rows_per_block));
        }
        if self.catalog.table(name).is_some() {
            return Err(StoreError::DuplicateTable(name.to_string()));
        }

        let row_count = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        let mut seen = HashSet::new();
        for (column, values) in columns {
            if !seen.insert(*column) {
                return Err(StoreError::DuplicateColumn {
                    table: name.to_string(),
                    column: column.to_string(),
                });
            }
            if values.len() != row_count {
                return Err(StoreError::RowCountMismatch {
                    column: column.to_string(),
                    expected: row_count,
                    actual: values.len(),
                });
            }
        }

        let mut metas = Vec::with_capacity(columns.len());
        for (column, values) in columns {
            let blocks = self.write_column(values, rows_per_block)?;
            debug!(
                target: "engine::table::writer",
                table = %name,
                column = %column,
                blocks = blocks.len(),
                codec = self.codec.algo_id(),
                "Wrote column blocks"
            );
            metas.push(ColumnMeta {
                name: column.to_string(),
                phys: values.phys(),
                blocks,
            });
        }

        info!(
            target: "engine::table::writer",
            table = %name,
            rows = row_count,
            columns = metas.len(),
            "Table written"
        );
        self.catalog.tables.push(TableMeta {
            name: name.to_string(),
            row_count: row_count as u64,
            columns: metas,
        });
        Ok(())
    }

    fn write_column(
        &mut self,
        values: &ColumnSlice<'_>,
        rows_per_block: usize,
    ) -> Result<Vec<BlockEntry>, StoreError> {
        let mut blocks = Vec::with_capacity(values.len().div_ceil(rows_per_block));
        let mut start = 0usize;
        while start < values.len() {
            let end = (start + rows_per_block).min(values.len());
            let num_rows = (end - start) as u32;
            let raw = encode_block(values.phys(), num_rows, &values.payload(start, end));
            let compressed = self.codec.compress(&raw)?;
            let comp_len = u32::try_from(compressed.len()).map_err(|_| {
                StoreError::Compression(format!("compressed block of {} bytes", compressed.len()))
            })?;
            let uncomp_len =
                u32::try_from(raw.len()).map_err(|_| StoreError::InvalidBlockSize(end - start))?;
            self.out.write_all(&compressed)?;
            blocks.push(BlockEntry {
                start_row: start as u64,
                num_rows,
                block_start: self.offset,
                comp_len,
                uncomp_len,
            });
            self.offset += compressed.len() as u64;
            start = end;
        }
        Ok(blocks)
    }

    /// Write catalog and footer, flush and sync. Returns the catalog written.
    pub fn finish(mut self) -> Result<Catalog, StoreError> {
        let encoded = bincode::serialize(&self.catalog)?;
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&encoded);
        let footer = Footer {
            catalog_offset: self.offset,
            catalog_len: encoded.len() as u32,
            catalog_crc32: hasher.finalize(),
        };
        self.out.write_all(&encoded)?;
        let mut trailer = Vec::with_capacity(Footer::LEN);
        footer.write_to(&mut trailer);
        self.out.write_all(&trailer)?;
        self.out.flush()?;
        self.out.get_ref().sync_all()?;

        info!(
            target: "engine::table::writer",
            path = %self.path.display(),
            tables = self.catalog.tables.len(),
            bytes = self.offset + encoded.len() as u64 + Footer::LEN as u64,
            "Table file finished"
        );
        Ok(self.catalog)
    }
}
