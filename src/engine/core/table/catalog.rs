use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::engine::core::column::format::PhysicalType;

/// Location of one compressed column block (a row group slice of one column).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    pub start_row: u64,
    pub num_rows: u32,
    pub block_start: u64,
    pub comp_len: u32,
    pub uncomp_len: u32,
}

impl BlockEntry {
    pub fn end_row(&self) -> u64 {
        self.start_row + self.num_rows as u64
    }

    pub fn contains(&self, row: u64) -> bool {
        row >= self.start_row && row < self.end_row()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColumnMeta {
    pub name: String,
    pub phys: PhysicalType,
    pub blocks: Vec<BlockEntry>,
}

impl ColumnMeta {
    pub fn compressed_bytes(&self) -> u64 {
        self.blocks.iter().map(|b| b.comp_len as u64).sum()
    }

    pub fn uncompressed_bytes(&self) -> u64 {
        self.blocks.iter().map(|b| b.uncomp_len as u64).sum()
    }

    /// Index of the block holding `row`, if any.
    pub fn block_index_for(&self, row: u64) -> Option<usize> {
        let idx = self.blocks.partition_point(|b| b.end_row() <= row);
        self.blocks.get(idx).filter(|b| b.contains(row)).map(|_| idx)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableMeta {
    pub name: String,
    pub row_count: u64,
    pub columns: Vec<ColumnMeta>,
}

impl TableMeta {
    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub tables: Vec<TableMeta>,
}

impl Catalog {
    pub fn table(&self, name: &str) -> Option<&TableMeta> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Check that table and column names are unique, that every block lies
    /// inside `[data_start, data_end)` and that each column's blocks tile
    /// `[0, row_count)` without gaps or overlap.
    pub fn validate(&self, data_start: u64, data_end: u64) -> Result<(), String> {
        let mut table_names = HashSet::new();
        for table in &self.tables {
            if !table_names.insert(table.name.as_str()) {
                return Err(format!("duplicate table {}", table.name));
            }
            let mut column_names = HashSet::new();
            for column in &table.columns {
                if !column_names.insert(column.name.as_str()) {
                    return Err(format!("{}: duplicate column {}", table.name, column.name));
                }
                let mut next_row = 0u64;
                for block in &column.blocks {
                    if block.start_row != next_row {
                        return Err(format!(
                            "{}.{}: block starts at row {} but {} was expected",
                            table.name, column.name, block.start_row, next_row
                        ));
                    }
                    if block.num_rows == 0 {
                        return Err(format!("{}.{}: empty block", table.name, column.name));
                    }
                    let end = block.block_start.checked_add(block.comp_len as u64);
                    if block.block_start < data_start || end.is_none_or(|e| e > data_end) {
                        return Err(format!(
                            "{}.{}: block at offset {} outside data region",
                            table.name, column.name, block.block_start
                        ));
                    }
                    next_row = block.end_row();
                }
                if next_row != table.row_count {
                    return Err(format!(
                        "{}.{}: blocks cover {} rows, table has {}",
                        table.name, column.name, next_row, table.row_count
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Trailer locating the catalog; always the last `Footer::LEN` bytes of a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Footer {
    pub catalog_offset: u64,
    pub catalog_len: u32,
    pub catalog_crc32: u32,
}

impl Footer {
    pub const MAGIC: [u8; 8] = *b"CSCNEND\0";
    pub const LEN: usize = 8 + 4 + 4 + 8;

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.catalog_offset.to_le_bytes());
        buf.extend_from_slice(&self.catalog_len.to_le_bytes());
        buf.extend_from_slice(&self.catalog_crc32.to_le_bytes());
        buf.extend_from_slice(&Self::MAGIC);
    }

    pub fn read_from(slice: &[u8]) -> Option<Self> {
        if slice.len() != Self::LEN || slice[16..24] != Self::MAGIC {
            return None;
        }
        let mut o = [0u8; 8];
        o.copy_from_slice(&slice[0..8]);
        let mut l = [0u8; 4];
        l.copy_from_slice(&slice[8..12]);
        let mut c = [0u8; 4];
        c.copy_from_slice(&slice[12..16]);
        Some(Self {
            catalog_offset: u64::from_le_bytes(o),
            catalog_len: u32::from_le_bytes(l),
            catalog_crc32: u32::from_le_bytes(c),
        })
    }
}
