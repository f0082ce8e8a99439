use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use memmap2::Mmap;
use tracing::{debug, info};

use crate::engine::core::column::reader::io::map_file;
use crate::engine::core::table::catalog::{Catalog, Footer};
use crate::engine::core::table::table::Table;
use crate::engine::errors::ScanError;
use crate::shared::storage_header::{BinaryHeader, FileKind, validate_header};

/// A memory-mapped table file. Opened once and shared read-only by every
/// table handle and every scan pass.
#[derive(Debug)]
pub struct TableFile {
    path: PathBuf,
    mmap: Mmap,
    header: BinaryHeader,
    catalog: Catalog,
}

fn unavailable(path: &Path, what: impl std::fmt::Display) -> ScanError {
    ScanError::SourceUnavailable(format!("{}: {}", path.display(), what))
}

impl TableFile {
    pub fn open(path: &Path) -> Result<Self, ScanError> {
        let len = std::fs::metadata(path)
            .map_err(|e| unavailable(path, e))?
            .len();
        if len < (BinaryHeader::TOTAL_LEN + Footer::LEN) as u64 {
            return Err(unavailable(path, "file too small to be a table file"));
        }

        let mmap = map_file(path).map_err(|e| unavailable(path, e))?;
        let (header, data_start) = validate_header(&mmap, &FileKind::TableFile)
            .map_err(|e| unavailable(path, format!("not a table file ({e})")))?;

        let footer_start = mmap.len() - Footer::LEN;
        let footer = Footer::read_from(&mmap[footer_start..])
            .ok_or_else(|| unavailable(path, "missing footer, file truncated?"))?;
        let catalog_start = footer.catalog_offset as usize;
        let catalog_end = catalog_start
            .checked_add(footer.catalog_len as usize)
            .filter(|end| catalog_start >= data_start && *end <= footer_start)
            .ok_or_else(|| unavailable(path, "catalog range outside file"))?;

        let encoded = &mmap[catalog_start..catalog_end];
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(encoded);
        if hasher.finalize() != footer.catalog_crc32 {
            return Err(unavailable(path, "catalog CRC mismatch"));
        }
        let catalog: Catalog = bincode::deserialize(encoded)
            .map_err(|e| unavailable(path, format!("catalog decode failed ({e})")))?;
        catalog
            .validate(data_start as u64, catalog_start as u64)
            .map_err(|e| unavailable(path, e))?;

        info!(
            target: "engine::table",
            path = %path.display(),
            bytes = mmap.len(),
            tables = catalog.tables.len(),
            "Opened table file"
        );
        Ok(Self {
            path: path.to_path_buf(),
            mmap,
            header,
            catalog,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Look up a table by name.
    pub fn table(&self, name: &str) -> Result<Table<'_>, ScanError> {
        let meta = self.catalog.table(name).ok_or_else(|| {
            let known: Vec<&str> = self.catalog.tables.iter().map(|t| t.name.as_str()).collect();
            unavailable(&self.path, format!("no table {name:?} (tables: {known:?})"))
        })?;
        debug!(target: "engine::table", table = %name, rows = meta.row_count, "Table resolved");
        Ok(Table::new(&self.mmap, meta))
    }

    pub fn describe(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "TableFile: {}  size={} bytes  version={}  tables={}",
            self.path.display(),
            self.mmap.len(),
            self.header.version,
            self.catalog.tables.len()
        );
        for table in &self.catalog.tables {
            let _ = writeln!(
                out,
                "  {}: {} rows, {} columns",
                table.name,
                table.row_count,
                table.columns.len()
            );
        }
        out
    }
}
