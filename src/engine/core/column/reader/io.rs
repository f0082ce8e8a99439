use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::path::Path;

use crate::engine::core::table::catalog::BlockEntry;
use crate::engine::errors::ScanError;

/// Map a whole file read-only. Callers must have checked it is non-empty.
pub fn map_file(path: &Path) -> std::io::Result<Mmap> {
    let file = File::open(path)?;
    // The file is opened read-only and never truncated by this process
    unsafe { MmapOptions::new().map(&file) }
}

#[inline]
pub fn compressed_range(entry: &BlockEntry, mmap_len: usize) -> Result<(usize, usize), ScanError> {
    let start = usize::try_from(entry.block_start)
        .map_err(|_| ScanError::ColRead(format!("block offset {} too large", entry.block_start)))?;
    let end = start
        .checked_add(entry.comp_len as usize)
        .ok_or_else(|| ScanError::ColRead("compressed block range overflow".into()))?;
    if end > mmap_len {
        return Err(ScanError::ColRead(format!(
            "compressed block OOB: end={} > file_len={}",
            end, mmap_len
        )));
    }
    Ok((start, end))
}
