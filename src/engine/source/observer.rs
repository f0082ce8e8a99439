use std::time::Duration;

/// One physical block load, as seen by an `IoObserver`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRead {
    pub rows: u32,
    pub compressed_bytes: u64,
    pub uncompressed_bytes: u64,
    pub elapsed: Duration,
}

/// Receives I/O events from column readers during a scan. Every hook defaults
/// to doing nothing.
pub trait IoObserver {
    fn on_scan_start(&mut self, _row_count: u64) {}

    fn on_block_read(&mut self, _column: &str, _read: BlockRead) {}

    fn on_scan_end(&mut self, _elapsed: Duration) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl IoObserver for NoopObserver {}
