use std::io::{self, Write};
use std::time::Duration;

use indexmap::IndexMap;
use tracing::info;

use crate::engine::source::observer::{BlockRead, IoObserver};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnIoStats {
    pub blocks: u64,
    pub rows: u64,
    pub compressed_bytes: u64,
    pub uncompressed_bytes: u64,
    pub read_time: Duration,
}

impl ColumnIoStats {
    fn record(&mut self, read: &BlockRead) {
        self.blocks += 1;
        self.rows += read.rows as u64;
        self.compressed_bytes += read.compressed_bytes;
        self.uncompressed_bytes += read.uncompressed_bytes;
        self.read_time += read.elapsed;
    }
}

/// Per-column I/O recorder for one pass. Columns are kept in first-read order.
#[derive(Debug, Clone, Default)]
pub struct IoPerfStats {
    row_count: u64,
    scan_time: Duration,
    columns: IndexMap<String, ColumnIoStats>,
}

impl IoPerfStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self, name: &str) -> Option<&ColumnIoStats> {
        self.columns.get(name)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &ColumnIoStats)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn totals(&self) -> ColumnIoStats {
        let mut total = ColumnIoStats::default();
        for stats in self.columns.values() {
            total.blocks += stats.blocks;
            total.rows += stats.rows;
            total.compressed_bytes += stats.compressed_bytes;
            total.uncompressed_bytes += stats.uncompressed_bytes;
            total.read_time += stats.read_time;
        }
        total
    }

    pub fn scan_time(&self) -> Duration {
        self.scan_time
    }

    /// Summary printed after a profiled pass.
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let total = self.totals();
        let io_share = if self.scan_time.is_zero() {
            0.0
        } else {
            100.0 * total.read_time.as_secs_f64() / self.scan_time.as_secs_f64()
        };
        writeln!(
            out,
            "IO-Profile: rows={} blocks={} read={}B unpacked={}B io-time={}us scan-time={}us io-share={:.1}%",
            self.row_count,
            total.blocks,
            total.compressed_bytes,
            total.uncompressed_bytes,
            total.read_time.as_micros(),
            self.scan_time.as_micros(),
            io_share
        )?;
        for (name, stats) in &self.columns {
            let mb_per_s = if stats.read_time.is_zero() {
                0.0
            } else {
                stats.uncompressed_bytes as f64 / stats.read_time.as_secs_f64() / 1_048_576.0
            };
            writeln!(
                out,
                "IO-Profile:   {} blocks={} read={}B unpacked={}B io-time={}us throughput={:.1}MiB/s",
                name,
                stats.blocks,
                stats.compressed_bytes,
                stats.uncompressed_bytes,
                stats.read_time.as_micros(),
                mb_per_s
            )?;
        }
        Ok(())
    }
}

impl IoObserver for IoPerfStats {
    fn on_scan_start(&mut self, row_count: u64) {
        self.row_count = row_count;
    }

    fn on_block_read(&mut self, column: &str, read: BlockRead) {
        match self.columns.get_mut(column) {
            Some(stats) => stats.record(&read),
            None => {
                let mut stats = ColumnIoStats::default();
                stats.record(&read);
                self.columns.insert(column.to_string(), stats);
            }
        }
    }

    fn on_scan_end(&mut self, elapsed: Duration) {
        self.scan_time = elapsed;
        let total = self.totals();
        info!(
            target: "engine::query::profiler",
            blocks = total.blocks,
            compressed_bytes = total.compressed_bytes,
            io_us = total.read_time.as_micros() as u64,
            scan_us = elapsed.as_micros() as u64,
            "Profiled pass finished"
        );
    }
}
