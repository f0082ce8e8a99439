use crate::engine::errors::ScanError;
use crate::engine::source::observer::IoObserver;

/// Row-addressable access to the double-precision columns of one table.
///
/// Implementations are read-only: binding and reading take `&self`, and all
/// per-reader state (decoded block caches) lives in the handle, so one source
/// can serve any number of sequential passes.
pub trait ColumnReader {
    type Handle;

    fn row_count(&self) -> u64;

    /// Bind a column stored as F64. Fails with `ScanError::ColumnNotFound`
    /// when the column is absent or stored with another type.
    fn bind_column(&self, name: &str) -> Result<Self::Handle, ScanError>;

    /// Read the value of `row`. Fails with `ScanError::InvalidRowIndex` when
    /// `row >= row_count()`.
    fn read_at(
        &self,
        handle: &mut Self::Handle,
        row: u64,
        io: &mut dyn IoObserver,
    ) -> Result<f64, ScanError>;
}
