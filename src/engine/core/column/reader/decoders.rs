use super::view::ColumnBlockView;
use crate::engine::core::column::format::PhysicalType;
use crate::engine::errors::ScanError;

/// Values of one decoded column block.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockValues {
    F64(Vec<f64>),
    I64(Vec<i64>),
}

impl BlockValues {
    pub fn len(&self) -> usize {
        match self {
            BlockValues::F64(v) => v.len(),
            BlockValues::I64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_f64_at(&self, index: usize) -> Option<f64> {
        match self {
            BlockValues::F64(v) => v.get(index).copied(),
            BlockValues::I64(_) => None,
        }
    }

    pub fn get_i64_at(&self, index: usize) -> Option<i64> {
        match self {
            BlockValues::I64(v) => v.get(index).copied(),
            BlockValues::F64(_) => None,
        }
    }

    /// Render one value for dumps and inspection.
    pub fn format_at(&self, index: usize) -> Option<String> {
        match self {
            BlockValues::F64(v) => v.get(index).map(|x| x.to_string()),
            BlockValues::I64(v) => v.get(index).map(|x| x.to_string()),
        }
    }
}

pub trait ColumnDecoder {
    fn decode(&self, view: &ColumnBlockView<'_>) -> Result<BlockValues, ScanError>;
}

pub struct F64Decoder;
pub struct I64Decoder;

impl ColumnDecoder for F64Decoder {
    fn decode(&self, view: &ColumnBlockView<'_>) -> Result<BlockValues, ScanError> {
        if view.phys != PhysicalType::F64 {
            return Err(ScanError::ColRead(format!(
                "F64 decoder handed a {:?} block",
                view.phys
            )));
        }
        let mut out = Vec::with_capacity(view.row_count());
        for chunk in view.payload().chunks_exact(8) {
            let mut b = [0u8; 8];
            b.copy_from_slice(chunk);
            out.push(f64::from_le_bytes(b));
        }
        Ok(BlockValues::F64(out))
    }
}

impl ColumnDecoder for I64Decoder {
    fn decode(&self, view: &ColumnBlockView<'_>) -> Result<BlockValues, ScanError> {
        if view.phys != PhysicalType::I64 {
            return Err(ScanError::ColRead(format!(
                "I64 decoder handed a {:?} block",
                view.phys
            )));
        }
        let mut out = Vec::with_capacity(view.row_count());
        for chunk in view.payload().chunks_exact(8) {
            let mut b = [0u8; 8];
            b.copy_from_slice(chunk);
            out.push(i64::from_le_bytes(b));
        }
        Ok(BlockValues::I64(out))
    }
}

static F64_DECODER: F64Decoder = F64Decoder;
static I64_DECODER: I64Decoder = I64Decoder;

pub fn decoder_for(phys: PhysicalType) -> &'static dyn ColumnDecoder {
    match phys {
        PhysicalType::F64 => &F64_DECODER,
        PhysicalType::I64 => &I64_DECODER,
    }
}
