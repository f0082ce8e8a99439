use crate::engine::core::column::format::{ColumnBlockHeader, PhysicalType};
use crate::engine::errors::ScanError;

pub struct ColumnBlockView<'a> {
    pub header: ColumnBlockHeader,
    pub phys: PhysicalType,
    pub payload_start: usize,
    pub bytes: &'a [u8],
}

#[inline]
pub fn align_up(off: usize, align: usize) -> usize {
    let rem = off % align;
    if rem == 0 { off } else { off + (align - rem) }
}

impl<'a> ColumnBlockView<'a> {
    pub fn parse(bytes: &'a [u8]) -> Result<Self, ScanError> {
        let header = ColumnBlockHeader::read_from(bytes).ok_or_else(|| {
            ScanError::ColRead("decompressed block too small for header".into())
        })?;
        let phys = PhysicalType::from_u8(header.phys).ok_or_else(|| {
            ScanError::ColRead(format!("unknown physical type tag {}", header.phys))
        })?;
        let payload_start = align_up(ColumnBlockHeader::LEN, phys.width());
        let expected = (header.row_count as usize)
            .checked_mul(phys.width())
            .ok_or_else(|| ScanError::ColRead("payload size overflow".into()))?;
        if header.payload_len as usize != expected {
            return Err(ScanError::ColRead(format!(
                "payload length {} does not match {} rows of {:?}",
                header.payload_len, header.row_count, phys
            )));
        }
        if payload_start + expected > bytes.len() {
            return Err(ScanError::ColRead("payload out of bounds".into()));
        }
        Ok(Self {
            header,
            phys,
            payload_start,
            bytes,
        })
    }

    pub fn row_count(&self) -> usize {
        self.header.row_count as usize
    }

    pub fn payload(&self) -> &'a [u8] {
        &self.bytes[self.payload_start..self.payload_start + self.header.payload_len as usize]
    }
}

/// Serialize a block the way `ColumnBlockView::parse` expects it: header,
/// zero padding up to the value width, then little-endian values.
pub fn encode_block(phys: PhysicalType, row_count: u32, payload: &[u8]) -> Vec<u8> {
    let header = ColumnBlockHeader::new(phys, row_count);
    let payload_start = align_up(ColumnBlockHeader::LEN, phys.width());
    let mut buf = Vec::with_capacity(payload_start + payload.len());
    header.write_to(&mut buf);
    buf.resize(payload_start, 0);
    buf.extend_from_slice(payload);
    buf
}
