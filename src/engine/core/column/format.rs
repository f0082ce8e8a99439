use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalType {
    I64 = 1,
    F64 = 3,
}

impl PhysicalType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1 => Some(PhysicalType::I64),
            3 => Some(PhysicalType::F64),
            _ => None,
        }
    }

    /// Width of one stored value in bytes.
    pub const fn width(&self) -> usize {
        match self {
            PhysicalType::I64 | PhysicalType::F64 => 8,
        }
    }
}

impl From<PhysicalType> for u8 {
    fn from(p: PhysicalType) -> u8 {
        p as u8
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug)]
pub struct ColumnBlockHeader {
    pub phys: u8,
    pub flags: u8,
    pub reserved: u16,
    pub row_count: u32,
    pub payload_len: u32,
}

impl ColumnBlockHeader {
    pub const LEN: usize = 1 + 1 + 2 + 4 + 4; // repr(C) layout

    /// Most rows one block can hold: header, padding and 8-byte values must
    /// fit the u32 lengths recorded in the header and the catalog.
    pub const MAX_ROWS: u32 = (u32::MAX - 16) / 8;

    /// `row_count` must not exceed `MAX_ROWS`.
    pub fn new(phys: PhysicalType, row_count: u32) -> Self {
        Self {
            phys: phys.into(),
            flags: 0,
            reserved: 0,
            row_count,
            payload_len: row_count.saturating_mul(phys.width() as u32),
        }
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.push(self.phys);
        buf.push(self.flags);
        buf.extend_from_slice(&self.reserved.to_le_bytes());
        buf.extend_from_slice(&self.row_count.to_le_bytes());
        buf.extend_from_slice(&self.payload_len.to_le_bytes());
    }

    pub fn read_from(slice: &[u8]) -> Option<Self> {
        if slice.len() < Self::LEN {
            return None;
        }
        let phys = slice[0];
        let flags = slice[1];
        let mut r = [0u8; 2];
        r.copy_from_slice(&slice[2..4]);
        let reserved = u16::from_le_bytes(r);
        let mut c = [0u8; 4];
        c.copy_from_slice(&slice[4..8]);
        let row_count = u32::from_le_bytes(c);
        c.copy_from_slice(&slice[8..12]);
        let payload_len = u32::from_le_bytes(c);
        Some(Self {
            phys,
            flags,
            reserved,
            row_count,
            payload_len,
        })
    }
}
