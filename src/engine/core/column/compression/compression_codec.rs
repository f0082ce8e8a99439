use crate::engine::errors::StoreError;

use lz4_flex::block::{
    compress_prepend_size as lz4_compress, decompress_into as lz4_decompress_into,
};

pub const ALGO_LZ4: u16 = 0x0001;

/// Length of the little-endian size prefix in front of every compressed block.
pub const SIZE_PREFIX_LEN: usize = 4;

pub trait CompressionCodec {
    fn algo_id(&self) -> u16;

    /// Compress `input`, prefixing the output with the uncompressed length.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, StoreError>;

    /// Decompress a prefix-stripped payload into `dst`, returning bytes written.
    fn decompress_into(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, StoreError>;
}

pub struct Lz4Codec;

impl CompressionCodec for Lz4Codec {
    fn algo_id(&self) -> u16 {
        ALGO_LZ4
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, StoreError> {
        Ok(lz4_compress(input))
    }

    fn decompress_into(&self, input: &[u8], dst: &mut [u8]) -> Result<usize, StoreError> {
        lz4_decompress_into(input, dst)
            .map_err(|e| StoreError::Compression(format!("lz4 decompress: {e}")))
    }
}

/// Read the uncompressed length stored in front of a compressed block.
pub fn prepended_size(compressed: &[u8]) -> Option<usize> {
    let prefix: [u8; SIZE_PREFIX_LEN] = compressed.get(..SIZE_PREFIX_LEN)?.try_into().ok()?;
    Some(u32::from_le_bytes(prefix) as usize)
}
