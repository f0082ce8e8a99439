use crate::engine::core::column::compression::{
    CompressionCodec, Lz4Codec, SIZE_PREFIX_LEN, prepended_size,
};
use crate::engine::errors::ScanError;

use super::buffer::with_scratch;

/// Decompress a size-prepended block into scratch memory and hand the
/// uncompressed bytes to `decode`.
pub fn decompress_block_with<R, F>(
    compressed: &[u8],
    expected_uncomp_len: usize,
    decode: F,
) -> Result<R, ScanError>
where
    F: FnOnce(&[u8]) -> Result<R, ScanError>,
{
    let out_len = prepended_size(compressed)
        .ok_or_else(|| ScanError::ColRead("compressed block missing size prefix".into()))?;
    if out_len != expected_uncomp_len {
        return Err(ScanError::ColRead(format!(
            "block size mismatch: prefix={} catalog={}",
            out_len, expected_uncomp_len
        )));
    }
    let codec = Lz4Codec;
    with_scratch(out_len, |dst| {
        let written = codec
            .decompress_into(&compressed[SIZE_PREFIX_LEN..], dst)
            .map_err(|e| ScanError::ColRead(format!("decompress: {e}")))?;
        if written != out_len {
            return Err(ScanError::ColRead(format!(
                "short block: wrote {} of {} bytes",
                written, out_len
            )));
        }
        decode(dst)
    })
}
