pub mod compression_codec;

pub use compression_codec::{
    ALGO_LZ4, CompressionCodec, Lz4Codec, SIZE_PREFIX_LEN, prepended_size,
};
