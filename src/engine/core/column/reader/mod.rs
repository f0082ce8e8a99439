pub mod buffer;
pub mod decoders;
pub mod decompress;
pub mod io;
pub mod view;

pub use buffer::with_scratch;
pub use decoders::{BlockValues, ColumnDecoder, decoder_for};
pub use decompress::decompress_block_with;
pub use view::{ColumnBlockView, encode_block};
