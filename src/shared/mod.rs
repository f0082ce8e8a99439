pub mod config;
pub mod storage_header;
