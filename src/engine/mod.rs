pub mod core;
pub mod errors;
pub mod query;
pub mod source;

pub use errors::*;
