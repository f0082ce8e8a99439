pub mod model;

pub use model::{LoggingConfig, QueryConfig, Settings, StorageConfig, load_settings, load_settings_from};

#[cfg(test)]
mod model_test;
