use serde::Deserialize;
use std::env;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub query: QueryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Directory for the daily rolling log file; no file logging when unset
    pub log_dir: Option<String>,
    #[serde(default = "default_console_level")]
    pub console_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            console_level: default_console_level(),
            file_level: default_file_level(),
        }
    }
}

fn default_console_level() -> String {
    "warn".to_string()
}

fn default_file_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_table")]
    pub table: String,
    /// The three momentum components, in (x, y, z) order
    #[serde(default = "default_columns")]
    pub columns: [String; 3],
    #[serde(default = "default_bucket_width")]
    pub bucket_width: u64,
    #[serde(default = "default_passes")]
    pub passes: u32,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            columns: default_columns(),
            bucket_width: default_bucket_width(),
            passes: default_passes(),
        }
    }
}

fn default_table() -> String {
    "DecayTree".to_string()
}

fn default_columns() -> [String; 3] {
    [
        "H1_PX".to_string(),
        "H1_PY".to_string(),
        "H1_PZ".to_string(),
    ]
}

fn default_bucket_width() -> u64 {
    10_000
}

fn default_passes() -> u32 {
    3
}

#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_rows_per_block")]
    pub rows_per_block: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            rows_per_block: default_rows_per_block(),
        }
    }
}

fn default_rows_per_block() -> usize {
    65_536
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("COLSCAN_CONFIG").unwrap_or_else(|_| "config".to_string());
    load_settings_from(&config_path)
}

/// Defaults, overlaid with the optional config file at `config_path`, overlaid
/// with `COLSCAN__SECTION__KEY` environment variables.
pub fn load_settings_from(config_path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(config_path).required(false))
        .add_source(config::Environment::with_prefix("COLSCAN").separator("__"))
        .build()?
        .try_deserialize()?;

    if settings.query.bucket_width == 0 {
        return Err(config::ConfigError::Message(
            "query.bucket_width must be greater than zero".to_string(),
        ));
    }
    if settings.storage.rows_per_block == 0 {
        return Err(config::ConfigError::Message(
            "storage.rows_per_block must be greater than zero".to_string(),
        ));
    }

    Ok(settings)
}
