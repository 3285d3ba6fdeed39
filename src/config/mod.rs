//! TOML configuration: catalog source, display constants and logging.

mod loader;
mod types;

pub use loader::{ConfigError, ConfigOverrides};
pub use types::{
    Config, DisplaySettings, LoggingConfig, SourceConfig, DEFAULT_DESCRIPTION_LIMIT,
    DEFAULT_GENRE, DEFAULT_SOURCE_URL,
};
