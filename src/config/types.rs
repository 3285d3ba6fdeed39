use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_URL: &str = "https://potterapi-fedeperin.vercel.app/en/books";
pub const DEFAULT_GENRE: &str = "Fantasy";
pub const DEFAULT_DESCRIPTION_LIMIT: usize = 150;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the catalog comes from and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning a JSON array of books.
    #[serde(default = "default_source_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
}

/// Presentation constants applied at the render boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Genre label shown for every book; the API has no per-book genre.
    #[serde(default = "default_genre")]
    pub genre: String,
    /// Card descriptions longer than this many characters are cut.
    #[serde(default = "default_description_limit")]
    pub description_limit: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive UI. Defaults to the user cache dir.
    #[serde(default)]
    pub file: Option<std::path::PathBuf>,
}

fn default_source_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

fn default_description_limit() -> usize {
    DEFAULT_DESCRIPTION_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            genre: default_genre(),
            description_limit: default_description_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
