use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for vocabd
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Cache layer configuration
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Cache layer configuration, one TTL per cached entity type
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// TTL of per-author tag maps
    #[serde(default = "default_entity_ttl_secs")]
    pub tag_ttl_secs: u64,

    /// TTL of per-author language maps
    #[serde(default = "default_entity_ttl_secs")]
    pub lang_ttl_secs: u64,

    /// TTL of single translations and tag-filtered translation pages
    #[serde(default = "default_entity_ttl_secs")]
    pub translation_ttl_secs: u64,

    /// TTL of source/target text-search translation pages
    #[serde(default = "default_search_ttl_secs")]
    pub translation_search_ttl_secs: u64,

    /// How often expired entries are reclaimed in the background
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

const fn default_entity_ttl_secs() -> u64 {
    3600
}

const fn default_search_ttl_secs() -> u64 {
    600
}

const fn default_sweep_interval_secs() -> u64 {
    60
}

impl CacheConfig {
    pub const fn tag_ttl(&self) -> Duration {
        Duration::from_secs(self.tag_ttl_secs)
    }

    pub const fn lang_ttl(&self) -> Duration {
        Duration::from_secs(self.lang_ttl_secs)
    }

    pub const fn translation_ttl(&self) -> Duration {
        Duration::from_secs(self.translation_ttl_secs)
    }

    pub const fn translation_search_ttl(&self) -> Duration {
        Duration::from_secs(self.translation_search_ttl_secs)
    }

    pub const fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            tag_ttl_secs: default_entity_ttl_secs(),
            lang_ttl_secs: default_entity_ttl_secs(),
            translation_ttl_secs: default_entity_ttl_secs(),
            translation_search_ttl_secs: default_search_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files, stdout only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation: daily, hourly or never
    #[serde(default = "default_log_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_log_rotation(),
        }
    }
}
