// Configuration management module
// Handles the TOML configuration file and validated settings

pub mod settings;

pub use settings::{ChatConfig, Config, ConfigError, OpenAiConfig};

/// Get the default configuration directory path
#[inline]
pub fn get_config_dir() -> Result<std::path::PathBuf, ConfigError> {
    Config::default_dir()
}
