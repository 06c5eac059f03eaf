//! Configuration file loading for multiedit
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./multiedit.toml` or `./.multiedit.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/multiedit/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileFallbackConfig, FileOutputConfig, FileOutputFormat,
    FileVocabularyConfig,
};
pub use loader::ConfigLoader;
