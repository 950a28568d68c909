//! Configuration file loading for support-crew
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. See [`ConfigLoader::load`] for the priority order.

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileCrewConfig, FileLlmConfig, FileLoggingConfig, FileOpenAiConfig,
    FileOutputConfig, FileProvidersConfig, FileServerConfig, FileToolsConfig,
};
pub use loader::ConfigLoader;
