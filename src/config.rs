//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global file, then the
//! tree-local `.vfs-index.toml`, then `VFS_INDEX__*` environment variables.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::tree::walker::WalkerConfig;
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

mod merge;
mod sources;

pub use sources::global_file::global_config_path;
pub use sources::local_file::{local_config_path, LOCAL_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VfsConfig {
    /// Traversal settings
    #[serde(default)]
    pub walker: WalkerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VfsConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.walker.max_depth == Some(0) {
            return Err(ApiError::ConfigError(
                "walker.max_depth must be at least 1".to_string(),
            ));
        }
        if let Some(bad) = self
            .walker
            .ignore_patterns
            .iter()
            .find(|p| p.is_empty() || p.contains('/'))
        {
            return Err(ApiError::ConfigError(format!(
                "walker.ignore_patterns entries must be bare names, got {:?}",
                bad
            )));
        }
        self.logging.validate()
    }
}

/// Loads [`VfsConfig`] from the layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for indexing `root`
    pub fn load(root: &Path) -> Result<VfsConfig, ConfigError> {
        let builder = merge::merge_policy::builder_with_defaults()?;
        let builder = sources::global_file::add_to_builder(builder)?;
        let builder = sources::local_file::add_to_builder(builder, root)?;
        let builder = sources::environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from one explicit file (defaults still apply)
    pub fn load_from_file(path: &Path) -> Result<VfsConfig, ConfigError> {
        merge::merge_policy::builder_with_defaults()?
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }
}
