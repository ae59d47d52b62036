//! Tree-local config file source: <root>/.vfs-index.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".vfs-index.toml";

pub fn local_config_path(root: &Path) -> PathBuf {
    root.join(LOCAL_CONFIG_FILE)
}

/// Add the tree-local config file to builder if present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let path = local_config_path(root);
    if path.exists() {
        return Ok(builder.add_source(File::from(path).required(false)));
    }
    Ok(builder)
}
