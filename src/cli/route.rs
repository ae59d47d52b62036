//! CLI route: run context and command dispatch.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation;
use crate::config::{ConfigLoader, VfsConfig};
use crate::error::ApiError;
use crate::index::Index;
use crate::tree::builder::TreeBuilder;
use crate::tree::hasher;
use crate::tree::id::identify;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// What a command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Rendered text, printed with a trailing newline
    Text(String),
    /// File content, written to stdout unchanged
    Bytes(Vec<u8>),
}

/// Resolved configuration for one CLI invocation
pub struct RunContext {
    root: PathBuf,
    config: VfsConfig,
}

impl RunContext {
    /// Load and validate configuration for `root`
    pub fn new(root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(&path)?,
            None => ConfigLoader::load(&root)?,
        };
        config.validate()?;
        Ok(Self { root, config })
    }

    pub fn with_config(root: PathBuf, config: VfsConfig) -> Self {
        Self { root, config }
    }

    pub fn config(&self) -> &VfsConfig {
        &self.config
    }

    fn build_index(&self) -> Result<Index, ApiError> {
        let index = TreeBuilder::new(self.root.clone())
            .with_walker_config(self.config.walker.clone())
            .build()?;
        Ok(index)
    }

    /// Run a command and return what should be printed
    #[instrument(skip(self))]
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, ApiError> {
        match command {
            Commands::Id { segment } => Ok(CommandOutput::Text(identify(segment, false)?)),
            Commands::Ls { ids, path, format } => {
                let ids = resolve_path(ids, path.as_deref())?;
                let index = self.build_index()?;
                let entries = index
                    .list(&ids)
                    .ok_or_else(|| ApiError::NotFound(format!("directory {}", Index::query_key(&ids))))?;
                debug!(entries = entries.len(), "Listed directory");
                let text = match format {
                    OutputFormat::Json => presentation::format_listing_json(&entries)?,
                    OutputFormat::Text => presentation::format_listing_text(&entries),
                };
                Ok(CommandOutput::Text(text))
            }
            Commands::Cat { ids, path } => {
                let ids = resolve_path(ids, path.as_deref())?;
                let index = self.build_index()?;
                let file = index
                    .read(&ids)
                    .ok_or_else(|| ApiError::NotFound(format!("file {}", Index::query_key(&ids))))?;
                Ok(CommandOutput::Bytes(file.content.to_vec()))
            }
            Commands::Tree { keys } => {
                let index = self.build_index()?;
                let color = std::io::stdout().is_terminal();
                Ok(CommandOutput::Text(presentation::format_tree(
                    &index, *keys, color,
                )))
            }
            Commands::Stats { format } => {
                let stats = self.build_index()?.stats();
                let text = match format {
                    OutputFormat::Json => presentation::format_stats_json(&stats)?,
                    OutputFormat::Text => presentation::format_stats_text(&stats),
                };
                Ok(CommandOutput::Text(text))
            }
        }
    }
}

/// Turn CLI addressing into an identifier path
///
/// Either explicit identifiers (validated as 64-char lowercase hex) or a
/// `/`-separated name path whose segments are hashed.
pub fn resolve_path(ids: &[String], path: Option<&str>) -> Result<Vec<String>, ApiError> {
    if let Some(path) = path {
        return Ok(path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(hasher::segment_id)
            .collect());
    }

    for id in ids {
        let valid = id.len() == 64
            && id
                .chars()
                .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
        if !valid {
            return Err(ApiError::InvalidIdentifier(id.clone()));
        }
    }
    Ok(ids.to_vec())
}
