//! CLI presentation: text and JSON rendering of query results.

use crate::error::ApiError;
use crate::index::{Index, IndexStats, Listing};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

pub fn format_listing_text(entries: &[Listing]) -> String {
    if entries.is_empty() {
        return "(empty directory)".to_string();
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Kind", "Id"]);
    for entry in entries {
        let kind = if entry.is_dir { "dir" } else { "file" };
        table.add_row(vec![entry.name.clone(), kind.to_string(), entry.id.clone()]);
    }
    table.to_string()
}

pub fn format_listing_json(entries: &[Listing]) -> Result<String, ApiError> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize listing: {}", e)))
}

pub fn format_stats_text(stats: &IndexStats) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Directories".to_string(), stats.directories.to_string()]);
    table.add_row(vec!["Files".to_string(), stats.files.to_string()]);
    table.add_row(vec!["Total bytes".to_string(), stats.total_bytes.to_string()]);
    table.add_row(vec!["Max depth".to_string(), stats.max_depth.to_string()]);
    table.to_string()
}

pub fn format_stats_json(stats: &IndexStats) -> Result<String, ApiError> {
    serde_json::to_string_pretty(stats)
        .map_err(|e| ApiError::ConfigError(format!("Failed to serialize stats: {}", e)))
}

/// Indented depth-first rendering; directories get a trailing `/`
pub fn format_tree(index: &Index, keys: bool, color: bool) -> String {
    let mut out = String::new();
    for (depth, node) in index.walk() {
        out.push_str(&"  ".repeat(depth));

        let label = if node.is_dir() {
            format!("{}/", node.name())
        } else {
            node.name().to_string()
        };
        if color && node.is_dir() {
            out.push_str(&format!("{}", label.blue().bold()));
        } else {
            out.push_str(&label);
        }

        if keys {
            let key = node.id().full_key();
            if color {
                out.push_str(&format!("  {}", key.dimmed()));
            } else {
                out.push_str(&format!("  {}", key));
            }
        }
        out.push('\n');
    }
    out
}
