//! CLI domain: parse, route, output, and presentation only.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_listing_json, format_listing_text, format_stats_json, format_stats_text, format_tree,
};
pub use route::{resolve_path, CommandOutput, RunContext};
