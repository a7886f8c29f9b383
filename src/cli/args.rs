/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catalogue::Category;

/// sunmenu — search, browse and select Sun dashboard pages from the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "sunmenu",
    about = "Command-menu search, browsing and recent selections for the Sun dashboard",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Comma-separated field names to include in table output (projection).
    #[arg(long, global = true, value_name = "FIELDS")]
    pub fields: Option<String>,

    /// Omit table headers (useful for awk/cut processing).
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log debug output and timings to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Config file (default: platform config dir).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Catalogue JSON file, overriding the config.
    #[arg(long, global = true, value_name = "PATH")]
    pub catalogue: Option<PathBuf>,

    /// Directory for persisted state, overriding the config.
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// Navigation URL only, one per line.
    Url,
    /// Slug only, one per line.
    Slug,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fuzzy-search the catalogue.
    Search(SearchArgs),
    /// Show recent selections and the catalogue grouped by category.
    Browse(BrowseArgs),
    /// List catalogue items.
    List(ListArgs),
    /// Select an item: record it as recent and print where it navigates.
    Select(SelectArgs),
    /// Show recent selections.
    Recent,
    /// Drive the menu with a scripted key sequence.
    Keys(KeysArgs),
}

/// Arguments for `sunmenu search`.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query; several words must all match.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of results (default from config).
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for `sunmenu browse`.
#[derive(Debug, Parser)]
pub struct BrowseArgs {
    /// Only show one category.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,
}

/// Arguments for `sunmenu list`.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Only list one category.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Only list items flagged as new.
    #[arg(long)]
    pub new_only: bool,
}

/// Arguments for `sunmenu select`.
#[derive(Debug, Parser)]
pub struct SelectArgs {
    /// Slug of the catalogue item.
    pub slug: String,
}

/// Arguments for `sunmenu keys`.
#[derive(Debug, Parser)]
pub struct KeysArgs {
    /// Initial query text.
    #[arg(long, default_value = "")]
    pub query: String,

    /// Initial category filter for the browse view.
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<Category>,

    /// Keys to apply in order: down, up, enter, hover:<n>, leave:<n>,
    /// type:<text>, toggle.
    #[arg(value_name = "KEY")]
    pub keys: Vec<String>,
}
