/// Output formatting: JSON, table, url/slug modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{BrowseOutput, ItemOutput, KeysOutput, SearchResultOutput, SelectionOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub fields: Option<Vec<String>>,
    pub no_header: bool,
    /// When true, log timing spans.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(
        fmt: OutputFormat,
        json_flag: bool,
        fields: Option<&str>,
        no_header: bool,
        debug: bool,
    ) -> Self {
        let format = resolve_format(fmt, json_flag);
        let fields = fields.map(|f| f.split(',').map(str::trim).map(str::to_owned).collect());
        Self {
            format,
            fields,
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Whether a field should be included in output.
    fn include_field(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|f| f.iter().any(|n| n == name))
    }
}

// --- Catalogue items ---

/// Write a list of `ItemOutput` to stdout.
pub fn write_items(items: &[ItemOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Compact => print_compact_json(items),
        OutputFormat::Ndjson => print_ndjson(items),
        OutputFormat::Url => {
            for item in items {
                println!("{}", item.url);
            }
        }
        OutputFormat::Slug => {
            for item in items {
                println!("{}", item.slug);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => println!("{}", items_table(items, ctx)),
    }
}

fn items_table(items: &[ItemOutput], ctx: &OutputCtx) -> Table {
    const COLUMNS: [(&str, &str); 6] = [
        ("slug", "SLUG"),
        ("content", "CONTENT"),
        ("category", "CATEGORY"),
        ("group", "GROUP"),
        ("kind", "KIND"),
        ("url", "URL"),
    ];

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);

    if !ctx.no_header {
        let headers: Vec<Cell> = COLUMNS
            .iter()
            .filter(|(field, _)| ctx.include_field(field))
            .map(|(_, header)| Cell::new(header))
            .collect();
        table.set_header(headers);
    }

    for item in items {
        let content = if item.is_new {
            format!("{} (new)", item.content)
        } else {
            item.content.clone()
        };
        let values = [
            item.slug.as_str(),
            content.as_str(),
            item.category.as_str(),
            item.group_name.as_str(),
            item.kind.as_str(),
            item.url.as_str(),
        ];
        let row: Vec<Cell> = COLUMNS
            .iter()
            .zip(values)
            .filter(|((field, _), _)| ctx.include_field(field))
            .map(|(_, value)| Cell::new(value))
            .collect();
        table.add_row(row);
    }
    table
}

// --- Search results ---

/// Write search results to stdout.
pub fn write_search_results(results: &[SearchResultOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(results),
        OutputFormat::Compact => print_compact_json(results),
        OutputFormat::Ndjson => print_ndjson(results),
        OutputFormat::Url => {
            for r in results {
                println!("{}", r.url);
            }
        }
        OutputFormat::Slug => {
            for r in results {
                println!("{}", r.slug);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_search_table(results, ctx),
    }
}

fn write_search_table(results: &[SearchResultOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["#", "CONTENT", "CATEGORY", "MATCH", "SCORE", "URL"]);
    }
    for r in results {
        table.add_row([
            r.rank.to_string().as_str(),
            r.content.as_str(),
            r.category.as_str(),
            r.tier.as_str(),
            r.score.to_string().as_str(),
            r.url.as_str(),
        ]);
    }
    println!("{table}");
}

// --- Browse view ---

/// Write the browse view to stdout.
pub fn write_browse(view: &BrowseOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(view),
        OutputFormat::Compact => print_compact_json(view),
        OutputFormat::Ndjson => print_ndjson(&browse_rows(view)),
        OutputFormat::Url => {
            for item in browse_rows(view) {
                println!("{}", item.url);
            }
        }
        OutputFormat::Slug => {
            for item in browse_rows(view) {
                println!("{}", item.slug);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_browse_visual(view),
    }
}

/// Rows in cursor order: recents, then grouped items.
fn browse_rows(view: &BrowseOutput) -> Vec<&ItemOutput> {
    view.recent
        .iter()
        .chain(
            view.categories
                .iter()
                .flat_map(|c| c.groups.iter())
                .flat_map(|g| g.items.iter()),
        )
        .collect()
}

fn write_browse_visual(view: &BrowseOutput) {
    let mut row = 0usize;
    if !view.recent.is_empty() {
        println!("Recent");
        for item in &view.recent {
            println!("  {row:>3}  {}  {}", item.content, item.url);
            row += 1;
        }
    }
    for category in &view.categories {
        println!("{}", category.category);
        let count = category.groups.len();
        for (i, group) in category.groups.iter().enumerate() {
            let last = i + 1 == count;
            let connector = if last { "└── " } else { "├── " };
            let child_prefix = if last { "    " } else { "│   " };
            println!("{connector}{}", group.name);
            for item in &group.items {
                let new = if item.is_new { " (new)" } else { "" };
                println!("{child_prefix}{row:>3}  {}{new}  {}", item.content, item.url);
                row += 1;
            }
        }
    }
}

// --- Selection ---

/// Write a selection result to stdout.
pub fn write_selection(result: &SelectionOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json | OutputFormat::Auto => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&[result]),
        OutputFormat::Slug => println!("{}", result.slug),
        OutputFormat::Url | OutputFormat::Table => {
            let memory = if result.persisted { "" } else { " [not persisted]" };
            println!("{}{memory}", result.url);
        }
    }
}

// --- Scripted keys ---

/// Write the final state of a scripted key run to stdout.
pub fn write_keys(result: &KeysOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json | OutputFormat::Auto => print_json(result),
        OutputFormat::Compact => print_compact_json(result),
        OutputFormat::Ndjson => print_ndjson(&[result]),
        OutputFormat::Url => {
            for item in &result.selected {
                println!("{}", item.url);
            }
        }
        OutputFormat::Slug => {
            for item in &result.selected {
                println!("{}", item.slug);
            }
        }
        OutputFormat::Table => {
            let active = result
                .active_index
                .map_or_else(|| "none".to_owned(), |i| i.to_string());
            let state = if result.open { "open" } else { "closed" };
            println!("menu {state}, active row {active} of {}", result.rows);
            for item in &result.selected {
                println!("selected {} -> {}", item.slug, item.url);
            }
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &crate::types::ErrorOutput, format: OutputFormat, json_flag: bool) {
    let fmt = resolve_format(format, json_flag);
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match fmt {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            log::debug!("timing {}: {ms:.2}ms", self.label);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(fields: Option<&str>) -> OutputCtx {
        OutputCtx::new(OutputFormat::Table, false, fields, false, false)
    }

    fn item(slug: &str, is_new: bool) -> ItemOutput {
        ItemOutput {
            slug: slug.to_owned(),
            content: slug.to_uppercase(),
            url: format!("/{slug}"),
            category: "tasks".to_owned(),
            group: "board".to_owned(),
            group_name: "Board".to_owned(),
            kind: "navigation".to_owned(),
            is_new,
            description: None,
        }
    }

    #[test]
    fn test_json_flag_wins() {
        assert_eq!(resolve_format(OutputFormat::Table, true), OutputFormat::Json);
        assert_eq!(resolve_format(OutputFormat::Slug, false), OutputFormat::Slug);
    }

    #[test]
    fn test_field_projection() {
        let c = ctx(Some("slug, url"));
        assert!(c.include_field("slug"));
        assert!(c.include_field("url"));
        assert!(!c.include_field("kind"));
        assert!(ctx(None).include_field("kind"));
    }

    #[test]
    fn test_items_table_projection() {
        let table = items_table(&[item("a", true), item("b", false)], &ctx(Some("slug,content")));
        let rendered = table.to_string();
        assert!(rendered.contains("SLUG"));
        assert!(rendered.contains("A (new)"));
        assert!(!rendered.contains("URL"));
        assert!(!rendered.contains("/a"));
    }

    #[test]
    fn test_browse_rows_order() {
        let view = BrowseOutput {
            recent: vec![item("r", false)],
            categories: vec![crate::types::CategoryOutput {
                category: "tasks".to_owned(),
                groups: vec![crate::types::GroupOutput {
                    key: "board".to_owned(),
                    name: "Board".to_owned(),
                    items: vec![item("x", false), item("y", false)],
                }],
            }],
        };
        let slugs: Vec<&str> = browse_rows(&view).iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, ["r", "x", "y"]);
    }
}
