#![deny(clippy::all, clippy::pedantic)]
//! sunmenu — search and select Sun dashboard pages from the terminal.

use clap::Parser;

use sunmenu::cli::{Cli, OutputCtx, write_error};
use sunmenu::commands::{self, Session};
use sunmenu::types::ErrorOutput;

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let ctx = OutputCtx::new(
        cli.output,
        cli.json,
        cli.fields.as_deref(),
        cli.no_header,
        cli.debug,
    );

    let result = Session::open(&cli, &ctx).and_then(|session| commands::dispatch(&cli.command, session, &ctx));

    if let Err(err) = result {
        let error_output = ErrorOutput::from_palette_error(&err);
        write_error(&error_output, cli.output, cli.json);
        std::process::exit(err.exit_code());
    }
}
