/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod browse;
pub mod keys;
pub mod list;
pub mod recent;
pub mod search;
pub mod select;

use std::path::PathBuf;

use log::debug;

use crate::catalogue::Catalogue;
use crate::cli::args::{Cli, Command};
use crate::cli::OutputCtx;
use crate::config::{Config, load_config};
use crate::errors::PaletteError;
use crate::palette::{CommandMenu, MenuHost};
use crate::recent::{RecentSelections, SessionStore};
use crate::search::SearchOptions;

/// Everything a command needs: configuration, catalogue, storage location.
pub struct Session {
    pub config: Config,
    pub catalogue: Catalogue,
    /// Explicit data directory; `None` means the platform default.
    pub data_dir: Option<PathBuf>,
}

impl Session {
    /// Load config and catalogue, applying CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `PaletteError::Config` or `PaletteError::Catalogue`.
    pub fn open(cli: &Cli, ctx: &OutputCtx) -> Result<Self, PaletteError> {
        let _t_config = ctx.timer("load_config");
        let config = load_config(cli.config.as_deref())
            .map_err(|e| PaletteError::Config(format!("{e:#}")))?;
        drop(_t_config);

        let catalogue_path = cli.catalogue.clone().or_else(|| config.catalogue.path.clone());
        let _t_catalogue = ctx.timer("load_catalogue");
        let catalogue = Catalogue::load_or_builtin(catalogue_path.as_deref())?;
        drop(_t_catalogue);

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| config.recent.data_dir.clone());

        Ok(Self {
            config,
            catalogue,
            data_dir,
        })
    }

    /// Search options from config.
    #[must_use]
    pub fn search_options(&self) -> SearchOptions {
        self.config.search.options()
    }

    /// The recent list, persisted when a data directory is available and
    /// memory-only otherwise.
    #[must_use]
    pub fn recent(&self) -> RecentSelections<SessionStore> {
        let store = SessionStore::resolve(self.data_dir.as_deref());
        match store.path() {
            Some(path) => debug!("Recent: using {}", path.display()),
            None => debug!("Recent: using memory store"),
        }
        RecentSelections::load_with(
            store,
            &self.config.recent.storage_key,
            self.config.recent.max_entries,
        )
    }

    /// A menu over this session's catalogue and recent list.
    #[must_use]
    pub fn into_menu(self) -> CommandMenu<SessionStore> {
        let recent = self.recent();
        let options = self.search_options();
        CommandMenu::new(self.catalogue, recent, options)
    }
}

/// Host for menu side effects in a terminal: navigation is reported, not performed.
#[derive(Debug, Default)]
pub struct CliHost {
    pub navigated: Vec<String>,
    pub closed: bool,
}

impl MenuHost for CliHost {
    fn navigate(&mut self, url: &str) {
        self.navigated.push(url.to_owned());
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn reveal(&mut self, index: usize) {
        debug!("reveal row {index}");
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns `PaletteError` on any command failure.
pub fn dispatch(command: &Command, session: Session, ctx: &OutputCtx) -> Result<(), PaletteError> {
    match command {
        Command::Search(args) => search::run(args, &session, ctx),
        Command::Browse(args) => browse::run(args, session, ctx),
        Command::List(args) => list::run(args, &session, ctx),
        Command::Select(args) => select::run(args, session, ctx),
        Command::Recent => recent::run(&session, ctx),
        Command::Keys(args) => keys::run(args, session, ctx),
    }
}
