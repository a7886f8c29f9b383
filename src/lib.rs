#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]
//! sunmenu — command-menu search, browsing and recent selections for the Sun
//! dashboard catalogue.
//!
//! The library is UI-agnostic: [`search::search`] ranks catalogue items for a
//! query, [`recent::RecentSelections`] keeps the bounded recents list in any
//! [`recent::KeyValueStore`], and [`palette::CommandMenu`] ties both to the
//! keyboard cursor. The `sunmenu` binary wraps them in a CLI.

pub mod catalogue;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod palette;
pub mod recent;
pub mod search;
pub mod types;

pub use catalogue::{Catalogue, Category, SearchableItem};
pub use errors::PaletteError;
pub use palette::{CommandMenu, Key, MenuHost};
pub use recent::{KeyValueStore, RecentSelections};
pub use search::{SearchHit, SearchOptions, search};
