/// Command-menu interaction layer: cursor state machine and menu composition.
pub mod cursor;
pub mod menu;

pub use cursor::{Cursor, Key};
pub use menu::{CategorySection, CommandMenu, MenuHost, MenuView, Section};
