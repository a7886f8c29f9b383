/// `keys` command: drive the menu state machine with a scripted key sequence.
use std::str::FromStr;

use super::{CliHost, Session};
use crate::cli::OutputCtx;
use crate::cli::args::KeysArgs;
use crate::cli::output::write_keys;
use crate::errors::PaletteError;
use crate::palette::{CommandMenu, Key};
use crate::recent::KeyValueStore;
use crate::types::{ItemOutput, KeysOutput};

/// One scripted input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Key(Key),
    Hover(usize),
    Leave(usize),
    Type(String),
    Toggle,
}

impl FromStr for Step {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PaletteError::InvalidKey { key: s.to_owned() };
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        let index = |arg: Option<&str>| arg.and_then(|a| a.trim().parse::<usize>().ok()).ok_or_else(invalid);

        match name.to_ascii_lowercase().as_str() {
            "down" | "arrowdown" => Ok(Self::Key(Key::ArrowDown)),
            "up" | "arrowup" => Ok(Self::Key(Key::ArrowUp)),
            "enter" => Ok(Self::Key(Key::Enter)),
            "toggle" => Ok(Self::Toggle),
            "hover" => index(arg).map(Self::Hover),
            "leave" => index(arg).map(Self::Leave),
            "type" => Ok(Self::Type(arg.unwrap_or_default().to_owned())),
            _ => Err(invalid()),
        }
    }
}

/// Apply `steps` to `menu`, returning every item selected along the way.
pub fn apply<S: KeyValueStore>(
    menu: &mut CommandMenu<S>,
    steps: &[Step],
    host: &mut CliHost,
) -> Vec<ItemOutput> {
    let mut selected = Vec::new();
    for step in steps {
        match step {
            Step::Key(key) => {
                if let Some(item) = menu.handle_key(*key, host) {
                    selected.push(ItemOutput::from(&item));
                }
            }
            Step::Hover(i) => menu.hover(*i),
            Step::Leave(i) => menu.leave(*i),
            Step::Type(text) => menu.set_query(text),
            Step::Toggle => menu.toggle(),
        }
    }
    selected
}

/// Run `sunmenu keys`.
///
/// # Errors
///
/// Returns `PaletteError::InvalidKey` for an unparseable key.
pub fn run(args: &KeysArgs, session: Session, ctx: &OutputCtx) -> Result<(), PaletteError> {
    let steps = args
        .keys
        .iter()
        .map(|k| k.parse::<Step>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut menu = session.into_menu();
    menu.open();
    menu.set_category(args.category);
    menu.set_query(&args.query);

    let mut host = CliHost::default();
    let _t_keys = ctx.timer("keys");
    let selected = apply(&mut menu, &steps, &mut host);
    drop(_t_keys);

    let output = KeysOutput {
        query: menu.query().to_owned(),
        category: menu.category().map(|c| c.to_string()),
        active_index: menu.active_index(),
        rows: menu.view().len(),
        open: menu.is_open(),
        selected,
    };
    write_keys(&output, ctx);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Catalogue;
    use crate::recent::{MemoryStore, RecentSelections};
    use crate::search::SearchOptions;

    fn steps(keys: &[&str]) -> Vec<Step> {
        keys.iter().map(|k| k.parse().unwrap()).collect()
    }

    #[test]
    fn test_parse_steps() {
        assert_eq!("down".parse::<Step>().unwrap(), Step::Key(Key::ArrowDown));
        assert_eq!("ArrowUp".parse::<Step>().unwrap(), Step::Key(Key::ArrowUp));
        assert_eq!("hover:3".parse::<Step>().unwrap(), Step::Hover(3));
        assert_eq!("type:le cal".parse::<Step>().unwrap(), Step::Type("le cal".to_owned()));
        assert_eq!("type".parse::<Step>().unwrap(), Step::Type(String::new()));
        assert!(matches!(
            "hover:x".parse::<Step>(),
            Err(PaletteError::InvalidKey { .. })
        ));
        assert!("jump".parse::<Step>().is_err());
    }

    #[test]
    fn test_apply_selects_search_result() {
        let catalogue = Catalogue::builtin().unwrap();
        let mut menu = CommandMenu::new(
            catalogue,
            RecentSelections::load(MemoryStore::new()),
            SearchOptions::default(),
        );
        menu.open();
        let mut host = CliHost::default();

        let selected = apply(&mut menu, &steps(&["type:leave cal", "enter"]), &mut host);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].slug, "leave-calendar");
        assert_eq!(host.navigated, ["/time/leave"]);
        assert!(host.closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_apply_down_past_end() {
        let catalogue = Catalogue::builtin().unwrap();
        let mut menu = CommandMenu::new(
            catalogue,
            RecentSelections::load(MemoryStore::new()),
            SearchOptions::default(),
        );
        menu.open();
        menu.set_query("employee directory");
        let rows = menu.view().len();
        let mut host = CliHost::default();
        let downs = vec![Step::Key(Key::ArrowDown); rows + 2];
        apply(&mut menu, &downs, &mut host);
        assert_eq!(menu.active_index(), Some(rows - 1));
    }
}
