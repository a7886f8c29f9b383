/// `browse` command: the blank-query view of recents and grouped categories.
use super::Session;
use crate::cli::OutputCtx;
use crate::cli::args::BrowseArgs;
use crate::cli::output::write_browse;
use crate::errors::PaletteError;
use crate::palette::MenuView;
use crate::types::{BrowseOutput, CategoryOutput, GroupOutput, ItemOutput};

/// Run `sunmenu browse`.
///
/// # Errors
///
/// Cannot currently fail; storage problems fall back to memory-only recents.
pub fn run(args: &BrowseArgs, session: Session, ctx: &OutputCtx) -> Result<(), PaletteError> {
    let mut menu = session.into_menu();
    menu.open();
    menu.set_category(args.category);

    let _t_view = ctx.timer("view");
    let output = browse_output(&menu.view());
    drop(_t_view);

    write_browse(&output, ctx);
    Ok(())
}

fn browse_output(view: &MenuView<'_>) -> BrowseOutput {
    BrowseOutput {
        recent: view.recent.iter().copied().map(ItemOutput::from).collect(),
        categories: view
            .sections
            .iter()
            .map(|section| CategoryOutput {
                category: section.category.to_string(),
                groups: section
                    .groups
                    .iter()
                    .map(|g| GroupOutput {
                        key: g.key.to_owned(),
                        name: g.name.to_owned(),
                        items: g.items.iter().copied().map(ItemOutput::from).collect(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
