/// `select` command: record a selection and report its navigation target.
use super::{CliHost, Session};
use crate::cli::OutputCtx;
use crate::cli::args::SelectArgs;
use crate::cli::output::write_selection;
use crate::errors::PaletteError;
use crate::types::SelectionOutput;

/// Run `sunmenu select`.
///
/// # Errors
///
/// Returns `PaletteError::ItemNotFound` for an unknown slug.
pub fn run(args: &SelectArgs, session: Session, ctx: &OutputCtx) -> Result<(), PaletteError> {
    let item = session
        .catalogue
        .get(&args.slug)
        .cloned()
        .ok_or_else(|| PaletteError::ItemNotFound {
            slug: args.slug.clone(),
        })?;

    let mut menu = session.into_menu();
    let mut host = CliHost::default();

    let _t_select = ctx.timer("select");
    menu.select(&item, &mut host);
    drop(_t_select);

    let output = SelectionOutput {
        slug: item.slug,
        url: host.navigated.pop().unwrap_or(item.url),
        recent_count: menu.recent().len(),
        persisted: menu.recent().is_persistent(),
    };
    write_selection(&output, ctx);
    Ok(())
}
