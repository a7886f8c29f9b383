/// `list` command: list catalogue items.
use super::Session;
use crate::cli::OutputCtx;
use crate::cli::args::ListArgs;
use crate::cli::output::write_items;
use crate::errors::PaletteError;
use crate::types::ItemOutput;

/// Run `sunmenu list`.
///
/// # Errors
///
/// Cannot currently fail.
pub fn run(args: &ListArgs, session: &Session, ctx: &OutputCtx) -> Result<(), PaletteError> {
    let output: Vec<ItemOutput> = session
        .catalogue
        .items()
        .iter()
        .filter(|i| args.category.is_none_or(|c| c == i.category))
        .filter(|i| !args.new_only || i.is_new)
        .map(ItemOutput::from)
        .collect();

    write_items(&output, ctx);
    Ok(())
}
