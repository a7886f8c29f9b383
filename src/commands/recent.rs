/// `recent` command: show recent selections, refreshed from the catalogue.
use super::Session;
use crate::cli::OutputCtx;
use crate::cli::output::write_items;
use crate::errors::PaletteError;
use crate::types::ItemOutput;

/// Run `sunmenu recent`.
///
/// # Errors
///
/// Cannot currently fail; storage problems fall back to memory-only recents.
pub fn run(session: &Session, ctx: &OutputCtx) -> Result<(), PaletteError> {
    let recent = session.recent();
    let output: Vec<ItemOutput> = recent
        .get_recent(&session.catalogue)
        .into_iter()
        .map(ItemOutput::from)
        .collect();

    write_items(&output, ctx);
    Ok(())
}
