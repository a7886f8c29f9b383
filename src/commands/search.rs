/// `search` command: fuzzy-search catalogue items.
use super::Session;
use crate::cli::OutputCtx;
use crate::cli::args::SearchArgs;
use crate::cli::output::write_search_results;
use crate::errors::PaletteError;
use crate::search::search;
use crate::types::SearchResultOutput;

/// Run `sunmenu search`.
///
/// # Errors
///
/// Cannot currently fail; a query with no matches prints an empty list.
pub fn run(args: &SearchArgs, session: &Session, ctx: &OutputCtx) -> Result<(), PaletteError> {
    let mut opts = session.search_options();
    if let Some(limit) = args.limit {
        opts.limit = limit;
    }
    let query = args.query.join(" ");

    let _t_search = ctx.timer("search");
    let hits = search(&query, session.catalogue.items(), &opts);
    drop(_t_search);

    let output: Vec<SearchResultOutput> = hits
        .iter()
        .enumerate()
        .map(|(i, hit)| SearchResultOutput::from_hit(i + 1, hit))
        .collect();

    write_search_results(&output, ctx);
    Ok(())
}
