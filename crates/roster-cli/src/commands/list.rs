use roster_core::filter_by_name;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::{matches_json, print_json, print_record_list};

pub fn handle_list(ctx: &AppContext<'_>, args: &ListArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let store = ctx.open_store()?;
    let records = store.load_all();

    let search = args.search.as_deref().unwrap_or("");
    let mut matches = filter_by_name(&records, search);
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }

    if ui_ctx.mode.is_json() {
        return print_json(&matches_json(&matches)?);
    }

    print_record_list(&ui_ctx, &matches, args.search.as_deref(), records.len());
    Ok(())
}
