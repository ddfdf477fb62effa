use crate::app::{resolve_record, AppContext};
use crate::cli::ShowArgs;
use crate::output::{print_json, print_record, record_json};

pub fn handle_show(ctx: &AppContext<'_>, args: &ShowArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let store = ctx.open_store()?;
    let records = store.load_all();
    let (index, record) = resolve_record(&records, &args.id)?;

    if ui_ctx.mode.is_json() {
        return print_json(&record_json(&record, index)?);
    }

    print_record(&ui_ctx, &record, index);
    Ok(())
}
