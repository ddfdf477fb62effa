use tracing::info;

use roster_core::{filter_by_name, ProfileForm};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::complete_form;
use crate::output::{print_json, print_record_list, record_json};
use crate::ui::{blank_line, header, print, receipt, short_id};

pub async fn handle_add(ctx: &AppContext<'_>, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let interactive = !args.no_input && ui_ctx.is_interactive();
    let store = ctx.open_store()?;
    let mut autofill = ctx.autofill()?;

    if interactive && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "add", None));
        blank_line(&ui_ctx);
    }

    let mut form = ProfileForm::new();
    let profile = complete_form(&ui_ctx, &mut form, &args.fields, &mut autofill, interactive).await?;
    let record = store.submit(profile)?;
    info!(id = %record.id, "profile saved");

    let records = store.load_all();
    let index = records
        .iter()
        .position(|r| r.id == record.id)
        .unwrap_or(records.len());

    if ui_ctx.mode.is_json() {
        return print_json(&record_json(&record, index)?);
    }

    if ctx.quiet() {
        println!("{}", record.id);
        return Ok(());
    }

    let id = if ui_ctx.mode.is_pretty() {
        short_id(&record.id)
    } else {
        record.id.to_string()
    };
    print(
        &ui_ctx,
        &receipt(&ui_ctx, "Profile saved", &[("ID", id.as_str()), ("Name", record.name())]),
    );

    // A save ends on the listing.
    if ui_ctx.mode.is_pretty() {
        blank_line(&ui_ctx);
        let matches = filter_by_name(&records, "");
        print_record_list(&ui_ctx, &matches, None, records.len());
    }

    Ok(())
}
