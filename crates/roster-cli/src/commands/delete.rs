use tracing::info;

use crate::app::{resolve_record, AppContext};
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::ui::prompt::prompt_confirm;
use crate::ui::{print, receipt, short_id};

pub fn handle_delete(ctx: &AppContext<'_>, args: &DeleteArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let store = ctx.open_store()?;
    let records = store.load_all();
    let (_, record) = resolve_record(&records, &args.id)?;

    if !args.force {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to delete without confirmation",
                "Pass --force to delete non-interactively.",
            )
            .into());
        }
        let question = format!(
            "Delete profile {} ({})?",
            record.name(),
            short_id(&record.id)
        );
        if !prompt_confirm(&ui_ctx, &question, false)? {
            print(&ui_ctx, "Cancelled.");
            return Ok(());
        }
    }

    let removed = store.delete(&record.id)?;
    info!(id = %removed.id, "profile deleted");

    if !ctx.quiet() {
        let id = removed.id.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Profile deleted",
                &[("ID", id.as_str()), ("Name", removed.name())],
            ),
        );
    }
    Ok(())
}
