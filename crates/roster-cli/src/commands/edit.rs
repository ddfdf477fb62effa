use tracing::info;

use roster_core::{Field, ProfileForm};

use crate::app::{resolve_record, AppContext};
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::complete_form;
use crate::output::{print_json, record_json};
use crate::ui::{blank_line, header, print, receipt, short_id};

pub async fn handle_edit(ctx: &AppContext<'_>, args: &EditArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let store = ctx.open_store()?;
    let records = store.load_all();
    let (index, record) = resolve_record(&records, &args.id)?;

    // Flags edit non-interactively; with no flags every field is re-prompted.
    let interactive = args.fields.is_empty() && !args.no_input && ui_ctx.is_interactive();
    if args.fields.is_empty() && !interactive {
        return Err(CliError::invalid_input_with_hint(
            "Nothing to change",
            "Pass field flags (e.g. --city Pune) or run on a TTY to be prompted.",
        )
        .into());
    }

    if interactive && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "edit", Some(&short_id(&record.id))));
        blank_line(&ui_ctx);
    }

    let original = ProfileForm::from_profile(&record.profile);
    let mut form = original.clone();
    let mut autofill = ctx.autofill()?;
    let profile = complete_form(&ui_ctx, &mut form, &args.fields, &mut autofill, interactive).await?;

    let changed: Vec<&str> = Field::ALL
        .iter()
        .filter(|field| original.get(**field) != form.get(**field))
        .map(|field| field.label())
        .collect();

    let updated = store.replace(&record.id, profile)?;
    info!(id = %updated.id, changed = changed.len(), "profile updated");

    if ui_ctx.mode.is_json() {
        return print_json(&record_json(&updated, index)?);
    }
    if ctx.quiet() {
        return Ok(());
    }

    let id = if ui_ctx.mode.is_pretty() {
        short_id(&updated.id)
    } else {
        updated.id.to_string()
    };
    let changed = if changed.is_empty() {
        "nothing".to_string()
    } else {
        changed.join(", ")
    };
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Profile updated",
            &[("ID", id.as_str()), ("Changed", changed.as_str())],
        ),
    );
    Ok(())
}
