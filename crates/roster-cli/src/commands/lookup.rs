use roster_core::validate::validate_postal_code;

use crate::app::AppContext;
use crate::cli::LookupArgs;
use crate::errors::CliError;
use crate::output::{locality_json, print_json};
use crate::ui::format::or_dash;
use crate::ui::{print, receipt, Spinner};

pub async fn handle_lookup(ctx: &AppContext<'_>, args: &LookupArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let postcode = args.postcode.trim();

    if !validate_postal_code(postcode) {
        return Err(CliError::invalid_input(format!(
            "Invalid postal code: {} (expected 6 digits)",
            postcode
        ))
        .into());
    }

    let resolver = ctx.resolver()?.ok_or_else(|| {
        CliError::invalid_input_with_hint(
            "Postal lookup is disabled",
            "Drop --offline, or set `enabled = true` under [lookup] in the config.",
        )
    })?;

    let spinner = Spinner::start(&ui_ctx, "Looking up postal code");
    let outcome = resolver.resolve(postcode).await;
    spinner.finish();
    let locality = outcome?;

    if ui_ctx.mode.is_json() {
        return print_json(&locality_json(postcode, &locality));
    }

    let city = locality.city.as_deref().unwrap_or_default();
    let state = locality.state.as_deref().unwrap_or_default();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Postal code found",
            &[
                ("Postal Code", postcode),
                ("City", or_dash(city)),
                ("State", or_dash(state)),
            ],
        ),
    );
    Ok(())
}
