use std::path::PathBuf;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_dir, write_config, RosterConfig};
use crate::errors::CliError;
use crate::ui::{blank_line, hint, print, receipt};

pub fn handle_init(ctx: &AppContext<'_>, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let config_path = resolve_config_path()?;

    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Pass --force to overwrite it.",
        )
        .into());
    }

    let store_dir = match args.path.as_deref().or(ctx.cli().store.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_dir()?,
    };
    std::fs::create_dir_all(&store_dir).map_err(|e| {
        anyhow::anyhow!(
            "Failed to create store directory {}: {}",
            store_dir.display(),
            e
        )
    })?;

    let config = RosterConfig::new(store_dir.clone(), args.endpoint.clone());
    write_config(&config_path, &config)?;

    if ctx.quiet() {
        return Ok(());
    }

    let config_display = config_path.display().to_string();
    let store_display = store_dir.display().to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Roster initialized",
            &[
                ("Config", config_display.as_str()),
                ("Store", store_display.as_str()),
                ("Lookup", config.lookup.endpoint.as_str()),
            ],
        ),
    );
    if ui_ctx.mode.is_pretty() {
        blank_line(&ui_ctx);
        print(&ui_ctx, &hint(&ui_ctx, "roster add"));
    }
    Ok(())
}
