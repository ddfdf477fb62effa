//! Roster CLI - keep a validated, searchable list of contact profiles
//!
//! This is the command-line interface for Roster. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use roster_core::{FormErrors, RosterError, VERSION};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{add, delete, edit, init, list, lookup, misc, show};
use crate::errors::{exit_code_for, CliError};
use crate::ui::print_error;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli).await {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let hint = extract_error_hint(&e);

        print_error(&ui_ctx, &error_msg, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Pick a hint for an error: the one a [`CliError`] carries, or a
/// contextual one for common failures.
fn extract_error_hint(error: &anyhow::Error) -> Option<String> {
    if let Some(cli_err) = error.downcast_ref::<CliError>() {
        return cli_err.hint().map(str::to_string);
    }

    if error.downcast_ref::<FormErrors>().is_some() {
        return Some(
            "Pass the listed fields as flags, or run `roster add` on a TTY to be prompted."
                .to_string(),
        );
    }

    match error.downcast_ref::<RosterError>() {
        Some(RosterError::Lookup(_)) => {
            return Some(
                "Check the [lookup] endpoint in the config, or pass --offline.".to_string(),
            );
        }
        Some(RosterError::Storage(_)) => {
            return Some(
                "Check that the store directory exists and is writable (see --store)."
                    .to_string(),
            );
        }
        _ => {}
    }

    let error_lower = error.to_string().to_lowercase();
    if error_lower.contains("failed to parse config") {
        return Some(
            "Fix or remove the config file; ROSTER_CONFIG points at another one.".to_string(),
        );
    }

    None
}

async fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            add::handle_add(ctx, args).await?;
        }
        Some(Commands::List(args)) => {
            list::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            show::handle_show(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            edit::handle_edit(ctx, args).await?;
        }
        Some(Commands::Delete(args)) => {
            delete::handle_delete(ctx, args)?;
        }
        Some(Commands::Lookup(args)) => {
            lookup::handle_lookup(ctx, args).await?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("Roster v{}", VERSION);
            println!("\nQuickstart:");
            println!("  roster init");
            println!("  roster add");
            println!("  roster list --search asha");
            println!("  roster show <id>");
            println!("\nRun `roster --help` for full usage.");
        }
    }

    Ok(())
}
