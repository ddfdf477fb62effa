//! Interactive prompts.
//!
//! Prompts block on the terminal, so they run through `block_in_place` to
//! keep lookup tasks on the runtime moving while the user types.

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use super::context::UiContext;

/// Prompt for a line of text.
///
/// `initial` pre-fills the editable line, so an existing value can be kept
/// with Enter or changed in place.
pub fn prompt_input(
    ctx: &UiContext,
    prompt: &str,
    initial: &str,
    allow_empty: bool,
) -> anyhow::Result<String> {
    require_interactive(ctx)?;

    let value = tokio::task::block_in_place(|| {
        let theme = ColorfulTheme::default();
        Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(allow_empty)
            .interact_text()
    })?;

    Ok(value)
}

/// Prompt for confirmation.
pub fn prompt_confirm(ctx: &UiContext, prompt: &str, default: bool) -> anyhow::Result<bool> {
    require_interactive(ctx)?;

    let confirmed = tokio::task::block_in_place(|| {
        let theme = ColorfulTheme::default();
        Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
    })?;

    Ok(confirmed)
}

fn require_interactive(ctx: &UiContext) -> anyhow::Result<()> {
    if ctx.is_interactive() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Interactive input required. Use flags or run on a TTY."
        ))
    }
}
