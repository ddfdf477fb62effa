//! Filling the profile form from flags and prompts.

use tracing::debug;

use roster_core::lookup::PostalAutofill;
use roster_core::{Field, FieldStatus, Profile, ProfileForm};

use crate::cli::ProfileArgs;
use crate::constants::PROMPT_ORDER;
use crate::ui::prompt::prompt_input;
use crate::ui::{badge, print, Badge, Spinner, UiContext};

/// Drive `form` to a valid [`Profile`].
///
/// Flag values are applied first. When `interactive`, every field without a
/// flag is prompted for (pre-filled with its current value), and fields that
/// fail validation are asked again until the form passes. Otherwise the
/// first failed validation is returned.
///
/// A postal code change starts a lookup; its city and state land in the form
/// before those fields are prompted, and flag values for them always win.
pub async fn complete_form(
    ui: &UiContext,
    form: &mut ProfileForm,
    args: &ProfileArgs,
    autofill: &mut Option<PostalAutofill>,
    interactive: bool,
) -> anyhow::Result<Profile> {
    apply_args(form, args, autofill);

    if interactive {
        for field in PROMPT_ORDER {
            if args.value(field).is_some() {
                continue;
            }
            if matches!(field, Field::City | Field::State) {
                settle_lookup(ui, form, args, autofill).await;
            }
            prompt_field(ui, form, field, autofill)?;
        }
    }

    loop {
        settle_lookup(ui, form, args, autofill).await;

        match form.validate() {
            Ok(profile) => return Ok(profile),
            Err(errors) if interactive => {
                print(ui, &badge(ui, Badge::Warn, &errors.to_string()));
                for field in errors.fields {
                    prompt_field(ui, form, field, autofill)?;
                }
            }
            Err(errors) => return Err(errors.into()),
        }
    }
}

fn apply_args(
    form: &mut ProfileForm,
    args: &ProfileArgs,
    autofill: &mut Option<PostalAutofill>,
) {
    // Both parts given explicitly: a lookup could not change anything.
    let wants_lookup = args.city.is_none() || args.state.is_none();

    for field in PROMPT_ORDER {
        let Some(value) = args.value(field) else {
            continue;
        };
        if field == Field::PostalCode {
            let changed = set_postal_code(form, value);
            if changed && wants_lookup {
                notify_postal_change(form, autofill);
            }
        } else {
            form.set(field, value);
        }
    }
}

/// Set the postal code; returns whether the stored value changed.
fn set_postal_code(form: &mut ProfileForm, value: &str) -> bool {
    let before = form.postal_code().to_string();
    form.set_postal_code(value);
    form.postal_code() != before
}

fn notify_postal_change(form: &ProfileForm, autofill: &mut Option<PostalAutofill>) {
    if let Some(autofill) = autofill.as_mut() {
        if autofill.postal_code_changed(form.postal_code()) {
            debug!(postcode = %form.postal_code(), "postcode lookup started");
        }
    }
}

fn prompt_field(
    ui: &UiContext,
    form: &mut ProfileForm,
    field: Field,
    autofill: &mut Option<PostalAutofill>,
) -> anyhow::Result<()> {
    let value = prompt_input(ui, field.label(), form.get(field), field == Field::Address2)?;

    match field {
        Field::PostalCode => {
            if set_postal_code(form, &value) {
                notify_postal_change(form, autofill);
            }
            print_status(ui, "postal code", form.postal_code_status());
        }
        Field::Pan => {
            form.set(field, &value);
            print_status(ui, "PAN", form.pan_status());
        }
        _ => {
            form.set(field, &value);
        }
    }
    Ok(())
}

fn print_status(ui: &UiContext, label: &str, status: FieldStatus) {
    if !ui.mode.is_pretty() {
        return;
    }
    let message = if status.is_valid() {
        format!("Valid {}", label)
    } else {
        format!("Invalid {}", label)
    };
    print(ui, &badge(ui, Badge::for_status(status), &message));
}

/// Wait for a pending lookup and apply it, keeping explicit city/state flags.
async fn settle_lookup(
    ui: &UiContext,
    form: &mut ProfileForm,
    args: &ProfileArgs,
    autofill: &mut Option<PostalAutofill>,
) {
    let Some(autofill) = autofill.as_mut() else {
        return;
    };
    if !autofill.has_lookup() {
        return;
    }

    let spinner = Spinner::start(ui, "Looking up postal code");
    let applied = autofill.settle_into(form).await;
    spinner.finish();

    if applied.is_none() {
        return;
    }
    if let Some(city) = args.city.as_deref() {
        form.set_city(city);
    }
    if let Some(state) = args.state.as_deref() {
        form.set_state(state);
    }

    if ui.mode.is_pretty() {
        let message = format!(
            "{}, {} (from {})",
            form.get(Field::City),
            form.get(Field::State),
            form.postal_code()
        );
        print(ui, &badge(ui, Badge::Info, &message));
    }
}
