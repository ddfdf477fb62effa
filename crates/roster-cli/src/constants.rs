//! Constants used throughout the CLI.

use roster_core::Field;

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Unhandled failure (I/O, storage write, config parse).
    pub const FAILURE: i32 = 1;

    /// Resource not found (profile, config).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or a form that failed validation.
    pub const INVALID_INPUT: i32 = 4;
}

/// Minimum length of an ID prefix accepted by `show`, `edit` and `delete`.
pub const MIN_ID_PREFIX_LEN: usize = 4;

/// Order in which interactive prompts walk the form.
///
/// The postal code is asked before the address lines; city and state come last.
pub const PROMPT_ORDER: [Field; 9] = [
    Field::Name,
    Field::Email,
    Field::Number,
    Field::Pan,
    Field::PostalCode,
    Field::Address1,
    Field::Address2,
    Field::City,
    Field::State,
];
