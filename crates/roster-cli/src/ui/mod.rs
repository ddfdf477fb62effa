//! UI primitives for the Roster CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and color styles
//! - **Render**: Tables, headers, receipts, hints
//! - **Progress**: Spinner shown while a postal lookup runs
//! - **Prompt**: Interactive field and confirmation prompts
//! - **Format**: String utilities (truncate, short ids, dates)

mod context;
pub mod format;
pub mod mode;
pub mod progress;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, table, Column,
};

pub use progress::Spinner;

pub use format::{format_datetime, short_id, truncate};
