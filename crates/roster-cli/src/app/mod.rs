//! Application-level utilities for the Roster CLI.
//!
//! This module provides:
//! - Path resolution for the config file and store directory
//! - A lazily-loaded application context shared by every command

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_record};
