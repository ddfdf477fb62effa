//! # Roster Core
//!
//! Core library for Roster - a local profile roster with a validated entry
//! form and a searchable listing.
//!
//! This crate provides the domain logic, storage abstractions, and data models
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **validate**: Field validators and input normalizers
//! - **record**: The persisted profile record
//! - **form**: Entry form draft and submission gating
//! - **storage**: Slot storage trait and implementations
//! - **store**: Record store over a single storage slot
//! - **search**: Name filtering for the listing view
//! - **lookup**: Postal code lookup and keyed auto-fill

pub mod error;
pub mod form;
pub mod fs;
pub mod lookup;
pub mod record;
pub mod search;
pub mod storage;
pub mod store;
pub mod validate;

pub use error::{Result, RosterError};
pub use form::{Field, FieldStatus, FormErrors, ProfileForm};
pub use record::{Profile, Record};
pub use search::{filter_by_name, Match};
pub use storage::{FileStorage, MemoryStorage, SlotStorage};
pub use store::{RecordStore, FORM_DATA_SLOT};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
