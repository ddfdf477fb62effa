//! Output formatting for profiles.

pub mod json;
pub mod text;

pub use json::{locality_json, matches_json, print_json, record_json};
pub use text::{print_record, print_record_list};
