//! Helpers shared by the profile commands.

mod fields;

pub use fields::complete_form;
