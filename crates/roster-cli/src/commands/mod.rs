//! Command handlers.

pub mod add;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod lookup;
pub mod misc;
pub mod show;
