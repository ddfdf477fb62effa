//! Path and ID resolution.

use std::path::PathBuf;

use uuid::Uuid;

use roster_core::Record;

use crate::config::default_config_path;
use crate::constants::MIN_ID_PREFIX_LEN;
use crate::errors::CliError;

/// Resolve the config file path, checking ROSTER_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("ROSTER_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub fn missing_profile_hint() -> &'static str {
    "Run `roster list` to find profile IDs."
}

/// Find a record by full UUID or unique ID prefix.
///
/// Returns the record together with its index in `records`.
pub fn resolve_record(records: &[Record], needle: &str) -> anyhow::Result<(usize, Record)> {
    let needle = needle.trim().to_lowercase();

    if let Ok(id) = Uuid::parse_str(&needle) {
        return records
            .iter()
            .position(|record| record.id == id)
            .map(|index| (index, records[index].clone()))
            .ok_or_else(|| {
                CliError::not_found(
                    format!("Profile {} not found", id),
                    missing_profile_hint(),
                )
                .into()
            });
    }

    if needle.len() < MIN_ID_PREFIX_LEN
        || !needle.chars().all(|c| c.is_ascii_hexdigit() || c == '-')
    {
        return Err(CliError::invalid_input_with_hint(
            format!("Invalid profile ID: {}", needle),
            format!(
                "Use a full UUID or at least {} characters of one.",
                MIN_ID_PREFIX_LEN
            ),
        )
        .into());
    }

    let mut hits = records
        .iter()
        .enumerate()
        .filter(|(_, record)| record.id.to_string().starts_with(&needle));

    match (hits.next(), hits.next()) {
        (Some((index, record)), None) => Ok((index, record.clone())),
        (None, _) => Err(CliError::not_found(
            format!("Profile {} not found", needle),
            missing_profile_hint(),
        )
        .into()),
        (Some(_), Some(_)) => Err(CliError::invalid_input_with_hint(
            format!("Profile ID prefix {} is ambiguous", needle),
            "Use more characters of the ID.",
        )
        .into()),
    }
}
