//! The persisted profile record.
//!
//! A [`Record`] is a [`Profile`] plus the identity the store assigns at
//! creation. The JSON layout is flat: `{"id": ..., "name": ..., "postalCode": ...}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// The user-entered fields of a profile.
///
/// Missing or `null` fields decode as empty strings, so one incomplete stored
/// entry does not make the rest of the slot unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    /// Phone number, `+91` followed by ten digits
    #[serde(default, deserialize_with = "nullable_string")]
    pub number: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub pan: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address1: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub address2: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub city: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub state: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub postal_code: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A stored profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Stable identifier.
    ///
    /// Data saved before ids existed decodes with the nil id; the store
    /// assigns and persists a real one when it loads such a record.
    #[serde(default = "Uuid::nil")]
    pub id: Uuid,

    /// When the record was first submitted, if known
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub profile: Profile,
}

impl Record {
    /// Create a record with a fresh identifier.
    pub fn new(profile: Profile) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Some(Utc::now()),
            profile,
        }
    }

    /// Replace the profile fields, keeping identity and creation time.
    pub fn with_profile(&self, profile: Profile) -> Self {
        Self {
            id: self.id,
            created_at: self.created_at,
            profile,
        }
    }

    pub fn name(&self) -> &str {
        &self.profile.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> Profile {
        Profile {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            number: "+919876543210".to_string(),
            pan: "ABCDE1234F".to_string(),
            address1: "12 MG Road".to_string(),
            address2: String::new(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            postal_code: "560001".to_string(),
        }
    }

    #[test]
    fn test_json_layout_is_flat() {
        let record = Record::new(sample_profile());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["id"], serde_json::json!(record.id));
        assert_eq!(value["name"], "Asha Rao");
        assert_eq!(value["postalCode"], "560001");
        assert!(value.get("profile").is_none());
        assert!(value.get("postal_code").is_none());
    }

    #[test]
    fn test_legacy_record_without_id_loads() {
        let legacy = serde_json::json!({
            "name": "Asha Rao",
            "email": "asha@example.com",
            "number": "+919876543210",
            "pan": "ABCDE1234F",
            "address1": "12 MG Road",
            "city": "Bengaluru",
            "state": "Karnataka",
            "postalCode": "560001"
        });

        let record: Record = serde_json::from_value(legacy).unwrap();
        assert!(record.id.is_nil());
        assert!(record.created_at.is_none());
        assert_eq!(record.profile.address2, "");
        assert_eq!(record.profile, sample_profile());
    }

    #[test]
    fn test_missing_and_null_fields_decode_empty() {
        let partial = serde_json::json!({
            "name": "Asha Rao",
            "email": null,
            "postalCode": "560001"
        });

        let record: Record = serde_json::from_value(partial).unwrap();
        assert_eq!(record.profile.name, "Asha Rao");
        assert_eq!(record.profile.email, "");
        assert_eq!(record.profile.city, "");
        assert_eq!(record.profile.postal_code, "560001");
    }

    #[test]
    fn test_with_profile_keeps_identity() {
        let record = Record::new(sample_profile());
        let mut changed = sample_profile();
        changed.city = "Mysuru".to_string();

        let updated = record.with_profile(changed);
        assert_eq!(updated.id, record.id);
        assert_eq!(updated.created_at, record.created_at);
        assert_eq!(updated.profile.city, "Mysuru");
    }
}
