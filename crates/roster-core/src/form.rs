//! Entry form draft and submission gating.
//!
//! [`ProfileForm`] holds the raw field values while a profile is being typed.
//! Setters apply the same normalization the input handlers do (PAN is
//! uppercased, phone numbers get their prefix), and [`ProfileForm::validate`]
//! only yields a [`Profile`] once every required field passes.

use std::fmt;

use crate::lookup::Locality;
use crate::record::Profile;
use crate::validate::{
    is_present, normalize_pan, normalize_phone_number, validate_email, validate_pan,
    validate_phone_number, validate_postal_code,
};

/// Generic prompt shown when a submission is blocked.
pub const FORM_INVALID_PROMPT: &str = "Fill the form properly";

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Number,
    Pan,
    Address1,
    Address2,
    City,
    State,
    PostalCode,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 9] = [
        Field::Name,
        Field::Email,
        Field::Number,
        Field::Pan,
        Field::Address1,
        Field::Address2,
        Field::City,
        Field::State,
        Field::PostalCode,
    ];

    /// Human-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email",
            Field::Number => "Phone Number",
            Field::Pan => "PAN",
            Field::Address1 => "Address Line 1",
            Field::Address2 => "Address Line 2",
            Field::City => "City",
            Field::State => "State",
            Field::PostalCode => "Postal Code",
        }
    }

    /// Key used in the persisted JSON and in machine output.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Number => "number",
            Field::Pan => "pan",
            Field::Address1 => "address1",
            Field::Address2 => "address2",
            Field::City => "city",
            Field::State => "state",
            Field::PostalCode => "postalCode",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inline validity indicator for fields that show live feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Valid,
    Invalid,
}

impl FieldStatus {
    fn from_valid(valid: bool) -> Self {
        if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Valid)
    }
}

/// A blocked submission: the fields that failed validation, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormErrors {
    pub fields: Vec<Field>,
}

impl FormErrors {
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.fields.iter().map(|field| field.label()).collect();
        write!(f, "{} (check: {})", FORM_INVALID_PROMPT, labels.join(", "))
    }
}

impl std::error::Error for FormErrors {}

/// Raw values of the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    name: String,
    email: String,
    number: String,
    pan: String,
    address1: String,
    address2: String,
    city: String,
    state: String,
    postal_code: String,
}

impl ProfileForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the form from a saved profile.
    pub fn from_profile(profile: &Profile) -> Self {
        let mut form = Self::new();
        form.set_name(&profile.name);
        form.set_email(&profile.email);
        form.set_number(&profile.number);
        form.set_pan(&profile.pan);
        form.set_address1(&profile.address1);
        form.set_address2(&profile.address2);
        form.set_city(&profile.city);
        form.set_state(&profile.state);
        form.postal_code = profile.postal_code.trim().to_string();
        form
    }

    /// Set a field by identity, applying that field's normalization.
    ///
    /// Returns `true` when the change made the postal code valid, which is the
    /// caller's cue to start a lookup.
    pub fn set(&mut self, field: Field, value: &str) -> bool {
        match field {
            Field::Name => self.set_name(value),
            Field::Email => self.set_email(value),
            Field::Number => self.set_number(value),
            Field::Pan => self.set_pan(value),
            Field::Address1 => self.set_address1(value),
            Field::Address2 => self.set_address2(value),
            Field::City => self.set_city(value),
            Field::State => self.set_state(value),
            Field::PostalCode => return self.set_postal_code(value),
        }
        false
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Number => &self.number,
            Field::Pan => &self.pan,
            Field::Address1 => &self.address1,
            Field::Address2 => &self.address2,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::PostalCode => &self.postal_code,
        }
    }

    pub fn set_name(&mut self, value: &str) {
        self.name = value.trim().to_string();
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.trim().to_string();
    }

    pub fn set_number(&mut self, value: &str) {
        self.number = normalize_phone_number(value);
    }

    pub fn set_pan(&mut self, value: &str) {
        self.pan = normalize_pan(value);
    }

    pub fn set_address1(&mut self, value: &str) {
        self.address1 = value.trim().to_string();
    }

    pub fn set_address2(&mut self, value: &str) {
        self.address2 = value.trim().to_string();
    }

    pub fn set_city(&mut self, value: &str) {
        self.city = value.trim().to_string();
    }

    pub fn set_state(&mut self, value: &str) {
        self.state = value.trim().to_string();
    }

    /// Set the postal code; returns `true` if the new value is a valid code.
    pub fn set_postal_code(&mut self, value: &str) -> bool {
        self.postal_code = value.trim().to_string();
        validate_postal_code(&self.postal_code)
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// Overwrite city and state with looked-up values; empty parts are skipped.
    pub fn apply_locality(&mut self, locality: &Locality) {
        if let Some(city) = locality.city.as_deref() {
            self.set_city(city);
        }
        if let Some(state) = locality.state.as_deref() {
            self.set_state(state);
        }
    }

    pub fn pan_status(&self) -> FieldStatus {
        FieldStatus::from_valid(validate_pan(&self.pan))
    }

    pub fn postal_code_status(&self) -> FieldStatus {
        FieldStatus::from_valid(validate_postal_code(&self.postal_code))
    }

    /// Whether a single field currently passes its check.
    pub fn is_field_valid(&self, field: Field) -> bool {
        match field {
            Field::Email => validate_email(&self.email),
            Field::Number => validate_phone_number(&self.number),
            Field::Pan => validate_pan(&self.pan),
            Field::PostalCode => validate_postal_code(&self.postal_code),
            Field::Address2 => true,
            Field::Name | Field::Address1 | Field::City | Field::State => {
                is_present(self.get(field))
            }
        }
    }

    /// Gate submission: every required field must pass.
    pub fn validate(&self) -> Result<Profile, FormErrors> {
        let fields: Vec<Field> = Field::ALL
            .iter()
            .copied()
            .filter(|field| !self.is_field_valid(*field))
            .collect();

        if !fields.is_empty() {
            return Err(FormErrors { fields });
        }

        Ok(Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            number: self.number.clone(),
            pan: self.pan.clone(),
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            postal_code: self.postal_code.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProfileForm {
        let mut form = ProfileForm::new();
        form.set_name("Asha Rao");
        form.set_email("asha@example.com");
        form.set_number("98765-43210");
        form.set_pan("abcde1234f");
        form.set_address1("12 MG Road");
        form.set_city("Bengaluru");
        form.set_state("Karnataka");
        form.set_postal_code("560001");
        form
    }

    #[test]
    fn test_valid_form_yields_profile() {
        let profile = filled_form().validate().unwrap();
        assert_eq!(profile.pan, "ABCDE1234F");
        assert_eq!(profile.number, "+919876543210");
        assert_eq!(profile.address2, "");
    }

    #[test]
    fn test_missing_required_fields_block_submission() {
        let mut form = filled_form();
        form.set_name("   ");
        form.set_city("");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.fields, vec![Field::Name, Field::City]);
        assert!(errors.to_string().starts_with(FORM_INVALID_PROMPT));
    }

    #[test]
    fn test_empty_form_lists_every_required_field() {
        let errors = ProfileForm::new().validate().unwrap_err();
        assert_eq!(errors.fields.len(), 8);
        assert!(!errors.contains(Field::Address2));
    }

    #[test]
    fn test_pan_status_tracks_input() {
        let mut form = ProfileForm::new();
        assert_eq!(form.pan_status(), FieldStatus::Invalid);
        form.set_pan("abcde1234f");
        assert_eq!(form.pan_status(), FieldStatus::Valid);
        form.set_pan("abcde1234");
        assert_eq!(form.pan_status(), FieldStatus::Invalid);
    }

    #[test]
    fn test_postal_code_change_signals_lookup() {
        let mut form = ProfileForm::new();
        assert!(!form.set(Field::PostalCode, "56000"));
        assert_eq!(form.postal_code_status(), FieldStatus::Invalid);
        assert!(form.set(Field::PostalCode, "560001"));
        assert!(form.postal_code_status().is_valid());
        assert!(!form.set(Field::City, "Bengaluru"));
    }

    #[test]
    fn test_apply_locality_skips_missing_parts() {
        let mut form = filled_form();
        form.apply_locality(&Locality {
            city: Some("Bangalore".to_string()),
            state: None,
        });
        assert_eq!(form.get(Field::City), "Bangalore");
        assert_eq!(form.get(Field::State), "Karnataka");
    }

    #[test]
    fn test_from_profile_round_trips() {
        let profile = filled_form().validate().unwrap();
        let form = ProfileForm::from_profile(&profile);
        assert_eq!(form.validate().unwrap(), profile);
    }
}
