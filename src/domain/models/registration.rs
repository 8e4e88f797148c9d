use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::error::{RegistrationError, ValidationError};

/// Date format produced by the date input feeding the draft.
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";
/// Date format the account endpoint expects on the wire.
const WIRE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Account role offered at signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Bidder,
    Seller,
}

/// No default on purpose: the user must pick one before submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// The in-progress, not-yet-submitted registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub user_name: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_no: String,
    pub birth_date: String,
    pub gender: Option<Gender>,
}

impl RegistrationDraft {
    /// Check everything that must hold before a submit attempt may go out.
    ///
    /// Field presence and the email shape are enumerated here explicitly;
    /// the only cross-field rule is the password confirmation. Password
    /// strength and the contact-number digit count stay advisory hint text
    /// and are left for the server to judge.
    pub fn validate(&self) -> Result<(), ValidationError> {
        required("Username", &self.user_name)?;
        required("Password", &self.password)?;
        required("Confirm Password", &self.confirm_password)?;
        required("Email", &self.email)?;
        if !is_basic_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        required("First Name", &self.first_name)?;
        required("Last Name", &self.last_name)?;
        required("Contact Number", &self.contact_no)?;
        required("Birth Date", &self.birth_date)?;
        if self.gender.is_none() {
            return Err(ValidationError::MissingField("Gender"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    /// Shape a validated draft into the request the account endpoint
    /// expects. Every field is copied verbatim except the birth date,
    /// which is reparsed as a calendar date and rewritten day-first.
    pub fn normalize(&self) -> Result<RegistrationPayload, RegistrationError> {
        let gender = self
            .gender
            .ok_or(ValidationError::MissingField("Gender"))?;
        let birth_date = NaiveDate::parse_from_str(&self.birth_date, INPUT_DATE_FORMAT)
            .map_err(RegistrationError::DateFormat)?
            .format(WIRE_DATE_FORMAT)
            .to_string();

        Ok(RegistrationPayload {
            user_name: self.user_name.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            role: self.role,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            contact_no: self.contact_no.clone(),
            birth_date,
            gender,
        })
    }
}

fn required(label: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(label));
    }
    Ok(())
}

/// The basic shape a native email input would accept: one `@` with
/// non-empty parts on both sides and no whitespace anywhere.
fn is_basic_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

/// Wire form of one registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub user_name: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_no: String,
    pub birth_date: String,
    pub gender: Gender,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> RegistrationDraft {
        RegistrationDraft {
            user_name: "bidder01".to_string(),
            password: "secret1pw".to_string(),
            confirm_password: "secret1pw".to_string(),
            role: Role::Bidder,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            contact_no: "0123456789".to_string(),
            birth_date: "2025-03-07".to_string(),
            gender: Some(Gender::Female),
        }
    }

    #[test]
    fn validate_accepts_complete_draft() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn validate_reports_first_missing_field() {
        let mut draft = complete_draft();
        draft.user_name.clear();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Username"))
        );
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Username is required."
        );
    }

    #[test]
    fn validate_requires_explicit_gender() {
        let mut draft = complete_draft();
        draft.gender = None;
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("Gender"))
        );
    }

    #[test]
    fn validate_rejects_malformed_email() {
        for email in ["not-an-email", "@example.com", "ada@", "a b@example.com"] {
            let mut draft = complete_draft();
            draft.email = email.to_string();
            assert_eq!(draft.validate(), Err(ValidationError::InvalidEmail));
        }
    }

    #[test]
    fn validate_rejects_password_mismatch() {
        let mut draft = complete_draft();
        draft.confirm_password = "different1".to_string();
        assert_eq!(draft.validate(), Err(ValidationError::PasswordMismatch));
        assert_eq!(
            draft.validate().unwrap_err().to_string(),
            "Passwords do not match."
        );
    }

    #[test]
    fn validate_leaves_advisory_rules_unenforced() {
        // Weak password and short contact number still pass; those rules
        // are surfaced as hints only.
        let mut draft = complete_draft();
        draft.password = "ab".to_string();
        draft.confirm_password = "ab".to_string();
        draft.contact_no = "42".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn normalize_rewrites_birth_date_day_first() {
        let payload = complete_draft().normalize().unwrap();
        assert_eq!(payload.birth_date, "07-03-2025");
    }

    #[test]
    fn normalize_copies_all_other_fields_verbatim() {
        let draft = complete_draft();
        let payload = draft.normalize().unwrap();
        assert_eq!(payload.user_name, draft.user_name);
        assert_eq!(payload.password, draft.password);
        assert_eq!(payload.confirm_password, draft.confirm_password);
        assert_eq!(payload.role, draft.role);
        assert_eq!(payload.first_name, draft.first_name);
        assert_eq!(payload.last_name, draft.last_name);
        assert_eq!(payload.email, draft.email);
        assert_eq!(payload.contact_no, draft.contact_no);
        assert_eq!(payload.gender, Gender::Female);
    }

    #[test]
    fn normalize_fails_loudly_on_invalid_date() {
        let mut draft = complete_draft();
        draft.birth_date = "2025-13-40".to_string();
        assert!(matches!(
            draft.normalize(),
            Err(RegistrationError::DateFormat(_))
        ));
    }

    #[test]
    fn payload_serializes_with_wire_field_names() {
        let value = serde_json::to_value(complete_draft().normalize().unwrap()).unwrap();
        assert_eq!(value["userName"], "bidder01");
        assert_eq!(value["confirmPassword"], "secret1pw");
        assert_eq!(value["role"], "BIDDER");
        assert_eq!(value["contactNo"], "0123456789");
        assert_eq!(value["birthDate"], "07-03-2025");
        assert_eq!(value["gender"], "Female");
    }
}
