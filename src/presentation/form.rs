use crate::domain::models::registration::{Gender, RegistrationDraft, Role};

/// Substring that classifies a status message as a success for display.
const SUCCESS_MARKER: &str = "successful";

/// Advisory input hints the host surface shows next to the fields.
/// These rules are declared to the user but not enforced before submit;
/// the server has the last word on them.
pub mod hints {
    pub const PASSWORD: &str =
        "Password must contain at least one digit, one letter, and be at least 8 characters";
    pub const CONTACT_NO: &str = "Contact number must be exactly 10 digits";
}

// Field updates

/// One single-field edit of the draft. Exactly one field changes per event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    UserName(String),
    Password(String),
    ConfirmPassword(String),
    Role(Role),
    FirstName(String),
    LastName(String),
    Email(String),
    ContactNo(String),
    BirthDate(String),
    Gender(Gender),
}

// Status display

/// Styling channel for the single feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Everything one registration screen holds between events: the draft,
/// the two password visibility toggles and the single feedback message.
/// Pure storage; validation lives on the draft itself.
#[derive(Debug, Default)]
pub struct RegistrationForm {
    draft: RegistrationDraft,
    show_password: bool,
    show_confirm_password: bool,
    status: Option<String>,
}

impl RegistrationForm {
    /// Empty draft, both passwords masked, no status yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    /// Apply one field edit, leaving every other field untouched.
    pub fn apply(&mut self, change: FieldChange) {
        match change {
            FieldChange::UserName(value) => self.draft.user_name = value,
            FieldChange::Password(value) => self.draft.password = value,
            FieldChange::ConfirmPassword(value) => self.draft.confirm_password = value,
            FieldChange::Role(role) => self.draft.role = role,
            FieldChange::FirstName(value) => self.draft.first_name = value,
            FieldChange::LastName(value) => self.draft.last_name = value,
            FieldChange::Email(value) => self.draft.email = value,
            FieldChange::ContactNo(value) => self.draft.contact_no = value,
            FieldChange::BirthDate(value) => self.draft.birth_date = value,
            FieldChange::Gender(gender) => self.draft.gender = Some(gender),
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn toggle_confirm_password_visibility(&mut self) {
        self.show_confirm_password = !self.show_confirm_password;
    }

    pub fn password_visible(&self) -> bool {
        self.show_password
    }

    pub fn confirm_password_visible(&self) -> bool {
        self.show_confirm_password
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// How the current message should be styled. The message text itself is
    /// the only channel; a marker substring decides between the two styles.
    pub fn status_kind(&self) -> Option<StatusKind> {
        self.status.as_deref().map(|message| {
            if message.contains(SUCCESS_MARKER) {
                StatusKind::Success
            } else {
                StatusKind::Error
            }
        })
    }

    /// Overwrite the feedback message. Each submit attempt writes here;
    /// the message is never cleared, only replaced.
    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }
}
