use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Birth date is not a valid calendar date.")]
    DateFormat(#[source] chrono::format::ParseError),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Local, pre-submit failures. These never reach the network.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required.")]
    MissingField(&'static str),

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Passwords do not match.")]
    PasswordMismatch,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("registration rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("transport error: {0}")]
    Transport(String),
}

impl ServiceError {
    /// Human-readable detail extracted from an error response, if the
    /// server sent one. Transport failures carry none.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ServiceError::Rejected { detail, .. } => detail.as_deref(),
            ServiceError::Transport(_) => None,
        }
    }
}
