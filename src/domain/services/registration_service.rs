use async_trait::async_trait;

use crate::domain::{error::ServiceError, models::registration::RegistrationPayload};

/// Remote account-creation endpoint, seen from the client side.
///
/// A successful response means the account was created; the body is not
/// inspected further. Failures carry the server's human-readable detail
/// when one was sent.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    async fn register(&self, payload: &RegistrationPayload) -> Result<(), ServiceError>;
}
