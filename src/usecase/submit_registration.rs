use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::{
    domain::{
        error::ServiceError,
        services::{
            navigator::{LOGIN_ROUTE, Navigator},
            registration_service::RegistrationService,
        },
    },
    presentation::form::RegistrationForm,
};

/// Shown when the endpoint accepts the registration.
const SUCCESS_MESSAGE: &str = "Registration successful. Redirecting to login page...";
/// Shown when the endpoint rejects it without a usable detail.
const FALLBACK_ERROR_MESSAGE: &str = "Registration failed.";
/// How long the success message stays on screen before the redirect fires.
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// Where the latest submit attempt currently stands. A new attempt from
/// `Succeeded` or `Failed` starts over at `Validating`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Drives one registration screen: validate the draft, shape the payload,
/// call the account endpoint and write the outcome back into the form.
pub struct SubmitRegistration<S, N> {
    service: S,
    navigator: Arc<N>,
    phase: SubmitPhase,
    redirect: Option<ScheduledRedirect>,
}

impl<S, N> SubmitRegistration<S, N>
where
    S: RegistrationService,
    N: Navigator + 'static,
{
    pub fn new(service: S, navigator: Arc<N>) -> Self {
        Self {
            service,
            navigator,
            phase: SubmitPhase::Idle,
            redirect: None,
        }
    }

    /// Exposed so a host surface can e.g. disable its submit control
    /// while an attempt is in flight.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Run one submit attempt end to end.
    ///
    /// Takes `&mut self`, so at most one attempt is in flight per
    /// controller; a surface that fires submit twice serializes here
    /// instead of racing two network calls.
    pub async fn submit(&mut self, form: &mut RegistrationForm) {
        self.phase = SubmitPhase::Validating;

        if let Err(err) = form.draft().validate() {
            debug!(%err, "registration draft rejected before submit");
            form.set_status(err.to_string());
            self.phase = SubmitPhase::Failed;
            return;
        }

        let payload = match form.draft().normalize() {
            Ok(payload) => payload,
            Err(err) => {
                warn!(%err, "draft could not be shaped for submission");
                form.set_status(err.to_string());
                self.phase = SubmitPhase::Failed;
                return;
            }
        };

        self.phase = SubmitPhase::Submitting;
        match self.service.register(&payload).await {
            Ok(()) => {
                debug!(user_name = %payload.user_name, "registration accepted");
                form.set_status(SUCCESS_MESSAGE);
                self.phase = SubmitPhase::Succeeded;
                self.redirect = Some(ScheduledRedirect::spawn(self.navigator.clone()));
            }
            Err(err) => {
                warn!(%err, "registration rejected");
                form.set_status(error_message(&err));
                self.phase = SubmitPhase::Failed;
            }
        }
    }

    /// Drop a pending redirect to the login screen, if one is scheduled.
    /// Dropping the controller has the same effect.
    pub fn cancel_redirect(&mut self) {
        self.redirect = None;
    }
}

/// Server-provided detail verbatim when present, generic fallback otherwise.
fn error_message(err: &ServiceError) -> String {
    err.detail()
        .map_or_else(|| FALLBACK_ERROR_MESSAGE.to_string(), str::to_string)
}

/// Pending navigation to the login screen, delayed so the user can read
/// the success message first. Aborting on drop ties the redirect to the
/// owning screen's lifetime instead of letting it fire after teardown.
struct ScheduledRedirect {
    handle: JoinHandle<()>,
}

impl ScheduledRedirect {
    fn spawn<N: Navigator + 'static>(navigator: Arc<N>) -> Self {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(REDIRECT_DELAY).await;
            navigator.go_to(LOGIN_ROUTE);
        });
        Self { handle }
    }
}

impl Drop for ScheduledRedirect {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
