//! Client-side account registration workflow for the auction platform:
//! form state, pre-submit validation, submission to the remote account
//! endpoint and the outcome-driven redirect to the login screen. Headless;
//! a UI shell drives it through [`presentation::form::RegistrationForm`]
//! and [`usecase::submit_registration::SubmitRegistration`].

pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod usecase;
