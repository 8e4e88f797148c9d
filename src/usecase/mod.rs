pub mod submit_registration;
