pub mod navigator;
pub mod registration_service;
