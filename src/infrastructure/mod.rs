pub mod http_registration_service;
