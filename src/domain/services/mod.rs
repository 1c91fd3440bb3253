pub mod mail_service;
pub mod password_service;
pub mod token_service;
