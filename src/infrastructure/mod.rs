pub mod argon2_password_hasher;
pub mod entities;
pub mod hex_token_generator;
pub mod http_mailer;
pub mod user_registration_repository;
pub mod user_repository;
