pub mod handlers;
pub mod i18n;
