//! Syntactic validation rules for registration fields.
//!
//! Each rule chain is evaluated top to bottom and stops at the first
//! failing rule for that field. Rules yield locale-neutral message keys;
//! the presentation layer resolves them against the locale catalogs.

pub const USERNAME_NULL: &str = "username_null";
pub const USERNAME_SIZE: &str = "username_size";
pub const EMAIL_NULL: &str = "email_null";
pub const EMAIL_INVALID: &str = "email_invalid";
pub const EMAIL_INUSE: &str = "email_inuse";
pub const PASSWORD_NULL: &str = "password_null";
pub const PASSWORD_SIZE: &str = "password_size";
pub const PASSWORD_PATTERN: &str = "password_pattern";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    Email,
    Password,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Password => "password",
        }
    }
}

/// Ordered field -> message-key collection. Fields keep their insertion
/// order and only the first key pushed for a field is retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: Vec<(Field, &'static str)>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: Field, key: &'static str) -> Self {
        let mut errors = Self::new();
        errors.push(field, key);
        errors
    }

    pub fn push(&mut self, field: Field, key: &'static str) {
        if !self.entries.iter().any(|(existing, _)| *existing == field) {
            self.entries.push((field, key));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Field, &'static str)] {
        &self.entries
    }
}

pub fn validate_username(value: Option<&str>) -> Option<&'static str> {
    match value {
        None => Some(USERNAME_NULL),
        Some(v) if v.is_empty() => Some(USERNAME_NULL),
        Some(v) => {
            let length = v.chars().count();
            if !(4..=32).contains(&length) {
                Some(USERNAME_SIZE)
            } else {
                None
            }
        }
    }
}

/// Syntactic check only. The in-use check runs against the repository and
/// only after this one passes.
pub fn validate_email_syntax(value: Option<&str>) -> Option<&'static str> {
    match value {
        None => Some(EMAIL_NULL),
        Some(v) if v.is_empty() => Some(EMAIL_NULL),
        Some(v) if !is_valid_email(v) => Some(EMAIL_INVALID),
        Some(_) => None,
    }
}

pub fn validate_password(value: Option<&str>) -> Option<&'static str> {
    match value {
        None => Some(PASSWORD_NULL),
        Some(v) if v.is_empty() => Some(PASSWORD_NULL),
        Some(v) if v.chars().count() < 6 => Some(PASSWORD_SIZE),
        Some(v) if !has_required_character_classes(v) => Some(PASSWORD_PATTERN),
        Some(_) => None,
    }
}

// Exactly one '@' separating a non-empty local part from a domain that
// contains a '.'.
fn is_valid_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.contains('@') && domain.contains('.')
        }
        None => false,
    }
}

fn has_required_character_classes(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}
