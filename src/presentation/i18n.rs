//! Message-key to display-string lookup, keyed by request locale.
//!
//! Catalogs are plain key/value JSON compiled into the binary; validation
//! logic stays locale-agnostic and only ever deals in keys.

use std::collections::HashMap;
use std::sync::LazyLock;

use axum::http::{HeaderMap, header};

static EN: LazyLock<HashMap<String, String>> = LazyLock::new(|| load_catalog(include_str!("../../locales/en.json")));
static PT: LazyLock<HashMap<String, String>> = LazyLock::new(|| load_catalog(include_str!("../../locales/pt.json")));

fn load_catalog(raw: &str) -> HashMap<String, String> {
    serde_json::from_str(raw).expect("locale catalog is not valid JSON")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    /// Pick the locale from the Accept-Language header; unsupported or
    /// missing languages fall back to the default.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok())
            .map(Self::from_accept_language)
            .unwrap_or_default()
    }

    fn from_accept_language(value: &str) -> Self {
        let primary = value
            .split(',')
            .next()
            .and_then(|tag| tag.split(';').next())
            .unwrap_or("")
            .trim();

        if primary == "pt" || primary.starts_with("pt-") {
            Locale::Pt
        } else {
            Locale::En
        }
    }

    fn catalog(&self) -> &'static HashMap<String, String> {
        match self {
            Locale::En => &EN,
            Locale::Pt => &PT,
        }
    }
}

/// Resolve a message key for the given locale, falling back to English and
/// finally to the key itself.
pub fn translate(key: &str, locale: Locale) -> String {
    locale
        .catalog()
        .get(key)
        .or_else(|| EN.get(key))
        .cloned()
        .unwrap_or_else(|| key.to_string())
}
