//! Assertion configuration.

use std::str::FromStr;

use thiserror::Error;

/// Environment variable consulted by [`AssertConfig::from_env`].
pub const LOCALE_ENV: &str = "JSON_ASSERT_LOCALE";

/// Language of failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en-us" | "english" => Ok(Self::English),
            "pt" | "pt-br" | "portuguese" => Ok(Self::Portuguese),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

/// Options for [`JsonValueAssert`](crate::JsonValueAssert).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssertConfig {
    pub locale: Locale,
}

impl AssertConfig {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Default options, with the locale overridden by `JSON_ASSERT_LOCALE`
    /// when it holds a recognised value.
    pub fn from_env() -> Self {
        Self::from_locale_setting(std::env::var(LOCALE_ENV).ok().as_deref())
    }

    fn from_locale_setting(setting: Option<&str>) -> Self {
        let locale = match setting.map(Locale::from_str) {
            Some(Ok(locale)) => locale,
            Some(Err(err)) => {
                tracing::warn!(%err, "ignoring {}", LOCALE_ENV);
                Locale::default()
            }
            None => Locale::default(),
        };
        Self { locale }
    }
}
