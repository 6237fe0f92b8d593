// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the Virgo website.
//!
//! This module exposes the English and Italian UI dictionary to the page
//! rendering layer. Lookups are pure reads over a table built once at first
//! use.
//!
//! # Features
//!
//! - Strict lookups that report unsupported locales and missing keys
//! - Locale metadata for language pickers, in declaration order
//! - A translator bound to one locale, resolved from CLI, config or system
//!   settings, that never fails a render
//!
//! # Examples
//!
//! ```
//! use virgo_i18n::i18n;
//!
//! assert_eq!(i18n::get_translation("it", "contact.send").unwrap(), "Invia");
//! assert_eq!(i18n::list_locales(), [("en", "English"), ("it", "Italiano")]);
//! ```

pub mod locale;
pub mod table;

use crate::config::defaults::MISSING_PREFIX;
use crate::config::{Config, DEFAULT_LANG, SHOW_DEFAULT_LANG};
use crate::error::Result;
pub use locale::Locale;
pub use table::{LocaleRequest, LocalizationTable};

/// Looks up `key` under `locale` in the process-wide table.
///
/// # Errors
///
/// [`Error::UnsupportedLocale`](crate::error::Error::UnsupportedLocale) for an unknown locale code,
/// [`Error::MissingTranslationKey`](crate::error::Error::MissingTranslationKey) when the locale has no such key.
pub fn get_translation<L>(locale: &L, key: &str) -> Result<&'static str>
where
    L: LocaleRequest + ?Sized,
{
    LocalizationTable::global()?.get_translation(locale, key)
}

/// Supported locales as `(code, display name)`, in declaration order.
#[must_use]
pub fn list_locales() -> Vec<(&'static str, &'static str)> {
    Locale::ALL
        .into_iter()
        .map(|locale| (locale.code(), locale.display_name()))
        .collect()
}

#[must_use]
pub fn default_locale() -> Locale {
    DEFAULT_LANG
}

/// Whether generated paths carry the default locale's code.
#[must_use]
pub fn should_show_default_locale_in_path() -> bool {
    SHOW_DEFAULT_LANG
}

/// Translator bound to a current locale.
///
/// [`I18n::tr`] falls back to the default locale, then to the key itself
/// prefixed with `MISSING: `, so a data defect degrades one string instead of
/// a whole page.
#[derive(Debug, Clone)]
pub struct I18n {
    table: &'static LocalizationTable,
    current_locale: Locale,
}

impl I18n {
    /// Resolves the current locale from, in order: the CLI argument, the
    /// config file, the OS locale, and finally the default locale.
    pub fn new(cli_lang: Option<String>, config: &Config) -> Result<Self> {
        let system = sys_locale::get_locale();
        let current_locale = resolve_locale(cli_lang.as_deref(), config, system.as_deref())
            .unwrap_or(DEFAULT_LANG);
        Ok(Self::with_table(LocalizationTable::global()?, current_locale))
    }

    /// Translator over an explicit table.
    #[must_use]
    pub fn with_table(table: &'static LocalizationTable, locale: Locale) -> Self {
        Self {
            table,
            current_locale: locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> Locale {
        self.current_locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.current_locale {
            tracing::debug!(from = %self.current_locale, to = %locale, "switching locale");
            self.current_locale = locale;
        }
    }

    pub fn available_locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.table.locales()
    }

    /// Strict lookup under the current locale.
    pub fn try_tr(&self, key: &str) -> Result<&'static str> {
        self.table.get_translation(&self.current_locale, key)
    }

    /// Lenient lookup: current locale, then default locale, then the key.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        match self.try_tr(key) {
            Ok(text) => text.to_string(),
            Err(err) => {
                tracing::warn!(%err, "falling back to default locale");
                match self.table.get_translation(&DEFAULT_LANG, key) {
                    Ok(text) => text.to_string(),
                    Err(_) => {
                        tracing::warn!(key, "no locale defines key");
                        format!("{MISSING_PREFIX}{key}")
                    }
                }
            }
        }
    }
}

fn resolve_locale(cli_lang: Option<&str>, config: &Config, system: Option<&str>) -> Option<Locale> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang.and_then(parse_preference) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.language.as_deref().and_then(parse_preference) {
        return Some(lang);
    }

    // 3. Check OS locale
    system.and_then(Locale::from_language_tag)
}

fn parse_preference(value: &str) -> Option<Locale> {
    value
        .parse::<Locale>()
        .ok()
        .or_else(|| Locale::from_language_tag(value))
        .or_else(|| {
            tracing::warn!(value, "ignoring unsupported language preference");
            None
        })
}
