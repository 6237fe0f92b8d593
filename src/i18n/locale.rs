// SPDX-License-Identifier: MPL-2.0
//! Supported locales.
//!
//! The set is closed: adding a language means adding a variant here and a
//! matching `assets/i18n/<code>.toml` resource.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    It,
}

impl Locale {
    /// All supported locales, in declaration order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::It];

    /// Short language code, also the resource file stem.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::It => "it",
        }
    }

    /// Name of the language in that language, for language pickers.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::It => "Italiano",
        }
    }

    /// Matches a BCP-47 tag such as `it-IT` or `en_US` on its language
    /// subtag. Returns `None` for malformed tags and unsupported languages.
    #[must_use]
    pub fn from_language_tag(tag: &str) -> Option<Self> {
        let langid: LanguageIdentifier = tag.replace('_', "-").parse().ok()?;
        let language = langid.language.as_str();
        Self::ALL.into_iter().find(|locale| locale.code() == language)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| Error::UnsupportedLocale(s.to_string()))
    }
}

impl TryFrom<&str> for Locale {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        value.parse()
    }
}
