// SPDX-License-Identifier: MPL-2.0
use crate::i18n::locale::Locale;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested locale code is not in the supported set.
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// The locale is supported but its table has no entry for the key.
    /// Points at a data-authoring defect rather than a runtime condition.
    #[error("Missing translation key '{key}' for locale '{locale}'")]
    MissingTranslationKey { locale: Locale, key: String },

    /// Locales do not declare the same key set.
    #[error("Key parity violated: {0}")]
    KeyParity(String),

    /// An embedded locale resource is absent or unreadable.
    #[error("Asset Error: {0}")]
    Asset(String),

    /// A locale resource is not a valid flat TOML table of strings.
    #[error("Parse Error: {0}")]
    Parse(String),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
