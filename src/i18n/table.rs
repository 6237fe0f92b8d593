// SPDX-License-Identifier: MPL-2.0
//! The localization table: one flat key → text mapping per locale.
//!
//! Each locale's strings live in `assets/i18n/<code>.toml` as a flat table of
//! quoted keys. The documents are embedded at compile time and parsed once;
//! after that the table is never mutated and can be shared across threads.

use super::locale::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

const RESOURCE_SUFFIX: &str = ".toml";

static GLOBAL: OnceLock<Result<LocalizationTable>> = OnceLock::new();

/// Anything that names a locale: a [`Locale`] or its string code.
pub trait LocaleRequest {
    fn to_locale(&self) -> Result<Locale>;
}

impl LocaleRequest for Locale {
    fn to_locale(&self) -> Result<Locale> {
        Ok(*self)
    }
}

impl LocaleRequest for str {
    fn to_locale(&self) -> Result<Locale> {
        self.parse()
    }
}

impl LocaleRequest for String {
    fn to_locale(&self) -> Result<Locale> {
        self.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationTable {
    entries: BTreeMap<Locale, BTreeMap<String, String>>,
}

impl LocalizationTable {
    /// Parses the embedded resources for every supported locale.
    pub fn load() -> Result<Self> {
        for file in Asset::iter() {
            let name = file.as_ref();
            let known = name
                .strip_suffix(RESOURCE_SUFFIX)
                .is_some_and(|stem| stem.parse::<Locale>().is_ok());
            if !known {
                tracing::warn!(resource = name, "ignoring resource for unsupported locale");
            }
        }

        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let name = format!("{}{RESOURCE_SUFFIX}", locale.code());
            let file = Asset::get(&name)
                .ok_or_else(|| Error::Asset(format!("no resource {name} for locale {locale}")))?;
            let text = String::from_utf8(file.data.into_owned())
                .map_err(|err| Error::Asset(format!("{name} is not valid UTF-8: {err}")))?;
            sources.push((locale, text));
        }

        let table = Self::from_sources(sources.iter().map(|(l, t)| (*l, t.as_str())))?;
        if let Err(err) = table.verify_key_parity() {
            tracing::warn!(%err, "locale resources drifted apart");
        }
        Ok(table)
    }

    /// Builds a table from `(locale, toml document)` pairs. A locale given
    /// twice keeps the last document.
    pub fn from_sources<'a>(sources: impl IntoIterator<Item = (Locale, &'a str)>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (locale, text) in sources {
            let strings: BTreeMap<String, String> = toml::from_str(text)
                .map_err(|err| Error::Parse(format!("{locale}: {}", err.message())))?;
            tracing::debug!(%locale, keys = strings.len(), "loaded locale strings");
            entries.insert(locale, strings);
        }
        Ok(Self { entries })
    }

    /// Parses `<dir>/<code>.toml` for every supported locale, so edited
    /// resources can be checked before they are embedded.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let path = dir.join(format!("{}{RESOURCE_SUFFIX}", locale.code()));
            let text = fs::read_to_string(&path)
                .map_err(|err| Error::Io(format!("{}: {err}", path.display())))?;
            sources.push((locale, text));
        }
        Self::from_sources(sources.iter().map(|(l, t)| (*l, t.as_str())))
    }

    /// The process-wide table, loaded on first access. A load failure is
    /// cached and returned to every caller.
    pub fn global() -> Result<&'static Self> {
        GLOBAL.get_or_init(Self::load).as_ref().map_err(Clone::clone)
    }

    /// Strict lookup of `key` under `locale`.
    pub fn get_translation<L>(&self, locale: &L, key: &str) -> Result<&str>
    where
        L: LocaleRequest + ?Sized,
    {
        let locale = locale.to_locale()?;
        self.entries(locale)
            .and_then(|strings| strings.get(key))
            .map(String::as_str)
            .ok_or_else(|| Error::MissingTranslationKey {
                locale,
                key: key.to_string(),
            })
    }

    /// Raw key → text mapping for `locale`, if one was loaded.
    #[must_use]
    pub fn entries(&self, locale: Locale) -> Option<&BTreeMap<String, String>> {
        self.entries.get(&locale)
    }

    /// Keys defined for `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.entries(locale)
            .into_iter()
            .flat_map(|strings| strings.keys().map(String::as_str))
    }

    /// Locales with a loaded mapping, in declaration order.
    pub fn locales(&self) -> impl Iterator<Item = Locale> + '_ {
        self.entries.keys().copied()
    }

    /// Checks that every locale declares exactly the same keys.
    pub fn verify_key_parity(&self) -> Result<()> {
        let union: BTreeSet<&str> = Locale::ALL
            .into_iter()
            .flat_map(|locale| self.keys(locale))
            .collect();

        let mut problems = Vec::new();
        for locale in Locale::ALL {
            let Some(strings) = self.entries(locale) else {
                problems.push(format!("{locale} has no strings"));
                continue;
            };
            let missing: Vec<&str> = union
                .iter()
                .copied()
                .filter(|key| !strings.contains_key(*key))
                .collect();
            if !missing.is_empty() {
                problems.push(format!("{locale} is missing [{}]", missing.join(", ")));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::KeyParity(problems.join("; ")))
        }
    }
}
