// SPDX-License-Identifier: MPL-2.0
//! `virgo_i18n` holds the English and Italian UI strings of the Virgo
//! website and the lookups the page renderer uses to read them.
//!
//! The strings live in `assets/i18n/<code>.toml`, embedded at compile time
//! and parsed once into an immutable [`i18n::LocalizationTable`].

#![doc(html_root_url = "https://docs.rs/virgo_i18n/0.1.0")]

pub mod config;
pub mod error;
pub mod i18n;

pub use error::{Error, Result};
pub use i18n::{
    default_locale, get_translation, list_locales, should_show_default_locale_in_path, I18n,
    Locale, LocalizationTable,
};
