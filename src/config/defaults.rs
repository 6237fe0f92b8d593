// SPDX-License-Identifier: MPL-2.0
//! Default values shared by the table, the translator and the CLI.

use crate::i18n::locale::Locale;

/// Locale used when the caller does not pick one.
pub const DEFAULT_LANG: Locale = Locale::En;

/// Whether the routing layer should include the default locale's code in
/// generated paths (`/en/contact` rather than `/contact`).
pub const SHOW_DEFAULT_LANG: bool = false;

/// Returned by the lenient translator when no locale defines a key.
pub const MISSING_PREFIX: &str = "MISSING: ";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    let mut found = false;
    let mut i = 0;
    while i < Locale::ALL.len() {
        if Locale::ALL[i] as u8 == DEFAULT_LANG as u8 {
            found = true;
        }
        i += 1;
    }
    assert!(found, "DEFAULT_LANG must be a supported locale");
};
