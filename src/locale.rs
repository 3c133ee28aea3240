// SPDX-License-Identifier: MPL-2.0
//! Locale resolution for the site's URL scheme.
//!
//! Every page lives under a locale prefix (`/en`, `/cs`, `/de`). The active
//! locale is never cached: it is re-derived on demand from the current path,
//! falling back to the persisted preference, the configured site language,
//! the OS locale hint, and finally the default. Invalid tokens are coerced
//! to the default at the boundary rather than surfaced as errors.

use crate::config::Config;
use std::fmt;
use unic_langid::LanguageIdentifier;

/// The fixed set of locales the site is built for.
pub const SUPPORTED_LOCALES: [Locale; 3] = [Locale::En, Locale::Cs, Locale::De];

/// Fallback used whenever a token cannot be interpreted.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// A supported language/region code driving both the URL prefix and the
/// displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Cs,
    De,
}

impl Locale {
    /// The lowercase code used as the URL prefix segment.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Cs => "cs",
            Locale::De => "de",
        }
    }

    /// Parses a raw token into a supported locale.
    ///
    /// Matching is exact: only the bare lowercase codes `en`, `cs` and `de`
    /// are members of the set. `"EN"` and `"de-AT"` are not supported
    /// tokens and parse as `None`.
    #[must_use]
    pub fn from_code(token: &str) -> Option<Self> {
        match token {
            "en" => Some(Locale::En),
            "cs" => Some(Locale::Cs),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Interprets an OS locale hint such as `"en-US"` or `"de_AT.UTF-8"`.
    ///
    /// OS hints are the one source that legitimately carries case and region
    /// qualifiers, so this matches on the language subtag. URL segments and
    /// stored tokens go through the exact [`from_code`](Self::from_code).
    fn from_os_token(token: &str) -> Option<Self> {
        let token = token.trim();
        let language = token.split(['-', '_', '.']).next().unwrap_or(token);
        Self::from_code(language.to_ascii_lowercase().as_str())
    }

    /// The locale as a Fluent-compatible language identifier.
    #[must_use]
    pub fn language_id(self) -> LanguageIdentifier {
        self.code()
            .parse()
            .expect("supported locale codes are valid language identifiers")
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Validates a raw locale token, degrading to [`DEFAULT_LOCALE`].
///
/// Pure and total: there is no failure mode, an unsupported token simply
/// resolves to the default.
#[must_use]
pub fn resolve(token: &str) -> Locale {
    Locale::from_code(token).unwrap_or(DEFAULT_LOCALE)
}

/// Extracts the locale from a path's leading segment, if it carries one.
///
/// Only a full segment counts: `"/en/articles"` yields `En`, `"/english"`
/// yields `None`.
#[must_use]
pub fn locale_from_path(path: &str) -> Option<Locale> {
    let rest = path.strip_prefix('/')?;
    let segment = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    Locale::from_code(segment)
}

/// Derives the active locale for the current interaction.
///
/// The path is the source of truth; the persisted preference, the configured
/// site language and the OS locale are consulted only when the path carries
/// no locale segment. The result is always a member of the supported set.
#[must_use]
pub fn current_locale(path: &str, persisted: Option<&str>, config: &Config) -> Locale {
    current_locale_with(
        path,
        persisted,
        config.language.as_deref(),
        sys_locale::get_locale().as_deref(),
    )
}

/// Like [`current_locale`] but with every fallback source passed explicitly,
/// so the chain can be tested without touching the host environment.
#[must_use]
pub fn current_locale_with(
    path: &str,
    persisted: Option<&str>,
    configured: Option<&str>,
    os_hint: Option<&str>,
) -> Locale {
    if let Some(locale) = locale_from_path(path) {
        return locale;
    }
    for token in [persisted, configured].into_iter().flatten() {
        if let Some(locale) = Locale::from_code(token) {
            return locale;
        }
    }
    if let Some(locale) = os_hint.and_then(Locale::from_os_token) {
        return locale;
    }
    DEFAULT_LOCALE
}
