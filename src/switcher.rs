// SPDX-License-Identifier: MPL-2.0
//! Locale switching.
//!
//! Switching locale rewrites the locale segment of the current path,
//! persists the choice as a long-lived site-wide preference and triggers a
//! route change. The path rewrite itself is a pure function so the
//! round-trip properties can be tested without any ports.

use crate::error::Result;
use crate::locale::{Locale, SUPPORTED_LOCALES};
use crate::port::{PreferenceStore, Router};

/// How long a persisted locale preference stays valid: one year, matching
/// the site cookie the preference replaces.
pub const PREFERENCE_MAX_AGE_SECS: i64 = 31_536_000;

/// Rewrites the locale segment of `current_path` to `new_locale`.
///
/// The leading locale segment, if present, is stripped and replaced;
/// everything after it — sub-path, query, fragment — is preserved verbatim.
/// A path with no locale segment simply gains one.
#[must_use]
pub fn rewrite_locale_path(new_locale: Locale, current_path: &str) -> String {
    format!(
        "/{}{}",
        new_locale.code(),
        strip_locale_segment(current_path)
    )
}

/// Removes the leading locale segment, returning the remainder (which keeps
/// its leading `/`, `?` or `#` when present).
///
/// Only a full segment counts: `/enterprise` keeps its prefix.
fn strip_locale_segment(path: &str) -> &str {
    if let Some(rest) = path.strip_prefix('/') {
        for locale in SUPPORTED_LOCALES {
            if let Some(after) = rest.strip_prefix(locale.code()) {
                if after.is_empty() || after.starts_with(['/', '?', '#']) {
                    return after;
                }
            }
        }
    }
    path
}

/// Switches the site to `new_locale`.
///
/// Reads the current path from the router, rewrites its locale segment,
/// persists the preference and issues the route change. Returns the
/// composed path. Operates on locale values already validated by
/// [`resolve`](crate::locale::resolve), so there is no invalid-locale path
/// here.
///
/// # Errors
///
/// Propagates [`Error::Persistence`](crate::error::Error::Persistence) when
/// the preference cannot be written; the route change is not issued in that
/// case, so path and persisted preference never diverge.
pub fn switch_to(
    new_locale: Locale,
    router: &mut impl Router,
    prefs: &mut impl PreferenceStore,
) -> Result<String> {
    let rewritten = rewrite_locale_path(new_locale, &router.current_path());
    prefs.store(new_locale)?;
    router.navigate(&rewritten);
    Ok(rewritten)
}
