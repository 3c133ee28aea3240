// SPDX-License-Identifier: MPL-2.0
//! Locale preference storage port.

use crate::error::Result;
use crate::locale::Locale;

/// Long-lived, site-scoped storage for the user's chosen locale.
///
/// `load` hands back the raw stored token; callers must validate it through
/// [`resolve`](crate::locale::resolve) rather than trusting it. A missing,
/// expired or unreadable preference is simply `None` — preference reads are
/// never fatal.
pub trait PreferenceStore {
    /// Persists `locale` as the user's preference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Persistence`](crate::error::Error::Persistence) when
    /// the backing storage cannot be written.
    fn store(&mut self, locale: Locale) -> Result<()>;

    /// Reads back the previously stored preference token, if any.
    fn load(&self) -> Option<String>;
}
