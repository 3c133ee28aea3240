// SPDX-License-Identifier: MPL-2.0
//! File-backed locale preference storage using CBOR format.
//!
//! Stands in for the site cookie: one record, scoped to the whole
//! installation, valid for a year. Stored in CBOR for compact binary
//! storage and clear separation from the user-editable TOML settings.
//!
//! # Path Resolution
//!
//! The preference file location can be customized for testing or portable
//! deployments:
//! 1. Explicit base directory via [`FilePreferenceStore::with_base_dir`]
//! 2. `SUNPOWER_NAV_DATA_DIR` environment variable
//! 3. Platform-specific data directory

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::port::PreferenceStore;
use crate::switcher::PREFERENCE_MAX_AGE_SECS;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Preference file name within the data directory.
const PREFS_FILE: &str = "locale.cbor";

/// Directory name under the platform data dir.
const APP_NAME: &str = "SunpowerNav";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "SUNPOWER_NAV_DATA_DIR";

/// On-disk record: the chosen locale code plus the Unix timestamp it was
/// saved at, used to enforce the one-year freshness window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedPreference {
    locale: String,
    saved_at: i64,
}

/// CBOR file-backed [`PreferenceStore`].
#[derive(Debug, Clone, Default)]
pub struct FilePreferenceStore {
    base_dir: Option<PathBuf>,
}

impl FilePreferenceStore {
    /// Store using the default path resolution.
    #[must_use]
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Store rooted at an explicit directory (for tests and portable
    /// deployments). Takes priority over the environment variable and the
    /// platform default.
    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }

    fn prefs_path(&self) -> Option<PathBuf> {
        let base = if let Some(dir) = &self.base_dir {
            Some(dir.clone())
        } else if let Ok(env_dir) = std::env::var(ENV_DATA_DIR) {
            if env_dir.is_empty() {
                default_data_dir()
            } else {
                Some(PathBuf::from(env_dir))
            }
        } else {
            default_data_dir()
        };
        base.map(|mut path| {
            path.push(PREFS_FILE);
            path
        })
    }

    fn read_record(&self) -> Option<PersistedPreference> {
        let path = self.prefs_path()?;
        let file = fs::File::open(path).ok()?;
        ciborium::from_reader(BufReader::new(file)).ok()
    }
}

fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

impl PreferenceStore for FilePreferenceStore {
    fn store(&mut self, locale: Locale) -> Result<()> {
        let Some(path) = self.prefs_path() else {
            return Err(Error::Persistence(
                "no data directory available for the locale preference".to_string(),
            ));
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let record = PersistedPreference {
            locale: locale.code().to_string(),
            saved_at: Utc::now().timestamp(),
        };
        let file = fs::File::create(&path)?;
        ciborium::into_writer(&record, BufWriter::new(file))
            .map_err(|e| Error::Persistence(e.to_string()))
    }

    /// Reads the stored token. Missing, unreadable, corrupted or expired
    /// records all load as `None` — a stale preference behaves exactly like
    /// no preference.
    fn load(&self) -> Option<String> {
        let record = self.read_record()?;
        let age = Utc::now().timestamp() - record.saved_at;
        if age > PREFERENCE_MAX_AGE_SECS {
            return None;
        }
        Some(record.locale)
    }
}
