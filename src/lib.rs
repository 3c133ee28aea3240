// SPDX-License-Identifier: MPL-2.0
//! `sunpower_nav` is the navigation and locale-resolution core of the
//! Sunpower marketing site.
//!
//! Given a click on a menu entry it decides — from the current locale, the
//! current path and the entry's semantic kind — whether to scroll within the
//! current page, redirect home and then scroll, or perform a plain route
//! change; and given a locale switch it rewrites the path's locale segment
//! and persists the preference. The host page talks to it through three
//! entry points ([`resolve`], [`dispatch`], [`switch_to`]) and implements
//! the [`port`] traits for its router, render target and storage.

pub mod config;
pub mod content;
pub mod error;
pub mod infrastructure;
pub mod locale;
pub mod menu;
pub mod navigation;
pub mod port;
pub mod switcher;
pub mod test_utils;

pub use content::ContentStore;
pub use error::{Error, Result};
pub use locale::{resolve, Locale, DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use menu::{EntryKind, MenuEntry, MENU};
pub use navigation::{dispatch, NavigationAction, ScrollCoordinator, ScrollOutcome};
pub use switcher::{rewrite_locale_path, switch_to};
