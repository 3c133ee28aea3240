// SPDX-License-Identifier: MPL-2.0
//! The navigation decision function.
//!
//! `dispatch` is pure: it looks only at the entry, the current path and the
//! active locale, and produces a fresh [`NavigationAction`] for the caller to
//! execute. It never touches the router or the scroll surface itself.

use crate::locale::Locale;
use crate::menu::{EntryKind, MenuEntry};

/// What a menu click should do. Consumed immediately by the
/// [`ScrollCoordinator`](super::scroll::ScrollCoordinator) or the router;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationAction {
    /// Scroll within the current page to the given anchor.
    ScrollTo { anchor: String },
    /// Navigate to `path`, then scroll to `anchor` once the destination is
    /// ready. The anchor does not exist until the destination has rendered,
    /// so the scroll must be deferred.
    NavigateThenScroll { path: String, anchor: String },
    /// Plain route change.
    Navigate { path: String },
}

/// The home page path for a locale, e.g. `/en`.
#[must_use]
pub fn home_path(locale: Locale) -> String {
    format!("/{}", locale.code())
}

/// Prefixes an absolute sub-path with the locale segment.
///
/// `compose_path(En, "/articles")` is `/en/articles`; the bare `/` composes
/// to the home path.
#[must_use]
pub fn compose_path(locale: Locale, target: &str) -> String {
    if target == "/" {
        home_path(locale)
    } else {
        format!("/{}{}", locale.code(), target)
    }
}

/// Decides how a click on `entry` navigates.
///
/// - `Page` entries are hard destinations: always a plain navigation to the
///   locale-prefixed target, regardless of where the user currently is.
/// - `Home` and `Section` entries resolve relative to the home page: scroll
///   in place when already home, otherwise navigate home and defer the
///   scroll until the destination is ready.
///
/// `Home` and `Section` differ only in their missing-anchor fallback, which
/// applies at execution time (see
/// [`ScrollCoordinator::scroll_to`](super::scroll::ScrollCoordinator::scroll_to)).
#[must_use]
pub fn dispatch(entry: &MenuEntry, current_path: &str, locale: Locale) -> NavigationAction {
    match entry.kind {
        EntryKind::Page => NavigationAction::Navigate {
            path: compose_path(locale, entry.target),
        },
        EntryKind::Home | EntryKind::Section => {
            let home = home_path(locale);
            if current_path == home {
                NavigationAction::ScrollTo {
                    anchor: entry.target.to_string(),
                }
            } else {
                NavigationAction::NavigateThenScroll {
                    path: home,
                    anchor: entry.target.to_string(),
                }
            }
        }
    }
}
