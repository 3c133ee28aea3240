// SPDX-License-Identifier: MPL-2.0
//! Scroll execution, including the deferred scroll after a cross-page
//! navigation.
//!
//! The original site approximated destination readiness with a fixed timer.
//! Here the host raises an explicit signal instead: after issuing the
//! navigation the coordinator records the pending scroll, and the host calls
//! [`ScrollCoordinator::on_destination_ready`] once the destination's render
//! target is mounted. At fire time the coordinator checks that the current
//! path still matches the intended destination — a stale pending scroll is
//! discarded without touching the surface — and retries a missing anchor a
//! bounded number of times before falling back.
//!
//! Missing-anchor policy is per entry kind and deliberately asymmetric:
//! `Home` falls back to scrolling to the top of the document (its anchor may
//! legitimately sit at the very top of an already-scrolled page), `Section`
//! no-ops.

use crate::menu::EntryKind;
use crate::port::{Router, ScrollSurface};

use super::dispatcher::NavigationAction;

/// How many readiness signals a deferred scroll survives with its anchor
/// still absent before the per-kind fallback applies.
pub const DEFAULT_ANCHOR_RETRY_LIMIT: u8 = 5;

/// What a scroll attempt did, so hosts and tests can observe behavior
/// without a rendering framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// The anchor was found and scrolled into view.
    Scrolled,
    /// The anchor was absent; fell back to the top of the document (`Home`).
    ScrolledToTop,
    /// The anchor was absent and the kind's policy is to do nothing
    /// (`Section`).
    Skipped,
    /// The anchor is still absent but retries remain; the pending scroll is
    /// kept for the next readiness signal.
    Pending,
    /// The current path no longer matches the pending destination; the
    /// pending scroll was discarded without touching the surface.
    Cancelled,
}

/// A deferred scroll waiting for its destination to become ready.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingScroll {
    path: String,
    anchor: String,
    kind: EntryKind,
    retries_left: u8,
}

/// Executes scroll actions and coordinates the deferred scroll.
///
/// At most one deferred scroll exists at a time: scheduling a new one, or
/// executing a plain navigation, replaces or cancels the previous one. Each
/// interaction starts from a fresh decision and must not leave a stale
/// scroll behind.
#[derive(Debug)]
pub struct ScrollCoordinator {
    pending: Option<PendingScroll>,
    retry_limit: u8,
}

impl Default for ScrollCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::with_retry_limit(DEFAULT_ANCHOR_RETRY_LIMIT)
    }

    /// Creates a coordinator with a custom anchor retry budget
    /// (see [`Config::scroll_retry_limit`](crate::config::Config)).
    #[must_use]
    pub fn with_retry_limit(retry_limit: u8) -> Self {
        Self {
            pending: None,
            retry_limit,
        }
    }

    /// Scrolls to `anchor` on the current page, applying the per-kind
    /// missing-anchor policy.
    pub fn scroll_to(
        &self,
        kind: EntryKind,
        anchor: &str,
        surface: &mut impl ScrollSurface,
    ) -> ScrollOutcome {
        if surface.has_anchor(anchor) {
            surface.scroll_to_anchor(anchor);
            return ScrollOutcome::Scrolled;
        }
        match kind {
            EntryKind::Home => {
                surface.scroll_to_top();
                ScrollOutcome::ScrolledToTop
            }
            EntryKind::Section | EntryKind::Page => ScrollOutcome::Skipped,
        }
    }

    /// Issues the navigation to `path` and records a deferred scroll to
    /// `anchor`, replacing any previously pending one.
    ///
    /// Returns immediately; the scroll attempt runs when the host raises
    /// [`on_destination_ready`](Self::on_destination_ready).
    pub fn schedule_after_navigate(
        &mut self,
        kind: EntryKind,
        path: String,
        anchor: String,
        router: &mut impl Router,
    ) {
        router.navigate(&path);
        self.pending = Some(PendingScroll {
            path,
            anchor,
            kind,
            retries_left: self.retry_limit,
        });
    }

    /// Readiness signal: the destination's render target is mounted.
    ///
    /// Returns `None` when no deferred scroll is pending. Otherwise the
    /// pending scroll is fired, retried or discarded:
    ///
    /// - path mismatch (the user navigated elsewhere in the meantime) →
    ///   [`ScrollOutcome::Cancelled`], no surface mutation;
    /// - anchor present → [`ScrollOutcome::Scrolled`];
    /// - anchor absent with retries left → [`ScrollOutcome::Pending`], kept
    ///   for the next signal;
    /// - retry budget exhausted → the per-kind fallback.
    pub fn on_destination_ready(
        &mut self,
        current_path: &str,
        surface: &mut impl ScrollSurface,
    ) -> Option<ScrollOutcome> {
        let pending = self.pending.as_mut()?;

        if pending.path != current_path {
            self.pending = None;
            return Some(ScrollOutcome::Cancelled);
        }

        if surface.has_anchor(&pending.anchor) {
            let anchor = pending.anchor.clone();
            self.pending = None;
            surface.scroll_to_anchor(&anchor);
            return Some(ScrollOutcome::Scrolled);
        }

        if pending.retries_left > 0 {
            pending.retries_left -= 1;
            return Some(ScrollOutcome::Pending);
        }

        let kind = pending.kind;
        self.pending = None;
        Some(match kind {
            EntryKind::Home => {
                surface.scroll_to_top();
                ScrollOutcome::ScrolledToTop
            }
            EntryKind::Section | EntryKind::Page => ScrollOutcome::Skipped,
        })
    }

    /// Executes a dispatched action against the router and surface.
    ///
    /// A plain `Navigate` cancels any pending deferred scroll: the
    /// destination it was scheduled against is no longer where the user is
    /// going.
    pub fn execute(
        &mut self,
        kind: EntryKind,
        action: NavigationAction,
        router: &mut impl Router,
        surface: &mut impl ScrollSurface,
    ) -> Option<ScrollOutcome> {
        match action {
            NavigationAction::ScrollTo { anchor } => {
                Some(self.scroll_to(kind, &anchor, surface))
            }
            NavigationAction::NavigateThenScroll { path, anchor } => {
                self.schedule_after_navigate(kind, path, anchor, router);
                None
            }
            NavigationAction::Navigate { path } => {
                self.pending = None;
                router.navigate(&path);
                None
            }
        }
    }

    /// The destination path of the pending deferred scroll, if any.
    #[must_use]
    pub fn pending_destination(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.path.as_str())
    }

    /// Drops any pending deferred scroll.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
