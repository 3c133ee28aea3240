// SPDX-License-Identifier: MPL-2.0
//! In-memory fakes for the [`port`](crate::port) traits, shared by unit and
//! integration tests. None of them touch the host environment.

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::port::{PreferenceStore, Router, ScrollSurface};

/// Router fake tracking the current path and every navigation issued.
#[derive(Debug, Clone, Default)]
pub struct FakeRouter {
    pub path: String,
    pub history: Vec<String>,
}

impl FakeRouter {
    #[must_use]
    pub fn at(path: &str) -> Self {
        Self {
            path: path.to_string(),
            history: Vec::new(),
        }
    }
}

impl Router for FakeRouter {
    fn current_path(&self) -> String {
        self.path.clone()
    }

    fn navigate(&mut self, path: &str) {
        self.history.push(path.to_string());
        self.path = path.to_string();
    }
}

/// Scroll surface fake with a mutable anchor set and recorded scrolls.
#[derive(Debug, Clone, Default)]
pub struct FakeSurface {
    anchors: Vec<String>,
    pub scrolled_to: Vec<String>,
    pub top_scrolls: usize,
}

impl FakeSurface {
    #[must_use]
    pub fn with_anchors(anchors: &[&str]) -> Self {
        Self {
            anchors: anchors.iter().map(|a| (*a).to_string()).collect(),
            scrolled_to: Vec::new(),
            top_scrolls: 0,
        }
    }

    /// Simulates content mounting after the initial render.
    pub fn add_anchor(&mut self, anchor: &str) {
        self.anchors.push(anchor.to_string());
    }

    /// Simulates a page transition replacing the rendered content.
    pub fn set_anchors(&mut self, anchors: &[&str]) {
        self.anchors = anchors.iter().map(|a| (*a).to_string()).collect();
    }
}

impl ScrollSurface for FakeSurface {
    fn has_anchor(&self, anchor: &str) -> bool {
        self.anchors.iter().any(|a| a == anchor)
    }

    fn scroll_to_anchor(&mut self, anchor: &str) {
        self.scrolled_to.push(anchor.to_string());
    }

    fn scroll_to_top(&mut self) {
        self.top_scrolls += 1;
    }
}

/// Preference store fake; `failing()` simulates unwritable storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    stored: Option<String>,
    fail_writes: bool,
}

impl MemoryPreferences {
    #[must_use]
    pub fn failing() -> Self {
        Self {
            stored: None,
            fail_writes: true,
        }
    }

    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            stored: Some(token.to_string()),
            fail_writes: false,
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn store(&mut self, locale: Locale) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Persistence("simulated write failure".to_string()));
        }
        self.stored = Some(locale.code().to_string());
        Ok(())
    }

    fn load(&self) -> Option<String> {
        self.stored.clone()
    }
}
