// SPDX-License-Identifier: MPL-2.0
//! The static menu catalog.
//!
//! Menu entries are plain configuration data, fully defined at compile time
//! and decoupled from any rendering concern so the dispatcher can be tested
//! without a UI framework. Each entry carries a display label per supported
//! locale and a navigation descriptor (kind + target).

use crate::locale::Locale;

/// Semantic kind of a menu entry, deciding how a click on it navigates.
///
/// `Home` and `Section` resolve relative to the home page (scroll, or
/// redirect home and then scroll); `Page` entries are hard routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Anchor on the home page that doubles as the page top.
    Home,
    /// Anchor within the home page.
    Section,
    /// Standalone page; `target` is an absolute sub-path.
    Page,
}

/// One display string per supported locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub en: &'static str,
    pub cs: &'static str,
    pub de: &'static str,
}

impl Labels {
    #[must_use]
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Cs => self.cs,
            Locale::De => self.de,
        }
    }
}

/// A navigable menu item.
///
/// For [`EntryKind::Home`] and [`EntryKind::Section`], `target` is an
/// in-page anchor identifier; for [`EntryKind::Page`] it is an absolute
/// sub-path (leading `/`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub labels: Labels,
    pub kind: EntryKind,
    pub target: &'static str,
}

/// The site menu, in display order. Immutable for the process lifetime.
pub const MENU: [MenuEntry; 4] = [
    MenuEntry {
        labels: Labels {
            en: "Introduction",
            cs: "Úvod",
            de: "Einführung",
        },
        kind: EntryKind::Home,
        target: "introduction",
    },
    MenuEntry {
        labels: Labels {
            en: "Products",
            cs: "Produkty",
            de: "Produkte",
        },
        kind: EntryKind::Section,
        target: "products",
    },
    MenuEntry {
        labels: Labels {
            en: "Contacts",
            cs: "Kontakty",
            de: "Kontakte",
        },
        kind: EntryKind::Section,
        target: "contacts",
    },
    MenuEntry {
        labels: Labels {
            en: "Articles",
            cs: "Články",
            de: "Artikel",
        },
        kind: EntryKind::Page,
        target: "/articles",
    },
];

/// Label for the inquiry call-to-action button, which navigates to the
/// contacts section via [`entry_for_target`].
#[must_use]
pub fn inquiry_label(locale: Locale) -> &'static str {
    const INQUIRY: Labels = Labels {
        en: "Inquiry",
        cs: "Poptávka",
        de: "Anfrage",
    };
    INQUIRY.get(locale)
}

/// Looks up a catalog entry by its target.
#[must_use]
pub fn entry_for_target(target: &str) -> Option<&'static MenuEntry> {
    MENU.iter().find(|entry| entry.target == target)
}
