// SPDX-License-Identifier: MPL-2.0
use crate::error::{Error, Result};
use crate::locale::{Locale, SUPPORTED_LOCALES};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Message keys every locale's dictionary must define before it may be
/// rendered. One entry per required top-level section of the page.
pub const REQUIRED_MESSAGES: [&str; 10] = [
    "site-title",
    "site-description",
    "hero-title",
    "hero-subtitle",
    "products-title",
    "products-intro",
    "contacts-title",
    "contacts-intro",
    "articles-title",
    "footer-copyright",
];

/// Holds one Fluent bundle per supported locale, parsed from the embedded
/// `.ftl` assets at load time.
pub struct ContentStore {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl ContentStore {
    /// Parses the embedded dictionaries for every supported locale.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] when a locale's `.ftl` asset is missing or
    /// not valid Fluent. The site cannot ship without all of its locales.
    pub fn load() -> Result<Self> {
        let mut bundles = HashMap::new();

        for locale in SUPPORTED_LOCALES {
            let filename = format!("{}.ftl", locale.code());
            let file = Asset::get(&filename).ok_or_else(|| {
                Error::Content(format!("no dictionary asset for locale {}", locale))
            })?;
            let source = String::from_utf8_lossy(file.data.as_ref()).to_string();
            let resource = FluentResource::try_new(source).map_err(|_| {
                Error::Content(format!("dictionary for {} is not valid Fluent", locale))
            })?;
            let mut bundle = FluentBundle::new(vec![locale.language_id()]);
            bundle.add_resource(resource).map_err(|_| {
                Error::Content(format!("dictionary for {} has conflicting messages", locale))
            })?;
            bundles.insert(locale, bundle);
        }

        Ok(Self { bundles })
    }

    /// Returns the validated dictionary for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] when any message in [`REQUIRED_MESSAGES`]
    /// is absent. Callers must treat this as fatal for the page render
    /// rather than falling back to partial content.
    pub fn dictionary(&self, locale: Locale) -> Result<Dictionary<'_>> {
        let bundle = self
            .bundles
            .get(&locale)
            .ok_or_else(|| Error::Content(format!("no dictionary loaded for {}", locale)))?;

        let missing: Vec<&str> = REQUIRED_MESSAGES
            .iter()
            .copied()
            .filter(|key| !bundle.has_message(key))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Content(format!(
                "dictionary for {} is incomplete: missing {}",
                locale,
                missing.join(", ")
            )));
        }

        Ok(Dictionary { bundle, locale })
    }
}

/// A validated view over one locale's translations.
pub struct Dictionary<'a> {
    bundle: &'a FluentBundle<FluentResource>,
    locale: Locale,
}

impl Dictionary<'_> {
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Formats the message with the given key.
    ///
    /// Keys outside the required set may legitimately be absent for a
    /// locale; those degrade to a visible `MISSING:` marker instead of
    /// failing the render.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        if let Some(msg) = self.bundle.get_message(key) {
            if let Some(pattern) = msg.value() {
                let mut errors = vec![];
                let value = self.bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}
