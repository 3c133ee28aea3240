// SPDX-License-Identifier: MPL-2.0
//! Localized page content.
//!
//! Translations live in embedded Fluent (`.ftl`) files, one per supported
//! locale. A dictionary is only handed out after validating that every
//! required message is present; an incomplete locale is a fatal error for
//! the page render that requested it, never a partial render.

pub mod store;

pub use store::{ContentStore, Dictionary, REQUIRED_MESSAGES};
