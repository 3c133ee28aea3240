// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! These are the seams between the navigation core and its environment. The
//! traits use only domain types, so the decision logic stays testable without
//! a browser, a DOM or a real router.
//!
//! # Available Ports
//!
//! - [`router`]: read the current path, issue programmatic navigations
//! - [`scroll`]: anchor lookup and scrolling on the render target
//! - [`prefs`]: long-lived storage for the user's chosen locale

pub mod prefs;
pub mod router;
pub mod scroll;

pub use prefs::PreferenceStore;
pub use router::Router;
pub use scroll::ScrollSurface;
