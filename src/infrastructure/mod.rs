// SPDX-License-Identifier: MPL-2.0
//! Adapters implementing the [`port`](crate::port) traits against the real
//! environment. The navigation core never touches these directly.

pub mod prefs;

pub use prefs::FilePreferenceStore;
