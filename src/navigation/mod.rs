// SPDX-License-Identifier: MPL-2.0
//! Smart menu navigation.
//!
//! [`dispatcher`] holds the pure decision function mapping a menu click to a
//! [`NavigationAction`](dispatcher::NavigationAction); [`scroll`] executes
//! the scroll-flavored actions, including the deferred scroll that runs after
//! a cross-page navigation.

pub mod dispatcher;
pub mod scroll;

pub use dispatcher::{dispatch, NavigationAction};
pub use scroll::{ScrollCoordinator, ScrollOutcome};
