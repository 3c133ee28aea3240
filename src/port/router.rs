// SPDX-License-Identifier: MPL-2.0
//! Router port.

/// Access to the host router.
///
/// `navigate` is fire-and-forget: the host signals destination readiness
/// separately via
/// [`ScrollCoordinator::on_destination_ready`](crate::navigation::scroll::ScrollCoordinator::on_destination_ready),
/// there is no completion value here.
pub trait Router {
    /// The raw current path, including any query or fragment.
    fn current_path(&self) -> String;

    /// Requests a route change to `path`.
    fn navigate(&mut self, path: &str);
}
