// SPDX-License-Identifier: MPL-2.0
//! Scroll surface port.

/// The render target scroll actions run against.
///
/// In a browser host this wraps `getElementById` + `scrollIntoView`; tests
/// use an in-memory fake.
pub trait ScrollSurface {
    /// Whether an element with the given anchor identifier currently exists.
    fn has_anchor(&self, anchor: &str) -> bool;

    /// Smooth-scrolls the element with the given anchor into view.
    fn scroll_to_anchor(&mut self, anchor: &str);

    /// Smooth-scrolls to the top of the document.
    fn scroll_to_top(&mut self);
}
