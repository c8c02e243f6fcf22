//! Scroll viewport shared by the sheet and plate views.

/// Requested scroll position in document lines.
///
/// Scroll requests are best-effort visual effects: views clamp the offset to
/// their content when applying it, so a request past the end simply shows
/// the document tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    pub scroll_top: u16,
}

impl Viewport {
    pub fn scroll_to(&mut self, top: u16) {
        self.scroll_top = top;
    }
}
