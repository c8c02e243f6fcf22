//! Application-wide actions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Show or hide the keyboard help overlay.
    ToggleHelp,
    /// Leave the event loop.
    Quit,
}
