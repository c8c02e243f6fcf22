//! UI chrome state.

#[derive(Debug, Clone)]
pub struct UiState {
    pub show_help: bool,
    pub running: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            show_help: false,
            running: true,
        }
    }
}
