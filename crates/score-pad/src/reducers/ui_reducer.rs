//! UI reducer - help overlay and shutdown.

use crate::actions::{Action, GlobalAction};
use crate::state::UiState;

pub fn reduce_ui(mut state: UiState, action: &Action) -> UiState {
    match action {
        Action::Global(GlobalAction::ToggleHelp) => {
            state.show_help = !state.show_help;
        }
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        _ => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_overlay_toggles() {
        let state = UiState::default();
        let state = reduce_ui(state, &Action::Global(GlobalAction::ToggleHelp));
        assert!(state.show_help);
        let state = reduce_ui(state, &Action::Global(GlobalAction::ToggleHelp));
        assert!(!state.show_help);
    }

    #[test]
    fn quit_stops_the_loop() {
        let state = reduce_ui(UiState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }
}
