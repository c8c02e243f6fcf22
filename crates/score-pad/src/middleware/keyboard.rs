//! KeyboardMiddleware - the key router
//!
//! Translates raw key events into screen-specific actions based on which
//! screen is active. Routing is a pure function over (key code, modifiers,
//! context) so the whole table is testable without a store. A routed key is
//! consumed (the `preventDefault` equivalent); unrecognized keys and
//! anything pressed with Control held pass through untouched.

use crate::actions::{Action, GlobalAction, PlateAction, ScoringAction};
use crate::dispatcher::Dispatcher;
use crate::keys::{self, KeyInput};
use crate::middleware::Middleware;
use crate::state::{AppState, Mode};

pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Key(input) => match route_press(*input, state.mode()) {
                Some(routed) => {
                    dispatcher.dispatch(routed);
                    false
                }
                None => true,
            },
            Action::KeyRelease(input) => match route_release(*input) {
                Some(routed) => {
                    dispatcher.dispatch(routed);
                    false
                }
                None => true,
            },
            _ => true,
        }
    }
}

/// Classify a pressed key in context. `None` means the key is not recognized
/// and passes through untouched.
pub fn route_press(input: KeyInput, mode: Mode) -> Option<Action> {
    // A held Control modifier bypasses the router entirely.
    if input.ctrl() {
        return None;
    }

    match mode {
        Mode::Scoring => route_scoring(input),
        Mode::Plate => route_plate(input),
        Mode::Idle => route_idle(input),
    }
}

fn route_scoring(input: KeyInput) -> Option<Action> {
    match input.code {
        keys::UP if input.shift() => Some(Action::Scoring(ScoringAction::GroupPrevious)),
        keys::UP => Some(Action::Scoring(ScoringAction::ExperimentPrevious)),
        keys::DOWN if input.shift() => Some(Action::Scoring(ScoringAction::GroupNext)),
        keys::DOWN => Some(Action::Scoring(ScoringAction::ExperimentNext)),
        keys::TAB if input.shift() => Some(Action::Scoring(ScoringAction::GroupPrevious)),
        keys::TAB => Some(Action::Scoring(ScoringAction::GroupNext)),
        keys::ESCAPE => Some(Action::Global(GlobalAction::Quit)),
        code if keys::is_digit_code(code) => {
            let digit = keys::digit_value(code)? as usize;
            // Shift reaches the second bank of controls.
            let rank = if input.shift() { digit + 10 } else { digit };
            Some(Action::Scoring(ScoringAction::Score { rank }))
        }
        _ => None,
    }
}

fn route_plate(input: KeyInput) -> Option<Action> {
    match input.code {
        keys::UP => Some(Action::Plate(PlateAction::RowPrevious)),
        keys::DOWN => Some(Action::Plate(PlateAction::RowNext)),
        keys::LEFT => Some(Action::Plate(PlateAction::ColumnPrevious)),
        keys::RIGHT => Some(Action::Plate(PlateAction::ColumnNext)),
        keys::SPACE => Some(Action::Plate(PlateAction::ToggleInteresting)),
        keys::ESCAPE => Some(Action::Global(GlobalAction::Quit)),
        _ => None,
    }
}

fn route_idle(input: KeyInput) -> Option<Action> {
    match input.code {
        keys::ESCAPE => Some(Action::Global(GlobalAction::Quit)),
        _ => None,
    }
}

/// Release routing: only the help-overlay toggle listens on key release.
pub fn route_release(input: KeyInput) -> Option<Action> {
    if input.code == keys::SLASH && input.shift() {
        Some(Action::Global(GlobalAction::ToggleHelp))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{KeyInput, Modifiers};

    #[test]
    fn arrows_navigate_experiments_and_shift_navigates_groups() {
        assert_eq!(
            route_press(KeyInput::plain(keys::DOWN), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::ExperimentNext))
        );
        assert_eq!(
            route_press(KeyInput::plain(keys::UP), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::ExperimentPrevious))
        );
        assert_eq!(
            route_press(KeyInput::shifted(keys::DOWN), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::GroupNext))
        );
        assert_eq!(
            route_press(KeyInput::shifted(keys::UP), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::GroupPrevious))
        );
    }

    #[test]
    fn tab_navigates_groups_in_both_directions() {
        assert_eq!(
            route_press(KeyInput::plain(keys::TAB), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::GroupNext))
        );
        assert_eq!(
            route_press(KeyInput::shifted(keys::TAB), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::GroupPrevious))
        );
    }

    #[test]
    fn digits_from_either_range_score_and_shift_adds_ten() {
        assert_eq!(
            route_press(KeyInput::plain(keys::ZERO + 7), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::Score { rank: 7 }))
        );
        assert_eq!(
            route_press(KeyInput::plain(keys::ZERO_NUMPAD + 7), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::Score { rank: 7 }))
        );
        assert_eq!(
            route_press(KeyInput::shifted(keys::ZERO + 7), Mode::Scoring),
            Some(Action::Scoring(ScoringAction::Score { rank: 17 }))
        );
    }

    #[test]
    fn control_bypasses_the_router_for_every_key() {
        for code in [keys::UP, keys::DOWN, keys::TAB, keys::ZERO + 3, keys::ESCAPE] {
            let input = KeyInput::new(code, Modifiers::CONTROL);
            assert_eq!(route_press(input, Mode::Scoring), None);
            assert_eq!(route_press(input, Mode::Plate), None);
        }
    }

    #[test]
    fn unrecognized_codes_pass_through() {
        assert_eq!(route_press(KeyInput::plain(65), Mode::Scoring), None);
        assert_eq!(route_press(KeyInput::plain(keys::LEFT), Mode::Scoring), None);
        assert_eq!(route_press(KeyInput::plain(106), Mode::Scoring), None);
    }

    #[test]
    fn plate_mode_routes_arrows_and_space() {
        assert_eq!(
            route_press(KeyInput::plain(keys::DOWN), Mode::Plate),
            Some(Action::Plate(PlateAction::RowNext))
        );
        assert_eq!(
            route_press(KeyInput::plain(keys::LEFT), Mode::Plate),
            Some(Action::Plate(PlateAction::ColumnPrevious))
        );
        assert_eq!(
            route_press(KeyInput::plain(keys::RIGHT), Mode::Plate),
            Some(Action::Plate(PlateAction::ColumnNext))
        );
        assert_eq!(
            route_press(KeyInput::plain(keys::SPACE), Mode::Plate),
            Some(Action::Plate(PlateAction::ToggleInteresting))
        );
        // Digits don't score the plate.
        assert_eq!(route_press(KeyInput::plain(keys::ZERO), Mode::Plate), None);
    }

    #[test]
    fn help_toggles_on_shift_slash_release_only() {
        assert_eq!(
            route_release(KeyInput::shifted(keys::SLASH)),
            Some(Action::Global(GlobalAction::ToggleHelp))
        );
        assert_eq!(route_release(KeyInput::plain(keys::SLASH)), None);
        assert_eq!(route_release(KeyInput::shifted(keys::TAB)), None);
        // The press side never routes slash.
        assert_eq!(
            route_press(KeyInput::shifted(keys::SLASH), Mode::Scoring),
            None
        );
    }
}
