//! Scoring reducer
//!
//! Experiment/group navigation and digit scoring over the sheet.

use crate::actions::{Action, ScoringAction};
use crate::activator;
use crate::state::ScoringState;

pub fn reduce_scoring(mut state: ScoringState, action: &Action) -> ScoringState {
    let Action::Scoring(action) = action else {
        return state;
    };

    match action {
        ScoringAction::ExperimentNext => move_experiment(&mut state, 1),
        ScoringAction::ExperimentPrevious => move_experiment(&mut state, -1),
        ScoringAction::GroupNext => move_group(&mut state, 1),
        ScoringAction::GroupPrevious => move_group(&mut state, -1),
        ScoringAction::Score { rank } => score(&mut state, *rank),
    }

    state
}

fn move_experiment(state: &mut ScoringState, step: i64) {
    let next = state.nav.experiment as i64 + step;
    // One past the last experiment is the submit-focus sentinel; anything
    // beyond that in either direction is clamped to a no-op.
    if next < 0 || next > state.sheet.len() as i64 {
        return;
    }
    // The submit control loses focus on any accepted move.
    state.submit_focused = false;
    let next = next as usize;
    state.nav.experiment = next;

    if next == state.sheet.len() {
        activator::focus_submit(state);
        log::debug!("Submit focused");
    } else {
        activator::activate_experiment(state);
        log::debug!("Experiment {} activated", state.sheet.experiments[next].id);
    }
}

fn move_group(state: &mut ScoringState, step: i64) {
    let next = state.nav.group as i64 + step;
    if next < 0 || next >= state.nav.groups.len() as i64 {
        return;
    }
    state.nav.group = next as usize;
    activator::activate_group(state);
}

/// Trigger the control at `rank` within the active group, then advance the
/// group cursor one step. A rank beyond the group is a silent no-op and does
/// not advance.
fn score(state: &mut ScoringState, rank: usize) {
    let Some(group) = state.nav.groups.get(state.nav.group).cloned() else {
        return;
    };

    // Controls are resolved by group id across the document, mirroring a
    // page-global id lookup: the first experiment containing the id owns it.
    let mut scored = false;
    for experiment in &mut state.sheet.experiments {
        let indices = experiment.control_indices(&group);
        if indices.is_empty() {
            continue;
        }
        let Some(&control_index) = indices.get(rank) else {
            return;
        };
        let control = &mut experiment.controls[control_index];
        control.trigger();
        log::debug!(
            "Scored '{}' (rank {}) in group {}, checked: {}",
            control.label,
            rank,
            group,
            control.checked
        );
        scored = true;
        break;
    }

    if scored {
        move_group(state, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Action;
    use score_sheet::{Control, Experiment, Sheet};

    fn control(group: &str, label: &str) -> Control {
        Control {
            group: group.to_string(),
            label: label.to_string(),
            checked: false,
        }
    }

    /// Three experiments, each with two groups of three controls.
    fn fixture() -> ScoringState {
        let experiments = (0..3)
            .map(|i| Experiment {
                id: format!("exp-{i}"),
                title: format!("Experiment {i}"),
                controls: vec![
                    control(&format!("emb-{i}"), "Strong"),
                    control(&format!("emb-{i}"), "Medium"),
                    control(&format!("emb-{i}"), "Weak"),
                    control(&format!("ste-{i}"), "Strong"),
                    control(&format!("ste-{i}"), "Medium"),
                    control(&format!("ste-{i}"), "Weak"),
                ],
                active: false,
            })
            .collect();

        let mut state = ScoringState::new(Sheet {
            experiments,
            active_group: None,
        });
        activator::activate_experiment(&mut state);
        state
    }

    fn down(state: ScoringState) -> ScoringState {
        reduce_scoring(state, &Action::Scoring(ScoringAction::ExperimentNext))
    }

    fn up(state: ScoringState) -> ScoringState {
        reduce_scoring(state, &Action::Scoring(ScoringAction::ExperimentPrevious))
    }

    #[test]
    fn moving_down_n_times_reaches_the_sentinel_and_stops() {
        let mut state = fixture();
        let n = state.sheet.len();

        for _ in 0..n {
            state = down(state);
        }
        assert_eq!(state.nav.experiment, n);
        assert!(state.submit_focused);

        // One more Down is a no-op on the index.
        state = down(state);
        assert_eq!(state.nav.experiment, n);
    }

    #[test]
    fn moving_up_from_the_first_experiment_is_a_no_op() {
        let mut state = fixture();
        state = up(state);
        assert_eq!(state.nav.experiment, 0);
        assert!(state.sheet.experiments[0].active);
    }

    #[test]
    fn moving_up_from_the_sentinel_blurs_submit_and_reactivates() {
        let mut state = fixture();
        for _ in 0..3 {
            state = down(state);
        }
        assert!(state.submit_focused);

        state = up(state);
        assert_eq!(state.nav.experiment, 2);
        assert!(!state.submit_focused);
        assert!(state.sheet.experiments[2].active);
    }

    #[test]
    fn activating_an_experiment_resets_the_group_cursor() {
        let mut state = fixture();
        state = reduce_scoring(state, &Action::Scoring(ScoringAction::GroupNext));
        assert_eq!(state.nav.group, 1);

        state = down(state);
        assert_eq!(state.nav.group, 0);
        assert_eq!(state.sheet.active_group.as_deref(), Some("emb-1"));
    }

    #[test]
    fn group_moves_are_clamped_to_the_derived_list() {
        let mut state = fixture();

        state = reduce_scoring(state, &Action::Scoring(ScoringAction::GroupPrevious));
        assert_eq!(state.nav.group, 0);

        state = reduce_scoring(state, &Action::Scoring(ScoringAction::GroupNext));
        state = reduce_scoring(state, &Action::Scoring(ScoringAction::GroupNext));
        assert_eq!(state.nav.group, 1);
    }

    #[test]
    fn scoring_triggers_the_ranked_control_and_advances() {
        let mut state = fixture();

        state = reduce_scoring(state, &Action::Scoring(ScoringAction::Score { rank: 2 }));

        assert!(state.sheet.experiments[0].controls[2].checked);
        assert_eq!(state.nav.group, 1);
        assert_eq!(state.sheet.active_group.as_deref(), Some("ste-0"));
    }

    #[test]
    fn scoring_past_the_group_is_a_no_op_without_advance() {
        let mut state = fixture();

        state = reduce_scoring(state, &Action::Scoring(ScoringAction::Score { rank: 3 }));

        assert!(state.sheet.experiments[0].controls.iter().all(|c| !c.checked));
        assert_eq!(state.nav.group, 0);
    }

    #[test]
    fn scoring_advance_is_clamped_at_the_last_group() {
        let mut state = fixture();
        state = reduce_scoring(state, &Action::Scoring(ScoringAction::GroupNext));

        state = reduce_scoring(state, &Action::Scoring(ScoringAction::Score { rank: 0 }));

        assert!(state.sheet.experiments[0].controls[3].checked);
        assert_eq!(state.nav.group, 1);
    }

    #[test]
    fn repeated_digits_walk_down_the_groups() {
        let mut state = fixture();

        state = reduce_scoring(state, &Action::Scoring(ScoringAction::Score { rank: 1 }));
        state = reduce_scoring(state, &Action::Scoring(ScoringAction::Score { rank: 1 }));

        assert!(state.sheet.experiments[0].controls[1].checked);
        assert!(state.sheet.experiments[0].controls[4].checked);
    }
}
