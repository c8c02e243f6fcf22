//! Experiment navigation and scoring actions.

/// Actions for the experiment scoring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoringAction {
    /// Move the experiment cursor down; one past the last experiment is the
    /// submit-focus sentinel.
    ExperimentNext,
    /// Move the experiment cursor up.
    ExperimentPrevious,
    /// Move the group cursor down within the active experiment.
    GroupNext,
    /// Move the group cursor up within the active experiment.
    GroupPrevious,
    /// Trigger the control at `rank` in the active group, then advance the
    /// group cursor. Shifted digits arrive here with `rank` already +10.
    Score { rank: usize },
}
