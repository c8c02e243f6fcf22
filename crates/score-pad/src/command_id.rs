//! Command identifiers
//!
//! The catalog of semantic commands the router can trigger, with the static
//! metadata the help overlay renders. Routing itself is keyed on raw key
//! codes in the keyboard middleware; this enum exists so every binding is
//! documentable in one place.

use strum::EnumIter;

/// Unique identifier for each command, grouped by category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum CommandId {
    // === Experiments ===
    /// Activate the next experiment (or the submit control past the last)
    ExperimentNext,
    /// Activate the previous experiment
    ExperimentPrevious,

    // === Scoring ===
    /// Move to the next keyable group
    GroupNext,
    /// Move to the previous keyable group
    GroupPrevious,
    /// Score the active group at the pressed digit's rank
    ScoreRank,
    /// Score the second bank (ranks 10-19) of the active group
    ScoreRankSecondBank,

    // === Contact sheet ===
    /// Move down one plate row
    RowNext,
    /// Move up one plate row
    RowPrevious,
    /// Move right one plate column
    ColumnNext,
    /// Move left one plate column
    ColumnPrevious,
    /// Flip the interesting mark on the active well
    ToggleInteresting,

    // === General ===
    /// Show or hide the keyboard help overlay
    ToggleHelp,
    /// Quit the application
    Quit,
}

impl CommandId {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExperimentNext => "Next experiment",
            Self::ExperimentPrevious => "Previous experiment",
            Self::GroupNext => "Next group",
            Self::GroupPrevious => "Previous group",
            Self::ScoreRank => "Score",
            Self::ScoreRankSecondBank => "Score second bank",
            Self::RowNext => "Next row",
            Self::RowPrevious => "Previous row",
            Self::ColumnNext => "Next column",
            Self::ColumnPrevious => "Previous column",
            Self::ToggleInteresting => "Toggle interesting",
            Self::ToggleHelp => "Toggle help",
            Self::Quit => "Quit",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::ExperimentNext => "Activate the next experiment; past the last one, focus submit",
            Self::ExperimentPrevious => "Activate the previous experiment",
            Self::GroupNext => "Move the group cursor down within the active experiment",
            Self::GroupPrevious => "Move the group cursor up within the active experiment",
            Self::ScoreRank => "Toggle the control at that rank in the active group, then advance",
            Self::ScoreRankSecondBank => "Toggle the control at rank 10-19 in the active group, then advance",
            Self::RowNext => "Move to the row below, back at the first column",
            Self::RowPrevious => "Move to the row above, back at the first column",
            Self::ColumnNext => "Move one column right",
            Self::ColumnPrevious => "Move one column left",
            Self::ToggleInteresting => "Flip the interesting mark on the active well",
            Self::ToggleHelp => "Show or hide this overlay",
            Self::Quit => "Exit the application",
        }
    }

    pub fn category(&self) -> &'static str {
        match self {
            Self::ExperimentNext | Self::ExperimentPrevious => "Experiments",

            Self::GroupNext
            | Self::GroupPrevious
            | Self::ScoreRank
            | Self::ScoreRankSecondBank => "Scoring",

            Self::RowNext
            | Self::RowPrevious
            | Self::ColumnNext
            | Self::ColumnPrevious
            | Self::ToggleInteresting => "Contact sheet",

            Self::ToggleHelp | Self::Quit => "General",
        }
    }

    /// Key hint shown in the help overlay.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::ExperimentNext => "↓",
            Self::ExperimentPrevious => "↑",
            Self::GroupNext => "Tab / Shift+↓",
            Self::GroupPrevious => "Shift+Tab / Shift+↑",
            Self::ScoreRank => "0-9",
            Self::ScoreRankSecondBank => "Shift+0-9",
            Self::RowNext => "↓",
            Self::RowPrevious => "↑",
            Self::ColumnNext => "→",
            Self::ColumnPrevious => "←",
            Self::ToggleInteresting => "Space",
            Self::ToggleHelp => "Shift+/",
            Self::Quit => "Esc",
        }
    }
}
