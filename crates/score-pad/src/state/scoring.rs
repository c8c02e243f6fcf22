//! Experiment scoring state: navigator cursor, sheet layout, viewport.

use score_sheet::Sheet;

use super::viewport::Viewport;

/// Cursor state over the experiment sheet.
///
/// `experiment` ranges over `0..=N`, where `N` (one past the last
/// experiment) is the submit-focus sentinel. `groups` is re-derived from the
/// active experiment on every activation, and `group` indexes into it.
#[derive(Debug, Clone, Default)]
pub struct NavigatorState {
    pub experiment: usize,
    pub groups: Vec<String>,
    pub group: usize,
}

/// Rendered line offsets of the sheet, computed once at initialization.
///
/// Each experiment occupies a title line, one header line per group run,
/// one line per control, and a trailing blank line. The submit row is the
/// final line of the document. The scoring view renders exactly this shape,
/// so the offsets double as scroll targets.
#[derive(Debug, Clone, Default)]
pub struct SheetLayout {
    pub tops: Vec<u16>,
    pub total_height: u16,
}

impl SheetLayout {
    pub fn of(sheet: &Sheet) -> Self {
        let mut tops = Vec::with_capacity(sheet.len());
        let mut offset = 0u16;
        for experiment in &sheet.experiments {
            tops.push(offset);
            let runs = experiment.keyable_groups().len() as u16;
            let controls = experiment.controls.len() as u16;
            offset += 2 + runs + controls;
        }
        Self {
            tops,
            // the submit row
            total_height: offset + 1,
        }
    }
}

/// State for the scoring table. Present only when the document has at least
/// one experiment.
#[derive(Debug, Clone)]
pub struct ScoringState {
    pub sheet: Sheet,
    pub nav: NavigatorState,
    pub layout: SheetLayout,
    pub viewport: Viewport,
    /// Whether the submit control holds focus (the sentinel position).
    pub submit_focused: bool,
}

impl ScoringState {
    pub fn new(sheet: Sheet) -> Self {
        let layout = SheetLayout::of(&sheet);
        Self {
            sheet,
            nav: NavigatorState::default(),
            layout,
            viewport: Viewport::default(),
            submit_focused: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_sheet::{Control, Experiment};

    fn experiment(groups: &[&str]) -> Experiment {
        Experiment {
            id: "exp".to_string(),
            title: "Experiment".to_string(),
            controls: groups
                .iter()
                .map(|g| Control {
                    group: g.to_string(),
                    label: "score".to_string(),
                    checked: false,
                })
                .collect(),
            active: false,
        }
    }

    #[test]
    fn layout_offsets_accumulate_experiment_heights() {
        let sheet = Sheet {
            // 2 groups x 2 controls: 1 title + 2 headers + 4 controls + 1 blank = 8
            experiments: vec![
                experiment(&["A", "A", "B", "B"]),
                experiment(&["C"]),
            ],
            active_group: None,
        };
        let layout = SheetLayout::of(&sheet);

        assert_eq!(layout.tops, vec![0, 8]);
        // second experiment: 1 + 1 + 1 + 1 = 4, plus the submit row
        assert_eq!(layout.total_height, 8 + 4 + 1);
    }

    #[test]
    fn layout_counts_repeated_group_runs_separately() {
        let sheet = Sheet {
            experiments: vec![experiment(&["A", "B", "A"])],
            active_group: None,
        };
        let layout = SheetLayout::of(&sheet);
        // 1 title + 3 run headers + 3 controls + 1 blank + 1 submit
        assert_eq!(layout.total_height, 9);
    }
}
