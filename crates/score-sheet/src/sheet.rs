//! Experiment sheet model
//!
//! The sheet is a read-only structural snapshot of the rendered scoring page:
//! an ordered list of experiments, each holding its scoring controls in
//! document order. Presentation marks (`active`, `active_group`) are the only
//! mutable fields besides the control toggles themselves.

use serde::{Deserialize, Serialize};

/// An interactive scoring control (checkbox-style toggle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    /// Id of the keyable group container this control sits in.
    pub group: String,
    /// Display label.
    pub label: String,
    /// Current toggle state.
    #[serde(default)]
    pub checked: bool,
}

impl Control {
    /// Invoke the control's primary action, equivalent to a user click.
    pub fn trigger(&mut self) {
        self.checked = !self.checked;
    }
}

/// One scrollable experiment with its controls in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experiment {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub controls: Vec<Control>,
    /// Presentation mark; at most one experiment carries it at a time.
    #[serde(skip)]
    pub active: bool,
}

impl Experiment {
    /// Derive the keyable group sequence by scanning the controls in document
    /// order and collecting parent ids, with a group boundary detected only
    /// on change of id. A repeated id after an intervening different id is a
    /// new occurrence, not a duplicate.
    pub fn keyable_groups(&self) -> Vec<String> {
        let mut groups: Vec<String> = Vec::new();
        for control in &self.controls {
            if groups.last().map(String::as_str) != Some(control.group.as_str()) {
                groups.push(control.group.clone());
            }
        }
        groups
    }

    /// Indices of all controls tagged with `group`, in document order.
    ///
    /// Lookup is by id across the whole experiment, so two occurrences of the
    /// same group id in the derived sequence address the same controls.
    pub fn control_indices(&self, group: &str) -> Vec<usize> {
        self.controls
            .iter()
            .enumerate()
            .filter(|(_, c)| c.group == group)
            .map(|(i, _)| i)
            .collect()
    }
}

/// The ordered experiment collection the scoring UI navigates over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub experiments: Vec<Experiment>,
    /// Id of the keyable group carrying the active mark, if any.
    /// Document-level because group ids are unique across the page.
    #[serde(skip)]
    pub active_group: Option<String>,
}

impl Sheet {
    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    /// Move the active mark to the experiment at `index`, unmarking all
    /// others. An out-of-range index just clears every mark.
    pub fn mark_active_experiment(&mut self, index: usize) {
        for (i, experiment) in self.experiments.iter_mut().enumerate() {
            experiment.active = i == index;
        }
    }

    /// Move the active-group mark, replacing whichever group held it.
    pub fn mark_active_group(&mut self, group: Option<&str>) {
        self.active_group = group.map(str::to_owned);
    }
}
