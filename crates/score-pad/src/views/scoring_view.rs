//! Scoring sheet view
//!
//! Renders the experiment list in exactly the line shape `SheetLayout`
//! describes (title, group headers, controls, blank separator, submit row),
//! so the layout offsets double as scroll targets.

use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use score_sheet::Experiment;

use crate::state::ScoringState;
use crate::views::effective_scroll;

pub fn render(state: &ScoringState, area: Rect, f: &mut Frame) {
    let mut lines: Vec<Line> = Vec::with_capacity(state.layout.total_height as usize);

    for experiment in &state.sheet.experiments {
        push_experiment_lines(&mut lines, experiment, state.sheet.active_group.as_deref());
    }
    lines.push(submit_line(state.submit_focused));

    let scroll = effective_scroll(
        state.viewport.scroll_top as usize,
        lines.len(),
        area.height as usize,
    );
    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll)
        .take(area.height as usize)
        .collect();

    f.render_widget(Paragraph::new(visible), area);
}

fn push_experiment_lines<'a>(
    lines: &mut Vec<Line<'a>>,
    experiment: &'a Experiment,
    active_group: Option<&str>,
) {
    if experiment.active {
        lines.push(Line::from(vec![
            "▸ ".yellow(),
            Span::raw(experiment.title.as_str()).bold(),
        ]));
    } else {
        lines.push(Line::from(format!("  {}", experiment.title)));
    }

    // One header per adjacency run of controls, then the run's controls.
    let mut current_run: Option<&str> = None;
    for (i, control) in experiment.controls.iter().enumerate() {
        if current_run != Some(control.group.as_str()) {
            current_run = Some(control.group.as_str());
            let header = format!("  {}", control.group);
            if active_group == Some(control.group.as_str()) {
                lines.push(Line::from(header).bold().reversed());
            } else {
                lines.push(Line::from(header).dim());
            }
        }

        // Rank within the whole group id, spanning repeated runs.
        let rank = experiment.controls[..i]
            .iter()
            .filter(|c| c.group == control.group)
            .count();
        let mark = if control.checked { "[x]" } else { "[ ]" };
        lines.push(Line::from(format!("    {rank} {mark} {}", control.label)));
    }

    lines.push(Line::default());
}

fn submit_line(focused: bool) -> Line<'static> {
    if focused {
        Line::from("  [ Submit ]").bold().reversed()
    } else {
        Line::from("  [ Submit ]").dim()
    }
}
