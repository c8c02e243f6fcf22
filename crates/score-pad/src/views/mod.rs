//! View rendering
//!
//! Function-based rendering over the current state: the active screen, a
//! one-line footer with key hints, and the help overlay on top when shown.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, Mode};

pub mod help_view;
pub mod plate_view;
pub mod scoring_view;

/// Render the entire application UI.
pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [main_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    match state.mode() {
        Mode::Scoring => {
            if let Some(scoring) = &state.scoring {
                scoring_view::render(scoring, main_area, f);
            }
        }
        Mode::Plate => {
            if let Some(plate) = &state.plate {
                plate_view::render(plate, main_area, f);
            }
        }
        Mode::Idle => {
            let message = Paragraph::new("No document loaded").dim();
            f.render_widget(message, main_area);
        }
    }

    f.render_widget(footer_line(), footer_area);

    if state.ui.show_help {
        help_view::render(area, f);
    }
}

fn footer_line() -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        " Shift+/ ".bold(),
        "help  ".dim(),
        "Esc ".bold(),
        "quit".dim(),
    ]))
}

/// Clamp a scroll request to the rendered content, browser-style: a request
/// past the end shows the document tail.
pub(crate) fn effective_scroll(requested: usize, total_lines: usize, height: usize) -> usize {
    requested.min(total_lines.saturating_sub(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_requests_clamp_to_content() {
        assert_eq!(effective_scroll(0, 30, 10), 0);
        assert_eq!(effective_scroll(15, 30, 10), 15);
        assert_eq!(effective_scroll(99, 30, 10), 20);
        assert_eq!(effective_scroll(5, 3, 10), 0);
    }
}
