//! Plate grid view
//!
//! Renders the contact sheet as a column-number header plus one line per
//! row. The active row is emphasized and the scaled column within it is
//! rendered reversed, mirroring the single-active marking invariant.

use ratatui::{
    layout::Rect,
    style::Stylize,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::PlateState;
use crate::views::effective_scroll;

pub fn render(state: &PlateState, area: Rect, f: &mut Frame) {
    let plate = &state.plate;
    let mut lines: Vec<Line> = Vec::with_capacity(plate.rows() + 1);

    let mut header = String::from("   ");
    for col in 0..plate.cols() {
        header.push_str(&format!(" {:02}", col + 1));
    }
    lines.push(Line::from(header).dim());

    for row in 0..plate.rows() {
        let active_row = plate.active_row == Some(row);
        let mut spans: Vec<Span> = Vec::with_capacity(plate.cols() + 1);

        let letter = format!(" {} ", (b'A' + row as u8) as char);
        spans.push(if active_row {
            Span::raw(letter).bold().yellow()
        } else {
            Span::raw(letter).dim()
        });

        for col in 0..plate.cols() {
            let interesting = plate.well(row, col).is_some_and(|w| w.interesting);
            let symbol = if interesting { " ◼ " } else { " · " };
            let span = Span::raw(symbol);
            let span = if active_row && plate.scaled_col == Some(col) {
                span.bold().reversed()
            } else if active_row {
                span.bold()
            } else {
                span
            };
            spans.push(span);
        }

        lines.push(Line::from(spans));
    }

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
