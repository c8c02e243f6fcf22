//! Keyboard help overlay
//!
//! Centered panel listing the command catalog grouped by category, toggled
//! with Shift+/ (released).

use ratatui::{
    layout::{Alignment, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

use crate::command_id::CommandId;

/// Left padding for content.
const LEFT_PADDING: &str = "  ";

const CATEGORIES: [&str; 4] = ["Experiments", "Scoring", "Contact sheet", "General"];

pub fn render(area: Rect, f: &mut Frame) {
    // 60% width, 70% height, centered.
    let panel_width = (area.width * 60) / 100;
    let panel_height = (area.height * 70) / 100;
    let panel_area = Rect {
        x: area.x + (area.width - panel_width) / 2,
        y: area.y + (area.height - panel_height) / 2,
        width: panel_width,
        height: panel_height,
    };

    f.render_widget(Clear, panel_area);

    let footer_hint = Line::from(vec![" Shift+/ ".bold(), "close ".dim()]);
    let block = Block::default()
        .title("Keyboard shortcuts")
        .borders(Borders::ALL)
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint);

    let inner_height = block.inner(panel_area).height as usize;
    let visible: Vec<Line> = build_content_lines()
        .into_iter()
        .take(inner_height)
        .collect();

    f.render_widget(Paragraph::new(visible).block(block), panel_area);
}

fn build_content_lines() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for category in CATEGORIES {
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::raw(category).bold(),
        ]));
        lines.push(Line::from(vec![
            Span::raw(LEFT_PADDING),
            Span::raw("─".repeat(category.len())).dim(),
        ]));

        for command in CommandId::iter().filter(|c| c.category() == category) {
            lines.push(Line::from(vec![
                Span::raw(LEFT_PADDING),
                Span::raw(format!("{:<22}", command.hint())).bold(),
                Span::raw(command.description()).dim(),
            ]));
        }

        lines.push(Line::default());
    }

    lines
}
