use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

/// Status message on the left, key hints for the current screen on the right
pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
    hints: &'a [(&'a str, &'a str)],
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel, hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { model, hints }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let color = status_level_to_color(self.model.level);
        Paragraph::new(Line::from(Span::styled(
            self.model.message.as_str(),
            Style::default().fg(color),
        )))
        .render(chunks[0], buf);

        let mut spans = Vec::with_capacity(self.hints.len() * 2);
        for (key, label) in self.hints {
            spans.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(format!("{} ", label)));
        }
        Paragraph::new(Line::from(spans)).render(chunks[1], buf);
    }
}
