use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::StatusLevel;

use super::status_level_to_color;

/// Full-body message: loading placeholder or load failure
pub struct MessageView<'a> {
    title: &'a str,
    message: &'a str,
    level: StatusLevel,
}

impl<'a> MessageView<'a> {
    pub fn new(title: &'a str, message: &'a str, level: StatusLevel) -> Self {
        Self {
            title,
            message,
            level,
        }
    }
}

impl<'a> Widget for MessageView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            self.message,
            Style::default().fg(status_level_to_color(self.level)),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().title(self.title).borders(Borders::ALL))
        .render(area, buf);
    }
}
