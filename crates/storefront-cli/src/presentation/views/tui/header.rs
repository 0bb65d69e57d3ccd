use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::HeaderViewModel;

/// Title, catalog source and the cart badge
pub struct HeaderView<'a> {
    model: &'a HeaderViewModel,
}

impl<'a> HeaderView<'a> {
    pub fn new(model: &'a HeaderViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for HeaderView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(16)]).split(inner);

        let title = Line::from(vec![
            Span::styled(
                "Storefront",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", self.model.source),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        let badge_style = if self.model.cart_count > 0 {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };
        let badge = Line::from(Span::styled(
            format!("🛒 Cart ({})", self.model.cart_count),
            badge_style,
        ));
        Paragraph::new(badge)
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
