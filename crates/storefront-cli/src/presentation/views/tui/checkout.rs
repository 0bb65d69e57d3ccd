use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::{format_price, truncate};
use crate::presentation::view_models::CartViewModel;

/// Order summary shown before placing the order
pub struct CheckoutSummaryView<'a> {
    model: &'a CartViewModel,
}

impl<'a> CheckoutSummaryView<'a> {
    pub fn new(model: &'a CartViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for CheckoutSummaryView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines: Vec<Line> = self
            .model
            .lines
            .iter()
            .map(|line| {
                Line::raw(format!(
                    "{:>3} x {:<38}{:>10}",
                    line.quantity,
                    truncate(&line.title, 36),
                    format_price(line.subtotal)
                ))
            })
            .collect();

        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing to order yet",
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format_price(self.model.total),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        Paragraph::new(lines)
            .block(Block::default().title("Checkout").borders(Borders::ALL))
            .render(area, buf);
    }
}
