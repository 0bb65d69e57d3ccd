use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::format_price;
use crate::presentation::view_models::ProductDetailViewModel;

pub struct ProductDetailView<'a> {
    model: &'a ProductDetailViewModel,
}

impl<'a> ProductDetailView<'a> {
    pub fn new(model: &'a ProductDetailViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for ProductDetailView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dim = Style::default().add_modifier(Modifier::DIM);

        let mut lines = vec![
            Line::from(Span::styled(
                self.model.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(
                    format_price(self.model.price),
                    Style::default().fg(Color::Green),
                ),
                Span::styled(format!("  {}", self.model.category), dim),
            ]),
            Line::raw(""),
            Line::raw(self.model.description.clone()),
            Line::raw(""),
        ];

        for image in &self.model.images {
            lines.push(Line::from(Span::styled(format!("🖼  {}", image), dim)));
        }

        if self.model.in_cart > 0 {
            lines.push(Line::raw(""));
            lines.push(Line::from(Span::styled(
                format!("{} in cart", self.model.in_cart),
                Style::default().fg(Color::Yellow),
            )));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!("Product #{}", self.model.id))
                    .borders(Borders::ALL),
            )
            .render(area, buf);
    }
}
