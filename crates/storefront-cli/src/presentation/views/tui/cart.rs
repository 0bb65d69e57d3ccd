use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::{format_price, truncate};
use crate::presentation::view_models::CartViewModel;

pub struct CartView<'a> {
    model: &'a CartViewModel,
}

impl<'a> CartView<'a> {
    pub fn new(model: &'a CartViewModel) -> Self {
        Self { model }
    }

    /// Build a List widget for stateful rendering
    pub fn build_list(self) -> List<'a> {
        let title = format!(
            "Cart: {} item(s), total {}",
            self.model.total_count,
            format_price(self.model.total)
        );
        let block = Block::default().title(title).borders(Borders::ALL);

        if self.model.lines.is_empty() {
            let item = ListItem::new(Line::from(Span::styled(
                "Your cart is empty",
                Style::default().add_modifier(Modifier::DIM),
            )));
            return List::new(vec![item]).block(block);
        }

        let items: Vec<ListItem> = self
            .model
            .lines
            .iter()
            .map(|line| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:>3} x ", line.quantity),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(format!("{:<38}", truncate(&line.title, 36))),
                    Span::styled(
                        format!("{:>10}", format_price(line.subtotal)),
                        Style::default().fg(Color::Green),
                    ),
                ]))
            })
            .collect();

        List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ")
    }
}
