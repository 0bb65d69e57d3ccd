//! Home screen: search box, category tabs and the product grid.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Widget},
};

use crate::presentation::formatters::{format_price, truncate};
use crate::presentation::view_models::HomeViewModel;

/// Search input and category tabs
pub struct FilterBarView<'a> {
    model: &'a HomeViewModel,
    /// Text being typed, shown instead of the applied search while editing
    editing: Option<&'a str>,
}

impl<'a> FilterBarView<'a> {
    pub fn new(model: &'a HomeViewModel, editing: Option<&'a str>) -> Self {
        Self { model, editing }
    }
}

impl<'a> Widget for FilterBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Length(3)]).split(area);

        let (text, style) = match self.editing {
            Some(buffer) => (format!("{}▏", buffer), Style::default().fg(Color::Yellow)),
            None if self.model.search.is_empty() => (
                "press / to search".to_string(),
                Style::default().add_modifier(Modifier::DIM),
            ),
            None => (self.model.search.clone(), Style::default()),
        };
        Paragraph::new(Span::styled(text, style))
            .block(Block::default().title("Search").borders(Borders::ALL))
            .render(chunks[0], buf);

        let selected = self
            .model
            .categories
            .iter()
            .position(|label| *label == self.model.category)
            .unwrap_or(0);
        Tabs::new(self.model.categories.iter().map(|label| label.as_str()))
            .select(selected)
            .block(Block::default().title("Category").borders(Borders::ALL))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .render(chunks[1], buf);
    }
}

/// Filtered product listing
pub struct ProductListView<'a> {
    model: &'a HomeViewModel,
}

impl<'a> ProductListView<'a> {
    pub fn new(model: &'a HomeViewModel) -> Self {
        Self { model }
    }

    /// Build a List widget for stateful rendering
    pub fn build_list(self) -> List<'a> {
        let title = format!(
            "Products ({}/{})",
            self.model.products.len(),
            self.model.total_products
        );
        let block = Block::default().title(title).borders(Borders::ALL);

        if self.model.products.is_empty() {
            let item = ListItem::new(Line::from(Span::styled(
                "No products match the current filter",
                Style::default().add_modifier(Modifier::DIM),
            )));
            return List::new(vec![item]).block(block);
        }

        let items: Vec<ListItem> = self
            .model
            .products
            .iter()
            .map(|card| {
                ListItem::new(Line::from(vec![
                    Span::raw(format!("{:<42}", truncate(&card.title, 40))),
                    Span::styled(
                        format!("{:>10}  ", format_price(card.price)),
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        card.category.clone(),
                        Style::default().add_modifier(Modifier::DIM),
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
