//! Cart Component
//!
//! Line selection and quantity editing on the cart screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::CartViewModel;
use crate::presentation::views::tui::CartView;

use super::{clamp_selection, select_next, select_previous};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    ChangeQuantity(u64, i64),
    Remove(u64),
    Checkout,
}

pub struct CartComponent {
    state: ListState,
}

impl CartComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent, data: &CartViewModel) -> Option<CartAction> {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                select_next(&mut self.state, data.lines.len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                select_previous(&mut self.state);
                None
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self
                .selected_id(data)
                .map(|id| CartAction::ChangeQuantity(id, 1)),
            KeyCode::Char('-') => self
                .selected_id(data)
                .map(|id| CartAction::ChangeQuantity(id, -1)),
            KeyCode::Char('d') | KeyCode::Delete => self.selected_id(data).map(CartAction::Remove),
            KeyCode::Char('o') | KeyCode::Enter => Some(CartAction::Checkout),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &CartViewModel) {
        clamp_selection(&mut self.state, data.lines.len());
        let list = CartView::new(data).build_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }

    fn selected_id(&self, data: &CartViewModel) -> Option<u64> {
        let index = self.state.selected().unwrap_or(0);
        data.lines.get(index).map(|line| line.product_id)
    }
}

impl Default for CartComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::CartLineViewModel;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn cart() -> CartViewModel {
        let line = |product_id: u64, quantity: u32| CartLineViewModel {
            product_id,
            title: format!("Item {}", product_id),
            unit_price: 2.0,
            quantity,
            subtotal: 2.0 * quantity as f64,
            image: None,
        };
        CartViewModel {
            lines: vec![line(3, 1), line(5, 2)],
            total_count: 3,
            total: 6.0,
        }
    }

    #[test]
    fn test_quantity_keys_target_selected_line() {
        let mut component = CartComponent::new();
        let data = cart();

        assert_eq!(
            component.handle_input(key(KeyCode::Char('+')), &data),
            Some(CartAction::ChangeQuantity(3, 1))
        );
        component.handle_input(key(KeyCode::Down), &data);
        assert_eq!(
            component.handle_input(key(KeyCode::Char('-')), &data),
            Some(CartAction::ChangeQuantity(5, -1))
        );
        assert_eq!(
            component.handle_input(key(KeyCode::Delete), &data),
            Some(CartAction::Remove(5))
        );
    }

    #[test]
    fn test_empty_cart_still_allows_checkout() {
        let mut component = CartComponent::new();
        let data = CartViewModel::default();

        assert_eq!(component.handle_input(key(KeyCode::Char('d')), &data), None);
        assert_eq!(
            component.handle_input(key(KeyCode::Enter), &data),
            Some(CartAction::Checkout)
        );
    }
}
