//! Home Component
//!
//! Product list selection, search editing and category cycling.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    widgets::ListState,
};

use crate::presentation::view_models::HomeViewModel;
use crate::presentation::views::tui::{FilterBarView, ProductListView};

use super::{clamp_selection, select_next, select_previous};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeAction {
    /// Search text changed (sent on every keystroke)
    Search(String),
    /// Category label, "all" included
    SelectCategory(String),
    Open(u64),
    AddToCart(u64),
}

pub struct HomeComponent {
    state: ListState,
    /// Search text while the search box has focus
    editing: Option<String>,
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            state: ListState::default(),
            editing: None,
        }
    }

    /// While editing, every key belongs to the search box.
    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn handle_input(&mut self, key: KeyEvent, data: &HomeViewModel) -> Option<HomeAction> {
        if let Some(buffer) = self.editing.as_mut() {
            return match key.code {
                KeyCode::Char(c) => {
                    buffer.push(c);
                    Some(HomeAction::Search(buffer.clone()))
                }
                KeyCode::Backspace => {
                    buffer.pop();
                    Some(HomeAction::Search(buffer.clone()))
                }
                KeyCode::Enter | KeyCode::Esc => {
                    self.editing = None;
                    None
                }
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('/') => {
                self.editing = Some(data.search.clone());
                None
            }
            KeyCode::Tab | KeyCode::Right => self.cycle_category(data, 1),
            KeyCode::BackTab | KeyCode::Left => self.cycle_category(data, -1),
            KeyCode::Char('j') | KeyCode::Down => {
                select_next(&mut self.state, data.products.len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                select_previous(&mut self.state);
                None
            }
            KeyCode::Enter => self.selected_id(data).map(HomeAction::Open),
            KeyCode::Char('a') => self.selected_id(data).map(HomeAction::AddToCart),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &HomeViewModel) {
        clamp_selection(&mut self.state, data.products.len());

        let chunks = Layout::vertical([Constraint::Length(6), Constraint::Min(3)]).split(area);

        f.render_widget(FilterBarView::new(data, self.editing.as_deref()), chunks[0]);

        let list = ProductListView::new(data).build_list();
        f.render_stateful_widget(list, chunks[1], &mut self.state);
    }

    fn selected_id(&self, data: &HomeViewModel) -> Option<u64> {
        let index = self.state.selected().unwrap_or(0);
        data.products.get(index).map(|card| card.id)
    }

    fn cycle_category(&mut self, data: &HomeViewModel, step: isize) -> Option<HomeAction> {
        let count = data.categories.len();
        if count == 0 {
            return None;
        }

        let current = data
            .categories
            .iter()
            .position(|label| *label == data.category)
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(count as isize) as usize;

        self.state.select(Some(0));
        Some(HomeAction::SelectCategory(data.categories[next].clone()))
    }
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}
