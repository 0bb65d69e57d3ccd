//! Stateful TUI components
//!
//! Each component owns its ListState, interprets key presses for its screen
//! and reports what the user asked for as an action. The renderer turns
//! actions into signals for the handler; components never touch the session.

pub mod cart;
pub mod home;

pub use cart::{CartAction, CartComponent};
pub use home::{HomeAction, HomeComponent};

use ratatui::widgets::ListState;

/// Keep the selection inside `len` items, selecting the first one when
/// nothing is selected yet.
pub(crate) fn clamp_selection(state: &mut ListState, len: usize) {
    if len == 0 {
        state.select(None);
        return;
    }
    match state.selected() {
        Some(i) if i >= len => state.select(Some(len - 1)),
        Some(_) => {}
        None => state.select(Some(0)),
    }
}

pub(crate) fn select_next(state: &mut ListState, len: usize) {
    if len == 0 {
        return;
    }
    let next = match state.selected() {
        Some(i) if i + 1 < len => i + 1,
        Some(i) => i,
        None => 0,
    };
    state.select(Some(next));
}

pub(crate) fn select_previous(state: &mut ListState) {
    let prev = match state.selected() {
        Some(i) => i.saturating_sub(1),
        None => 0,
    };
    state.select(Some(prev));
}
