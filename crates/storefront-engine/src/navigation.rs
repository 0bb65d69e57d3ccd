use serde::Serialize;
use std::fmt;

use storefront_types::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No catalog yet (still loading, or the load failed)
    NotReady,
    IllegalTransition { from: Screen, to: Screen },
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationError::NotReady => write!(f, "Catalog is not loaded yet"),
            NavigationError::IllegalTransition { from, to } => {
                write!(f, "Cannot go from {} to {}", from, to)
            }
        }
    }
}

impl std::error::Error for NavigationError {}

/// Where the storefront is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Loading indicator instead of any screen
    Loading,
    /// Persistent error message instead of the product grid
    Failed { message: String },
    Ready { screen: Screen },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// Screen state machine.
///
/// | from     | to            |
/// |----------|---------------|
/// | any      | Home, Cart    |
/// | Home     | ProductDetail |
/// | Cart     | Checkout      |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    phase: Phase,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn active(&self) -> Option<Screen> {
        match self.phase {
            Phase::Ready { screen } => Some(screen),
            Phase::Loading | Phase::Failed { .. } => None,
        }
    }

    pub fn begin_loading(&mut self) {
        self.phase = Phase::Loading;
    }

    /// Catalog arrived: the storefront always starts on Home.
    pub fn loaded(&mut self) -> Screen {
        self.phase = Phase::Ready {
            screen: Screen::Home,
        };
        Screen::Home
    }

    pub fn failed(&mut self, message: impl Into<String>) {
        self.phase = Phase::Failed {
            message: message.into(),
        };
    }

    pub fn check(&self, to: Screen) -> Result<Transition, NavigationError> {
        let from = self.active().ok_or(NavigationError::NotReady)?;
        if is_legal(from, to) {
            Ok(Transition { from, to })
        } else {
            Err(NavigationError::IllegalTransition { from, to })
        }
    }

    pub fn navigate(&mut self, to: Screen) -> Result<Transition, NavigationError> {
        let transition = self.check(to)?;
        self.phase = Phase::Ready { screen: to };
        Ok(transition)
    }
}

fn is_legal(from: Screen, to: Screen) -> bool {
    match (from, to) {
        (_, Screen::Home) | (_, Screen::Cart) => true,
        (Screen::Home, Screen::ProductDetail(_)) => true,
        (Screen::Cart, Screen::Checkout) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::ProductId;

    fn ready() -> Navigator {
        let mut nav = Navigator::new();
        nav.loaded();
        nav
    }

    #[test]
    fn test_starts_loading_and_rejects_navigation() {
        let mut nav = Navigator::new();
        assert_eq!(nav.phase(), &Phase::Loading);
        assert_eq!(nav.navigate(Screen::Cart), Err(NavigationError::NotReady));
    }

    #[test]
    fn test_failed_load_is_not_ready() {
        let mut nav = Navigator::new();
        nav.failed("offline");
        assert_eq!(nav.navigate(Screen::Home), Err(NavigationError::NotReady));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_loaded_enters_home() {
        let nav = ready();
        assert_eq!(nav.active(), Some(Screen::Home));
    }

    #[test]
    fn test_shopping_cycle() {
        let mut nav = ready();
        let detail = Screen::ProductDetail(ProductId::new(1));

        nav.navigate(detail).unwrap();
        nav.navigate(Screen::Cart).unwrap();
        nav.navigate(Screen::Checkout).unwrap();
        nav.navigate(Screen::Cart).unwrap();
        nav.navigate(Screen::Checkout).unwrap();
        let t = nav.navigate(Screen::Home).unwrap();

        assert_eq!(t.from, Screen::Checkout);
        assert_eq!(nav.active(), Some(Screen::Home));
    }

    #[test]
    fn test_illegal_transitions() {
        let mut nav = ready();
        assert_eq!(
            nav.navigate(Screen::Checkout),
            Err(NavigationError::IllegalTransition {
                from: Screen::Home,
                to: Screen::Checkout,
            })
        );

        nav.navigate(Screen::Cart).unwrap();
        let detail = Screen::ProductDetail(ProductId::new(2));
        assert!(nav.navigate(detail).is_err());
        assert_eq!(nav.active(), Some(Screen::Cart));
    }

    #[test]
    fn test_detail_to_detail_goes_through_home() {
        let mut nav = ready();
        nav.navigate(Screen::ProductDetail(ProductId::new(1))).unwrap();
        assert!(nav.navigate(Screen::ProductDetail(ProductId::new(2))).is_err());

        nav.navigate(Screen::Home).unwrap();
        assert!(nav.navigate(Screen::ProductDetail(ProductId::new(2))).is_ok());
    }

    #[test]
    fn test_reload_returns_to_loading() {
        let mut nav = ready();
        nav.navigate(Screen::Cart).unwrap();
        nav.begin_loading();
        assert_eq!(nav.active(), None);
        assert_eq!(nav.loaded(), Screen::Home);
    }
}
