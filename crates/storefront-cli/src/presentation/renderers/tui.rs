//! TUI Renderer for the interactive storefront
//!
//! Receives `BrowseScreenViewModel` snapshots from the browse handler and
//! draws them with Ratatui.
//!
//! ## Design:
//! - Renderer owns UI state (list selections, search focus) through components
//! - Renderer does NOT own data: every user intent goes back to the handler
//!   as a `RendererSignal` and comes back as a fresh snapshot
//! - Terminal is restored on every exit path of `run`

use std::io;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
};

use storefront_types::{CategoryFilter, ProductId, Screen};

use crate::presentation::view_models::{BrowseBody, BrowseScreenViewModel, StatusLevel};
use crate::presentation::views::tui::{
    CartAction, CartComponent, CheckoutSummaryView, HeaderView, HomeAction, HomeComponent,
    MessageView, ProductDetailView, StatusBarView,
};

/// TUI events sent from handler to renderer
pub enum TuiEvent {
    /// Update screen with new ViewModel
    Update(Box<BrowseScreenViewModel>),
    /// Fatal error occurred
    Error(String),
}

/// Signals sent from renderer back to handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererSignal {
    Quit,
    Reload,
    Search(String),
    SelectCategory(CategoryFilter),
    OpenProduct(ProductId),
    AddToCart(ProductId),
    ChangeQuantity(ProductId, i64),
    RemoveItem(ProductId),
    Navigate(Screen),
    PlaceOrder,
}

pub struct TuiRenderer {
    current_screen: Option<BrowseScreenViewModel>,
    error_message: Option<String>,
    should_quit: bool,
    home: HomeComponent,
    cart: CartComponent,
    signal_tx: Option<Sender<RendererSignal>>,
}

impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            current_screen: None,
            error_message: None,
            should_quit: false,
            home: HomeComponent::new(),
            cart: CartComponent::new(),
            signal_tx: None,
        }
    }

    pub fn with_signal_sender(mut self, tx: Sender<RendererSignal>) -> Self {
        self.signal_tx = Some(tx);
        self
    }

    pub fn run(mut self, rx: Receiver<TuiEvent>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal, rx);

        // The handler waits on this to stop, whatever ended the loop
        self.send(RendererSignal::Quit);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<TuiEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            loop {
                match rx.try_recv() {
                    Ok(TuiEvent::Update(screen_vm)) => {
                        self.current_screen = Some(*screen_vm);
                        self.error_message = None;
                    }
                    Ok(TuiEvent::Error(msg)) => {
                        self.error_message = Some(msg);
                    }
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn send(&self, signal: RendererSignal) {
        if let Some(tx) = &self.signal_tx {
            // Handler may already be gone
            let _ = tx.send(signal);
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // A focused search box swallows everything, 'q' included
        if let Some(BrowseScreenViewModel {
            body: BrowseBody::Home(home),
            ..
        }) = &self.current_screen
            && self.home.is_editing()
        {
            if let Some(action) = self.home.handle_input(key, home) {
                self.send(home_signal(action));
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('r') => {
                self.send(RendererSignal::Reload);
                return;
            }
            KeyCode::Char('c') => {
                self.send(RendererSignal::Navigate(Screen::Cart));
                return;
            }
            KeyCode::Char('h') => {
                self.send(RendererSignal::Navigate(Screen::Home));
                return;
            }
            _ => {}
        }

        let Some(screen) = &self.current_screen else {
            return;
        };

        match &screen.body {
            BrowseBody::Loading | BrowseBody::Failed { .. } => {}
            BrowseBody::Home(home) => {
                if let Some(action) = self.home.handle_input(key, home) {
                    self.send(home_signal(action));
                }
            }
            BrowseBody::ProductDetail(product) => match key.code {
                KeyCode::Char('a') => {
                    self.send(RendererSignal::AddToCart(ProductId::new(product.id)))
                }
                KeyCode::Esc => self.send(RendererSignal::Navigate(Screen::Home)),
                _ => {}
            },
            BrowseBody::Cart(cart) => {
                if key.code == KeyCode::Esc {
                    self.send(RendererSignal::Navigate(Screen::Home));
                } else if let Some(action) = self.cart.handle_input(key, cart) {
                    self.send(cart_signal(action));
                }
            }
            BrowseBody::Checkout(_) => match key.code {
                KeyCode::Char('p') | KeyCode::Enter => self.send(RendererSignal::PlaceOrder),
                KeyCode::Esc => self.send(RendererSignal::Navigate(Screen::Cart)),
                _ => {}
            },
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let size = f.area();

        if let Some(error_msg) = &self.error_message {
            let view = MessageView::new("Error", error_msg, StatusLevel::Error);
            f.render_widget(view, size);
            return;
        }

        let Some(screen) = &self.current_screen else {
            let view = MessageView::new("Storefront", "Starting...", StatusLevel::Info);
            f.render_widget(view, size);
            return;
        };

        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(6),    // Screen body
            Constraint::Length(3), // Status bar
        ])
        .split(size);

        f.render_widget(HeaderView::new(&screen.header), chunks[0]);
        render_body(f, chunks[1], &screen.body, &mut self.home, &mut self.cart);

        let hints = key_hints(&screen.body, self.home.is_editing());
        f.render_widget(StatusBarView::new(&screen.status, hints), chunks[2]);
    }
}

impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn render_body(
    f: &mut Frame,
    area: Rect,
    body: &BrowseBody,
    home: &mut HomeComponent,
    cart: &mut CartComponent,
) {
    match body {
        BrowseBody::Loading => {
            let view = MessageView::new("Loading", "Loading products...", StatusLevel::Info);
            f.render_widget(view, area);
        }
        BrowseBody::Failed { message } => {
            let view = MessageView::new("Unavailable", message, StatusLevel::Error);
            f.render_widget(view, area);
        }
        BrowseBody::Home(data) => home.render(f, area, data),
        BrowseBody::ProductDetail(product) => f.render_widget(ProductDetailView::new(product), area),
        BrowseBody::Cart(data) => cart.render(f, area, data),
        BrowseBody::Checkout(data) => f.render_widget(CheckoutSummaryView::new(data), area),
    }
}

fn home_signal(action: HomeAction) -> RendererSignal {
    match action {
        HomeAction::Search(text) => RendererSignal::Search(text),
        HomeAction::SelectCategory(label) => {
            RendererSignal::SelectCategory(CategoryFilter::from(label.as_str()))
        }
        HomeAction::Open(id) => RendererSignal::OpenProduct(ProductId::new(id)),
        HomeAction::AddToCart(id) => RendererSignal::AddToCart(ProductId::new(id)),
    }
}

fn cart_signal(action: CartAction) -> RendererSignal {
    match action {
        CartAction::ChangeQuantity(id, delta) => {
            RendererSignal::ChangeQuantity(ProductId::new(id), delta)
        }
        CartAction::Remove(id) => RendererSignal::RemoveItem(ProductId::new(id)),
        CartAction::Checkout => RendererSignal::Navigate(Screen::Checkout),
    }
}

fn key_hints(body: &BrowseBody, editing: bool) -> &'static [(&'static str, &'static str)] {
    if editing {
        return &[("enter", "done"), ("esc", "done")];
    }
    match body {
        BrowseBody::Loading | BrowseBody::Failed { .. } => &[("r", "eload"), ("q", "uit")],
        BrowseBody::Home(_) => &[
            ("/", "search"),
            ("tab", "category"),
            ("enter", "open"),
            ("a", "dd"),
            ("c", "art"),
            ("q", "uit"),
        ],
        BrowseBody::ProductDetail(_) => &[("a", "dd"), ("c", "art"), ("esc", "back"), ("q", "uit")],
        BrowseBody::Cart(_) => &[
            ("+/-", "qty"),
            ("d", "elete"),
            ("o", "rder"),
            ("esc", "back"),
        ],
        BrowseBody::Checkout(_) => &[("p", "lace order"), ("esc", "cart"), ("q", "uit")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{
        CartViewModel, HeaderViewModel, HomeViewModel, ProductCardViewModel, StatusBarViewModel,
    };
    use crossterm::event::KeyModifiers;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen(body: BrowseBody) -> BrowseScreenViewModel {
        BrowseScreenViewModel {
            header: HeaderViewModel {
                source: "test".to_string(),
                cart_count: 0,
            },
            body,
            status: StatusBarViewModel::default(),
        }
    }

    fn home() -> BrowseBody {
        BrowseBody::Home(HomeViewModel {
            search: String::new(),
            category: "all".to_string(),
            categories: vec!["all".into(), "home".into()],
            products: vec![ProductCardViewModel {
                id: 7,
                title: "Lamp".to_string(),
                price: 25.0,
                category: "home".to_string(),
                image: None,
            }],
            total_products: 1,
        })
    }

    fn renderer_with(body: BrowseBody) -> (TuiRenderer, mpsc::Receiver<RendererSignal>) {
        let (tx, rx) = mpsc::channel();
        let mut renderer = TuiRenderer::new().with_signal_sender(tx);
        renderer.current_screen = Some(screen(body));
        (renderer, rx)
    }

    #[test]
    fn test_home_keys_become_signals() {
        let (mut renderer, rx) = renderer_with(home());

        renderer.handle_key_event(key(KeyCode::Enter));
        renderer.handle_key_event(key(KeyCode::Tab));
        renderer.handle_key_event(key(KeyCode::Char('c')));

        let signals: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            signals,
            vec![
                RendererSignal::OpenProduct(ProductId::new(7)),
                RendererSignal::SelectCategory(CategoryFilter::from("home")),
                RendererSignal::Navigate(Screen::Cart),
            ]
        );
    }

    #[test]
    fn test_search_focus_keeps_q_from_quitting() {
        let (mut renderer, rx) = renderer_with(home());

        renderer.handle_key_event(key(KeyCode::Char('/')));
        renderer.handle_key_event(key(KeyCode::Char('q')));

        assert!(!renderer.should_quit);
        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![RendererSignal::Search("q".to_string())]
        );

        renderer.handle_key_event(key(KeyCode::Esc));
        renderer.handle_key_event(key(KeyCode::Char('q')));
        assert!(renderer.should_quit);
    }

    #[test]
    fn test_escape_walks_back_from_checkout() {
        let (mut renderer, rx) = renderer_with(BrowseBody::Checkout(CartViewModel::default()));

        renderer.handle_key_event(key(KeyCode::Esc));
        renderer.handle_key_event(key(KeyCode::Char('p')));

        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![
                RendererSignal::Navigate(Screen::Cart),
                RendererSignal::PlaceOrder,
            ]
        );
    }

    #[test]
    fn test_failed_screen_only_reloads() {
        let (mut renderer, rx) = renderer_with(BrowseBody::Failed {
            message: "offline".to_string(),
        });

        renderer.handle_key_event(key(KeyCode::Enter));
        renderer.handle_key_event(key(KeyCode::Char('r')));

        assert_eq!(rx.try_iter().collect::<Vec<_>>(), vec![RendererSignal::Reload]);
    }
}
