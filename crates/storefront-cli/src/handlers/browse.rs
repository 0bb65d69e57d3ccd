//! Browse Handler for the interactive storefront
//!
//! The handler is the controller between the session and the TUI:
//! - Owns the Session (catalog, cart, screen)
//! - Runs catalog loads on a worker thread so the UI never blocks
//! - Applies renderer signals to the session
//! - Rebuilds the screen ViewModel and sends it to the renderer

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use tracing::{debug, error};

use storefront_engine::Catalog;
use storefront_providers::{CatalogSource, ConfiguredSource, LoadError};
use storefront_runtime::{CatalogLoader, Session};

use crate::context::ExecutionContext;
use crate::presentation::presenters::{build_screen_view_model, status_from_events};
use crate::presentation::renderers::{RendererSignal, TuiEvent, TuiRenderer};
use crate::presentation::view_models::{StatusBarViewModel, StatusLevel};

type LoadResult = std::result::Result<Catalog, LoadError>;

struct BrowseHandler {
    session: Session,
    loader: CatalogLoader<ConfiguredSource>,
    /// Shown in the header
    source: String,
    status: StatusBarViewModel,
    /// Set while a load is in flight
    pending: Option<Receiver<LoadResult>>,
    tx: Sender<TuiEvent>,
}

impl BrowseHandler {
    fn new(loader: CatalogLoader<ConfiguredSource>, tx: Sender<TuiEvent>) -> Self {
        let source = loader.source().describe();
        Self {
            session: Session::new(),
            loader,
            source,
            status: StatusBarViewModel::default(),
            pending: None,
            tx,
        }
    }

    /// Kick off a catalog fetch. A reload while one is running is ignored.
    fn start_load(&mut self) {
        if self.pending.is_some() {
            debug!("reload ignored: load already in flight");
            return;
        }

        self.session.begin_load(&self.source);

        let (tx, rx) = mpsc::channel();
        let loader = self.loader.clone();
        thread::spawn(move || {
            let result = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime.block_on(loader.fetch()),
                Err(err) => Err(LoadError::Io(err)),
            };
            // Receiver is gone if the user quit mid-load
            let _ = tx.send(result);
        });

        self.pending = Some(rx);
        self.refresh();
    }

    /// Apply a finished load, if there is one.
    fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => Err(LoadError::Io(std::io::Error::other(
                "catalog loader stopped without a result",
            ))),
        };
        self.pending = None;

        if let Ok(count) = self.session.complete_load(result) {
            self.status =
                StatusBarViewModel::new(StatusLevel::Info, format!("{} products loaded", count));
        }
        self.refresh();
    }

    /// Returns false once the renderer asked to stop.
    fn apply(&mut self, signal: RendererSignal) -> bool {
        debug!(?signal, "renderer signal");

        match signal {
            RendererSignal::Quit => return false,
            RendererSignal::Reload => {
                self.start_load();
                return true;
            }
            RendererSignal::Search(text) => self.session.search(text),
            RendererSignal::SelectCategory(category) => self.session.select_category(category),
            RendererSignal::OpenProduct(id) => {
                if let Err(err) = self.session.view_product(id) {
                    self.warn(err.to_string());
                }
            }
            RendererSignal::AddToCart(id) => {
                if self.session.add_to_cart(id).is_none() {
                    self.warn(format!("Product {} is no longer available", id));
                }
            }
            RendererSignal::ChangeQuantity(id, delta) => {
                self.session.change_quantity(id, delta);
            }
            RendererSignal::RemoveItem(id) => {
                self.session.remove_item(id);
            }
            RendererSignal::Navigate(screen) => {
                if let Err(err) = self.session.navigate(screen) {
                    debug!(error = %err, "navigation refused");
                }
            }
            RendererSignal::PlaceOrder => {
                if let Err(err) = self.session.place_order() {
                    self.warn(err.to_string());
                }
            }
        }

        self.refresh();
        true
    }

    fn warn(&mut self, message: String) {
        self.status = StatusBarViewModel::new(StatusLevel::Warning, message);
    }

    /// Fold pending session events into the status line and redraw.
    fn refresh(&mut self) {
        let events = self.session.drain_events();
        if let Some(status) = status_from_events(&events) {
            self.status = status;
        }
        self.send_update();
    }

    fn send_update(&self) {
        let screen_vm = build_screen_view_model(&self.session, &self.source, &self.status);
        // Renderer may have quit already
        let _ = self.tx.send(TuiEvent::Update(Box::new(screen_vm)));
    }
}

/// Main entry point for the interactive storefront
pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("browse needs an interactive terminal; use `storefront catalog list` instead");
    }

    let loader = ctx.loader()?;

    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler

    let tui_handle = thread::spawn(move || {
        let renderer = TuiRenderer::new().with_signal_sender(signal_tx);
        renderer.run(event_rx)
    });

    run_handler(loader, event_tx, signal_rx);

    match tui_handle.join() {
        Ok(result) => result,
        Err(e) => {
            error!("TUI thread panicked: {:?}", e);
            bail!("terminal UI stopped unexpectedly")
        }
    }
}

fn run_handler(
    loader: CatalogLoader<ConfiguredSource>,
    tx: Sender<TuiEvent>,
    signal_rx: Receiver<RendererSignal>,
) {
    let mut handler = BrowseHandler::new(loader, tx);
    handler.start_load();

    let poll_timeout = Duration::from_millis(50);

    loop {
        match signal_rx.recv_timeout(poll_timeout) {
            Ok(signal) => {
                if !handler.apply(signal) {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        handler.poll_load();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::Instant;
    use storefront_providers::create_source;
    use storefront_runtime::LoadPolicy;
    use storefront_types::{ProductId, Screen};
    use tempfile::TempDir;

    use crate::presentation::view_models::{BrowseBody, BrowseScreenViewModel};

    const CATALOG: &str = r#"[
        {"id": 1, "title": "Shirt", "price": 19.99, "description": "Cotton", "image": "https://img/1.png", "category": "clothing"},
        {"id": 2, "title": "Mug", "price": 9.5, "description": "Ceramic", "image": "https://img/2.png", "category": "home"}
    ]"#;

    fn handler_for(body: Option<&str>) -> (BrowseHandler, Receiver<TuiEvent>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("catalog.json");
        if let Some(body) = body {
            fs::write(&path, body).unwrap();
        }
        let source = create_source(&path.display().to_string()).unwrap();
        let (tx, rx) = mpsc::channel();
        let handler = BrowseHandler::new(CatalogLoader::new(source, LoadPolicy::default()), tx);
        (handler, rx, temp_dir)
    }

    fn wait_for_load(handler: &mut BrowseHandler) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while handler.pending.is_some() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
            handler.poll_load();
        }
        assert!(handler.pending.is_none(), "load did not finish");
    }

    fn last_screen(rx: &Receiver<TuiEvent>) -> BrowseScreenViewModel {
        rx.try_iter()
            .filter_map(|event| match event {
                TuiEvent::Update(screen) => Some(*screen),
                TuiEvent::Error(_) => None,
            })
            .last()
            .expect("no screen update sent")
    }

    #[test]
    fn test_load_shows_loading_then_home() {
        let (mut handler, rx, _dir) = handler_for(Some(CATALOG));

        handler.start_load();
        assert_eq!(last_screen(&rx).body, BrowseBody::Loading);

        wait_for_load(&mut handler);
        let screen = last_screen(&rx);
        assert!(matches!(screen.body, BrowseBody::Home(ref home) if home.products.len() == 2));
        assert_eq!(screen.status.message, "2 products loaded");
    }

    #[test]
    fn test_missing_file_shows_failure() {
        let (mut handler, rx, _dir) = handler_for(None);

        handler.start_load();
        wait_for_load(&mut handler);

        let screen = last_screen(&rx);
        assert!(matches!(screen.body, BrowseBody::Failed { .. }));
        assert_eq!(screen.status.level, StatusLevel::Error);
    }

    #[test]
    fn test_signals_drive_cart_and_order() {
        let (mut handler, rx, _dir) = handler_for(Some(CATALOG));
        handler.start_load();
        wait_for_load(&mut handler);

        assert!(handler.apply(RendererSignal::AddToCart(ProductId::new(2))));
        let screen = last_screen(&rx);
        assert_eq!(screen.header.cart_count, 1);
        assert_eq!(screen.status.message, "Mug added to cart (x1)");

        handler.apply(RendererSignal::Navigate(Screen::Cart));
        handler.apply(RendererSignal::Navigate(Screen::Checkout));
        handler.apply(RendererSignal::PlaceOrder);

        let screen = last_screen(&rx);
        assert_eq!(screen.header.cart_count, 0);
        assert!(matches!(screen.body, BrowseBody::Home(_)));
        assert_eq!(screen.status.level, StatusLevel::Success);

        assert!(!handler.apply(RendererSignal::Quit));
    }

    #[test]
    fn test_hidden_product_cannot_be_opened() {
        let (mut handler, rx, _dir) = handler_for(Some(CATALOG));
        handler.start_load();
        wait_for_load(&mut handler);

        handler.apply(RendererSignal::Search("mug".to_string()));
        handler.apply(RendererSignal::OpenProduct(ProductId::new(1)));

        let screen = last_screen(&rx);
        assert!(matches!(screen.body, BrowseBody::Home(_)));
        assert_eq!(screen.status.level, StatusLevel::Warning);
    }
}
