//! Session context: the one owner of catalog, cart and screen state for the
//! lifetime of a storefront run.
//!
//! Every mutation goes through `Session`, which keeps the stores consistent and
//! queues a [`SessionEvent`] for whatever is rendering. Renderers drain the
//! queue after each action and redraw from current state.

use tracing::{debug, info, trace, warn};

use storefront_engine::{
    CartStore, Catalog, CatalogStore, Navigator, OrderOutcome, Phase, place_order,
};
use storefront_providers::LoadError;
use storefront_types::{CategoryFilter, FilterCriteria, Product, ProductId, Screen, SessionEvent};

use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct Session {
    catalog: CatalogStore,
    cart: CartStore,
    navigator: Navigator,
    events: Vec<SessionEvent>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn phase(&self) -> &Phase {
        self.navigator.phase()
    }

    pub fn active_screen(&self) -> Option<Screen> {
        self.navigator.active()
    }

    // --- Loading -----------------------------------------------------------

    pub fn begin_load(&mut self, source: &str) {
        info!(source, "loading catalog");
        self.navigator.begin_loading();
        self.emit(SessionEvent::LoadStarted);
    }

    /// Apply the outcome of a catalog fetch. On failure the navigator moves to
    /// the failed phase, whose error message is shown instead of the grid; the
    /// catalog and cart stores keep what they held.
    pub fn complete_load(
        &mut self,
        result: std::result::Result<Catalog, LoadError>,
    ) -> std::result::Result<usize, LoadError> {
        match result {
            Ok(catalog) => {
                let count = catalog.len();
                info!(products = count, "catalog loaded");
                self.catalog.replace(catalog);
                let screen = self.navigator.loaded();
                self.emit(SessionEvent::Loaded { products: count });
                self.emit(SessionEvent::ScreenEntered { screen });
                Ok(count)
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                let message = err.user_message();
                self.navigator.failed(message.clone());
                self.emit(SessionEvent::LoadFailed { message });
                Err(err)
            }
        }
    }

    // --- Filtering ---------------------------------------------------------

    pub fn search(&mut self, text: impl Into<String>) {
        self.catalog.set_search(text);
        debug!(
            search = %self.catalog.criteria().search,
            visible = self.catalog.view().len(),
            "search changed"
        );
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.catalog.set_category(category);
        debug!(
            category = %self.catalog.criteria().category,
            visible = self.catalog.view().len(),
            "category changed"
        );
    }

    pub fn apply_filter(&mut self, criteria: FilterCriteria) {
        self.catalog.set_criteria(criteria);
    }

    // --- Navigation --------------------------------------------------------

    /// Switch screens. Product detail is only reachable for products in the
    /// current filtered listing.
    pub fn navigate(&mut self, screen: Screen) -> Result<()> {
        if let Screen::ProductDetail(id) = screen
            && self.catalog.visible(id).is_none()
        {
            return Err(Error::ProductNotVisible(id));
        }

        let transition = self.navigator.navigate(screen)?;
        debug!(from = %transition.from, to = %transition.to, "navigate");
        self.emit(SessionEvent::ScreenEntered { screen });
        Ok(())
    }

    pub fn view_product(&mut self, id: ProductId) -> Result<&Product> {
        self.navigate(Screen::ProductDetail(id))?;
        self.catalog.visible(id).ok_or(Error::ProductNotVisible(id))
    }

    /// Product currently shown on the detail screen
    pub fn selected_product(&self) -> Option<&Product> {
        match self.navigator.active()? {
            Screen::ProductDetail(id) => self.catalog.get(id),
            _ => None,
        }
    }

    // --- Cart --------------------------------------------------------------

    /// Returns the new quantity, or `None` if the id is not in the catalog.
    pub fn add_to_cart(&mut self, id: ProductId) -> Option<u32> {
        let Some(product) = self.catalog.get(id) else {
            warn!(product_id = %id, "add to cart ignored: unknown product");
            return None;
        };

        let title = product.title.clone();
        let quantity = self.cart.add_item(product);
        debug!(product_id = %id, quantity, "added to cart");

        self.emit(SessionEvent::AddedToCart {
            product_id: id,
            title,
            quantity,
        });
        self.emit_cart_changed();
        Some(quantity)
    }

    pub fn change_quantity(&mut self, id: ProductId, delta: i64) -> Option<u32> {
        if self.cart.get(id).is_none() {
            return None;
        }

        let remaining = self.cart.change_quantity(id, delta);
        debug!(product_id = %id, delta, ?remaining, "quantity changed");
        self.emit_cart_changed();
        remaining
    }

    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let removed = self.cart.remove_item(id);
        if removed {
            debug!(product_id = %id, "removed from cart");
            self.emit_cart_changed();
        }
        removed
    }

    // --- Orders ------------------------------------------------------------

    pub fn place_order(&mut self) -> Result<OrderOutcome> {
        let outcome = place_order(&mut self.cart, &mut self.navigator)?;

        match &outcome {
            OrderOutcome::Placed(confirmation) => {
                info!(
                    reference = %confirmation.reference,
                    items = confirmation.item_count,
                    total = %confirmation.total,
                    "order placed"
                );
                self.emit(SessionEvent::OrderPlaced {
                    confirmation: confirmation.clone(),
                });
                self.emit_cart_changed();
                self.emit(SessionEvent::ScreenEntered {
                    screen: Screen::Home,
                });
            }
            OrderOutcome::EmptyCart => {
                warn!("order attempted with an empty cart");
                self.emit(SessionEvent::EmptyCartWarning);
            }
        }

        Ok(outcome)
    }

    // --- Events ------------------------------------------------------------

    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn emit_cart_changed(&mut self) {
        let total_count = self.cart.total_count();
        self.emit(SessionEvent::CartChanged { total_count });
    }

    fn emit(&mut self, event: SessionEvent) {
        trace!(?event, "session event");
        self.events.push(event);
    }
}
