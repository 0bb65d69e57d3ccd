use storefront_runtime::{Phase, Session};
use storefront_types::{ALL_CATEGORIES, Screen, SessionEvent};

use super::{cart_view, product_card, product_detail};
use crate::presentation::formatters::format_price;
use crate::presentation::view_models::{
    BrowseBody, BrowseScreenViewModel, HeaderViewModel, HomeViewModel, StatusBarViewModel,
    StatusLevel,
};

/// Snapshot the session for the interactive browser.
pub fn build_screen_view_model(
    session: &Session,
    source: &str,
    status: &StatusBarViewModel,
) -> BrowseScreenViewModel {
    let header = HeaderViewModel {
        source: source.to_string(),
        cart_count: session.cart().total_count(),
    };

    let body = match session.phase() {
        Phase::Loading => BrowseBody::Loading,
        Phase::Failed { message } => BrowseBody::Failed {
            message: message.clone(),
        },
        Phase::Ready { screen } => match screen {
            Screen::Home => BrowseBody::Home(home_view(session)),
            Screen::ProductDetail(_) => match session.selected_product() {
                Some(product) => BrowseBody::ProductDetail(product_detail(product, session.cart())),
                None => BrowseBody::Home(home_view(session)),
            },
            Screen::Cart => BrowseBody::Cart(cart_view(session.cart())),
            Screen::Checkout => BrowseBody::Checkout(cart_view(session.cart())),
        },
    };

    BrowseScreenViewModel {
        header,
        body,
        status: status.clone(),
    }
}

fn home_view(session: &Session) -> HomeViewModel {
    let store = session.catalog();
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    categories.extend(store.categories());

    HomeViewModel {
        search: store.criteria().search.clone(),
        category: store.criteria().category.as_str().to_string(),
        categories,
        products: store.view().iter().map(product_card).collect(),
        total_products: store.catalog().len(),
    }
}

/// Status line for the most recent user-facing signal in `events`, if any.
pub fn status_from_events(events: &[SessionEvent]) -> Option<StatusBarViewModel> {
    events
        .iter()
        .filter(|event| event.is_user_signal())
        .filter_map(signal_status)
        .next_back()
}

fn signal_status(event: &SessionEvent) -> Option<StatusBarViewModel> {
    let status = match event {
        SessionEvent::LoadStarted => StatusBarViewModel::new(StatusLevel::Info, "Loading products..."),
        SessionEvent::LoadFailed { message } => {
            StatusBarViewModel::new(StatusLevel::Error, message.clone())
        }
        SessionEvent::AddedToCart {
            title, quantity, ..
        } => StatusBarViewModel::new(
            StatusLevel::Success,
            format!("{} added to cart (x{})", title, quantity),
        ),
        SessionEvent::EmptyCartWarning => StatusBarViewModel::new(
            StatusLevel::Warning,
            "Your cart is empty. Add products before placing an order.",
        ),
        SessionEvent::OrderPlaced { confirmation } => StatusBarViewModel::new(
            StatusLevel::Success,
            format!(
                "Order {} placed: {} item(s), {}",
                confirmation.short_reference(),
                confirmation.item_count,
                format_price(confirmation.total.to_f64())
            ),
        ),
        SessionEvent::Loaded { .. }
        | SessionEvent::ScreenEntered { .. }
        | SessionEvent::CartChanged { .. } => return None,
    };
    Some(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_engine::Catalog;
    use storefront_types::{Price, Product, ProductId};

    fn loaded_session() -> Session {
        let mut session = Session::new();
        session.begin_load("test");
        let catalog = Catalog::new(vec![
            Product {
                id: ProductId::new(1),
                title: "Shirt".to_string(),
                price: Price::from_cents(1999),
                description: "Cotton".to_string(),
                images: vec![],
                category: "clothing".to_string(),
            },
            Product {
                id: ProductId::new(2),
                title: "Mug".to_string(),
                price: Price::from_cents(950),
                description: "Ceramic".to_string(),
                images: vec![],
                category: "home".to_string(),
            },
        ])
        .unwrap();
        session.complete_load(Ok(catalog)).unwrap();
        session
    }

    #[test]
    fn test_loading_session_shows_loading_body() {
        let session = Session::new();
        let vm = build_screen_view_model(&session, "test", &StatusBarViewModel::default());
        assert_eq!(vm.body, BrowseBody::Loading);
        assert_eq!(vm.header.cart_count, 0);
    }

    #[test]
    fn test_home_lists_all_category_first() {
        let session = loaded_session();
        let vm = build_screen_view_model(&session, "test", &StatusBarViewModel::default());

        let BrowseBody::Home(home) = vm.body else {
            panic!("expected home screen");
        };
        assert_eq!(home.categories, vec!["all", "clothing", "home"]);
        assert_eq!(home.products.len(), 2);
        assert_eq!(home.category, "all");
    }

    #[test]
    fn test_detail_body_and_cart_badge() {
        let mut session = loaded_session();
        session.add_to_cart(ProductId::new(2));
        session.view_product(ProductId::new(2)).unwrap();

        let vm = build_screen_view_model(&session, "test", &StatusBarViewModel::default());

        assert_eq!(vm.header.cart_count, 1);
        let BrowseBody::ProductDetail(detail) = vm.body else {
            panic!("expected product detail");
        };
        assert_eq!(detail.title, "Mug");
        assert_eq!(detail.in_cart, 1);
    }

    #[test]
    fn test_status_uses_latest_signal() {
        let mut session = loaded_session();
        session.drain_events();
        session.add_to_cart(ProductId::new(1));
        session.add_to_cart(ProductId::new(2));

        let status = status_from_events(&session.drain_events()).unwrap();

        assert_eq!(status.level, StatusLevel::Success);
        assert_eq!(status.message, "Mug added to cart (x1)");
    }

    #[test]
    fn test_navigation_alone_produces_no_status() {
        let mut session = loaded_session();
        session.drain_events();
        session.navigate(Screen::Cart).unwrap();

        assert_eq!(status_from_events(&session.drain_events()), None);
    }
}
