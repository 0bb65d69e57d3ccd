use storefront_types::{OrderConfirmation, Screen};

use crate::cart::CartStore;
use crate::navigation::{NavigationError, Navigator};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Cart was cleared and the navigator is back on Home
    Placed(OrderConfirmation),
    /// Nothing changed
    EmptyCart,
}

/// Place an order for the current cart contents.
///
/// No order record is kept anywhere: success means the cart is emptied and
/// the storefront returns to Home.
pub fn place_order(
    cart: &mut CartStore,
    navigator: &mut Navigator,
) -> Result<OrderOutcome, NavigationError> {
    navigator.check(Screen::Home)?;

    if cart.is_empty() {
        return Ok(OrderOutcome::EmptyCart);
    }

    let confirmation = OrderConfirmation::new(cart.total_count(), cart.total_price());
    cart.clear();
    navigator.navigate(Screen::Home)?;

    Ok(OrderOutcome::Placed(confirmation))
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_types::{Price, Product, ProductId};

    fn shirt() -> Product {
        Product {
            id: ProductId::new(1),
            title: "Shirt".to_string(),
            price: Price::from_cents(1999),
            description: String::new(),
            images: vec![],
            category: "clothing".to_string(),
        }
    }

    fn at_checkout() -> Navigator {
        let mut nav = Navigator::new();
        nav.loaded();
        nav.navigate(Screen::Cart).unwrap();
        nav.navigate(Screen::Checkout).unwrap();
        nav
    }

    #[test]
    fn test_place_order_clears_cart_and_goes_home() {
        let mut cart = CartStore::new();
        cart.add_item(&shirt());
        cart.add_item(&shirt());
        let mut nav = at_checkout();

        let outcome = place_order(&mut cart, &mut nav).unwrap();

        let OrderOutcome::Placed(confirmation) = outcome else {
            panic!("expected order to be placed");
        };
        assert_eq!(confirmation.item_count, 2);
        assert_eq!(confirmation.total, Price::from_cents(3998));
        assert!(cart.is_empty());
        assert_eq!(nav.active(), Some(Screen::Home));
    }

    #[test]
    fn test_empty_cart_changes_nothing() {
        let mut cart = CartStore::new();
        let mut nav = at_checkout();

        let outcome = place_order(&mut cart, &mut nav).unwrap();

        assert_eq!(outcome, OrderOutcome::EmptyCart);
        assert_eq!(nav.active(), Some(Screen::Checkout));
    }

    #[test]
    fn test_not_ready_is_an_error() {
        let mut cart = CartStore::new();
        cart.add_item(&shirt());
        let mut nav = Navigator::new();

        assert_eq!(
            place_order(&mut cart, &mut nav),
            Err(NavigationError::NotReady)
        );
        assert_eq!(cart.total_count(), 1);
    }
}
