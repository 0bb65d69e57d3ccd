use storefront_engine::{CartStore, OrderOutcome};
use storefront_types::OrderConfirmation;

use crate::presentation::view_models::{
    CartLineViewModel, CartViewModel, CheckoutViewModel, CommandResultViewModel, Guidance,
    OrderViewModel, StatusBadge,
};

pub fn cart_view(cart: &CartStore) -> CartViewModel {
    CartViewModel {
        lines: cart
            .lines()
            .iter()
            .map(|line| CartLineViewModel {
                product_id: line.product_id.get(),
                title: line.title.clone(),
                unit_price: line.unit_price.to_f64(),
                quantity: line.quantity,
                subtotal: line.subtotal().to_f64(),
                image: line.image.clone(),
            })
            .collect(),
        total_count: cart.total_count(),
        total: cart.total_price().to_f64(),
    }
}

fn order_view(confirmation: &OrderConfirmation) -> OrderViewModel {
    OrderViewModel {
        reference: confirmation.reference.to_string(),
        placed_at: confirmation.placed_at,
        item_count: confirmation.item_count,
        total: confirmation.total.to_f64(),
    }
}

/// `cart` is the cart as it stood before the order attempt; `outcome` is
/// `None` when no order was requested.
pub fn present_checkout(
    cart: CartViewModel,
    skipped: Vec<u64>,
    outcome: Option<&OrderOutcome>,
) -> CommandResultViewModel<CheckoutViewModel> {
    let order = match outcome {
        Some(OrderOutcome::Placed(confirmation)) => Some(order_view(confirmation)),
        _ => None,
    };

    let badge = match outcome {
        Some(OrderOutcome::Placed(confirmation)) => StatusBadge::success(format!(
            "Order {} placed: {} item(s)",
            confirmation.short_reference(),
            confirmation.item_count
        )),
        Some(OrderOutcome::EmptyCart) => {
            StatusBadge::warning("Your cart is empty. Add products before placing an order.")
        }
        None if !skipped.is_empty() => StatusBadge::warning(format!(
            "Skipped {} unknown product id(s)",
            skipped.len()
        )),
        None if cart.lines.is_empty() => StatusBadge::info("Cart is empty"),
        None => StatusBadge::info(format!("{} item(s) in cart", cart.total_count)),
    };

    let mut suggestions = Vec::new();
    match outcome {
        None if !cart.lines.is_empty() => suggestions.push(
            Guidance::new("Place the order").with_command("storefront checkout --add <ID> --place"),
        ),
        Some(OrderOutcome::EmptyCart) | None => suggestions.push(
            Guidance::new("List products to find ids").with_command("storefront catalog list"),
        ),
        Some(OrderOutcome::Placed(_)) => {}
    }

    let mut result = CommandResultViewModel::new(CheckoutViewModel {
        cart,
        skipped,
        order,
    })
    .with_badge(badge);
    for guide in suggestions {
        result = result.with_suggestion(guide);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::StatusLevel;
    use storefront_types::{Price, Product, ProductId};

    fn cart() -> CartStore {
        let shirt = Product {
            id: ProductId::new(1),
            title: "Shirt".to_string(),
            price: Price::from_cents(1999),
            description: String::new(),
            images: vec![],
            category: "clothing".to_string(),
        };
        let mut cart = CartStore::new();
        cart.add_item(&shirt);
        cart.add_item(&shirt);
        cart
    }

    #[test]
    fn test_cart_view_totals_are_exact() {
        let vm = cart_view(&cart());
        assert_eq!(vm.total_count, 2);
        assert_eq!(vm.total, 39.98);
        assert_eq!(vm.lines[0].subtotal, 39.98);
    }

    #[test]
    fn test_placed_order_is_success() {
        let cart = cart();
        let confirmation = OrderConfirmation::new(cart.total_count(), cart.total_price());
        let outcome = OrderOutcome::Placed(confirmation.clone());

        let result = present_checkout(cart_view(&cart), vec![], Some(&outcome));

        assert_eq!(result.badge.unwrap().level, StatusLevel::Success);
        let order = result.content.order.unwrap();
        assert_eq!(order.reference, confirmation.reference.to_string());
        assert_eq!(order.total, 39.98);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_empty_cart_order_is_warning() {
        let result = present_checkout(
            CartViewModel::default(),
            vec![],
            Some(&OrderOutcome::EmptyCart),
        );

        assert_eq!(result.badge.unwrap().level, StatusLevel::Warning);
        assert!(result.content.order.is_none());
    }

    #[test]
    fn test_skipped_ids_warn_without_order() {
        let result = present_checkout(cart_view(&cart()), vec![42], None);
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Warning);
        assert!(badge.label.contains("1 unknown"));
    }
}
