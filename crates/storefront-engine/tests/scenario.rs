//! Walkthrough of the two-product storefront: filter, cart, checkout, order.

use storefront_engine::{
    CartStore, Catalog, CatalogStore, Navigator, OrderOutcome, place_order,
};
use storefront_types::{CategoryFilter, Price, Product, ProductId, Screen};

fn catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: ProductId::new(1),
            title: "Shirt".to_string(),
            price: Price::from_decimal(19.99).unwrap(),
            description: "Cotton".to_string(),
            images: vec!["https://img.example/shirt.png".to_string()],
            category: "clothing".to_string(),
        },
        Product {
            id: ProductId::new(2),
            title: "Mug".to_string(),
            price: Price::from_decimal(9.50).unwrap(),
            description: "Ceramic".to_string(),
            images: vec![],
            category: "home".to_string(),
        },
    ])
    .unwrap()
}

#[test]
fn test_search_then_cart_round_trip() {
    let mut store = CatalogStore::new();
    store.replace(catalog());

    store.set_search("sh");
    let ids: Vec<u64> = store.view().iter().map(|p| p.id.get()).collect();
    assert_eq!(ids, vec![1]);

    let shirt = store.visible(ProductId::new(1)).unwrap().clone();
    let mut cart = CartStore::new();
    cart.add_item(&shirt);
    cart.add_item(&shirt);
    cart.change_quantity(shirt.id, -1);

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].product_id, ProductId::new(1));
    assert_eq!(cart.lines()[0].quantity, 1);
    assert_eq!(cart.total_price().to_string(), "19.99");

    cart.remove_item(shirt.id);
    assert!(cart.is_empty());
    assert_eq!(cart.total_count(), 0);
}

#[test]
fn test_full_checkout_flow() {
    let mut store = CatalogStore::new();
    let mut cart = CartStore::new();
    let mut nav = Navigator::new();

    store.replace(catalog());
    assert_eq!(nav.loaded(), Screen::Home);

    store.set_category(CategoryFilter::from("home"));
    let mug = store.view()[0].clone();
    nav.navigate(Screen::ProductDetail(mug.id)).unwrap();
    cart.add_item(&mug);
    cart.add_item(&mug);
    nav.navigate(Screen::Cart).unwrap();
    nav.navigate(Screen::Checkout).unwrap();

    match place_order(&mut cart, &mut nav).unwrap() {
        OrderOutcome::Placed(confirmation) => {
            assert_eq!(confirmation.item_count, 2);
            assert_eq!(confirmation.total.to_string(), "19.00");
        }
        OrderOutcome::EmptyCart => panic!("cart should not be empty"),
    }
    assert!(cart.is_empty());
    assert_eq!(nav.active(), Some(Screen::Home));

    // Second attempt: nothing to order
    assert_eq!(
        place_order(&mut cart, &mut nav).unwrap(),
        OrderOutcome::EmptyCart
    );
    assert_eq!(nav.active(), Some(Screen::Home));
}
