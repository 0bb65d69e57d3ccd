use storefront_engine::CartStore;
use storefront_types::Product;

use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ProductDetailViewModel,
};

pub fn product_detail(product: &Product, cart: &CartStore) -> ProductDetailViewModel {
    ProductDetailViewModel {
        id: product.id.get(),
        title: product.title.clone(),
        price: product.price.to_f64(),
        category: product.category.clone(),
        description: product.description.clone(),
        images: product.images.clone(),
        in_cart: cart.get(product.id).map(|line| line.quantity).unwrap_or(0),
    }
}

pub fn present_product(
    product: &Product,
    cart: &CartStore,
) -> CommandResultViewModel<ProductDetailViewModel> {
    let id = product.id;
    CommandResultViewModel::new(product_detail(product, cart)).with_suggestion(
        Guidance::new("Add it to a cart and check out")
            .with_command(format!("storefront checkout --add {} --place", id)),
    )
}
