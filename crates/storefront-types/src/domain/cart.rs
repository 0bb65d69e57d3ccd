use serde::{Deserialize, Serialize};

use super::product::{Price, Product, ProductId};

/// One product in the cart.
///
/// Display fields are copied from the product when the line is created, so a
/// line renders the same even if the catalog is later replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Always >= 1; a line whose quantity would drop to zero is removed instead
    pub quantity: u32,
    pub title: String,
    pub unit_price: Price,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl CartLine {
    /// New line with quantity 1.
    pub fn snapshot(product: &Product) -> Self {
        Self {
            product_id: product.id,
            quantity: 1,
            title: product.title.clone(),
            unit_price: product.price,
            image: product.primary_image().map(str::to_string),
        }
    }

    pub fn subtotal(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}
