use storefront_types::{Price, Product, ProductId};

use crate::error::{LoadError, Result};
use crate::schema::{WireImages, WireProduct};

/// Parse a catalog response body into products.
///
/// All-or-nothing: one bad record rejects the whole catalog. Id uniqueness
/// is checked when the products become a `Catalog`.
pub fn normalize_catalog(body: &str) -> Result<Vec<Product>> {
    let records: Vec<WireProduct> = serde_json::from_str(body)?;
    records.into_iter().map(normalize_product).collect()
}

fn normalize_product(record: WireProduct) -> Result<Product> {
    let price = Price::from_decimal(record.price).map_err(|_| {
        LoadError::Malformed(format!(
            "product {} has invalid price {}",
            record.id, record.price
        ))
    })?;

    let images = record
        .images
        .or(record.image)
        .map(WireImages::into_urls)
        .unwrap_or_default()
        .into_iter()
        .filter(|url| !url.is_empty())
        .collect();

    Ok(Product {
        id: ProductId::new(record.id),
        title: record.title,
        price,
        description: record.description.unwrap_or_default(),
        images,
        category: record.category.into_label(),
    })
}
