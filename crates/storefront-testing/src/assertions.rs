//! Assertions over the `--format json` envelope:
//! `{"badge": {...}, "content": {...}, "suggestions": [...]}`

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Product ids in a `catalog list` result, in listing order.
pub fn product_ids(json: &Value) -> Result<Vec<u64>> {
    let products = json["content"]["products"]
        .as_array()
        .context("Expected 'content.products' array in JSON")?;

    products
        .iter()
        .enumerate()
        .map(|(i, product)| {
            product["id"]
                .as_u64()
                .with_context(|| format!("Product {} missing numeric id", i))
        })
        .collect()
}

pub fn assert_product_ids(json: &Value, expected: &[u64]) -> Result<()> {
    let ids = product_ids(json)?;
    if ids != expected {
        bail!("Expected product ids {:?}, got {:?}", expected, ids);
    }
    Ok(())
}

pub fn assert_badge_level(json: &Value, expected: &str) -> Result<()> {
    let level = json["badge"]["level"]
        .as_str()
        .context("Expected 'badge.level' in JSON")?;
    if level != expected {
        bail!("Expected badge level {}, got {}", expected, level);
    }
    Ok(())
}

/// Cart total in a `checkout` result, compared to the cent.
pub fn assert_cart_total(json: &Value, expected: f64) -> Result<()> {
    let total = json["content"]["cart"]["total"]
        .as_f64()
        .context("Expected 'content.cart.total' in JSON")?;
    if (total - expected).abs() > 0.005 {
        bail!("Expected cart total {:.2}, got {:.2}", expected, total);
    }
    Ok(())
}
