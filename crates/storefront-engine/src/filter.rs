use storefront_types::{CategoryFilter, FilterCriteria, Product};

/// True when `product` satisfies both the category and the search predicate.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    let category_ok = match &criteria.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(label) => product.category == *label,
    };

    category_ok
        && (criteria.search.is_empty()
            || product
                .title
                .to_lowercase()
                .contains(&criteria.search.to_lowercase()))
}

/// Subsequence of `products` matching `criteria`, in catalog order.
pub fn filter(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    products
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect()
}
