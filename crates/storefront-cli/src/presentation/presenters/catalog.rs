use storefront_engine::{Catalog, CatalogStore};
use storefront_types::Product;

use crate::presentation::view_models::{
    CategoryEntry, CategoryListViewModel, CommandResultViewModel, Guidance,
    ProductCardViewModel, ProductListViewModel, StatusBadge,
};

pub fn product_card(product: &Product) -> ProductCardViewModel {
    ProductCardViewModel {
        id: product.id.get(),
        title: product.title.clone(),
        price: product.price.to_f64(),
        category: product.category.clone(),
        image: product.primary_image().map(str::to_string),
    }
}

pub fn present_product_list(store: &CatalogStore) -> CommandResultViewModel<ProductListViewModel> {
    let criteria = store.criteria();
    let content = ProductListViewModel {
        search: criteria.search.clone(),
        category: criteria.category.as_str().to_string(),
        total_products: store.catalog().len(),
        products: store.view().iter().map(product_card).collect(),
    };

    let shown = content.products.len();
    let total = content.total_products;
    let result = CommandResultViewModel::new(content);

    if total == 0 {
        return result.with_badge(StatusBadge::warning("The catalog is empty"));
    }

    if shown == 0 {
        return result
            .with_badge(StatusBadge::warning("No products match the current filter"))
            .with_suggestion(
                Guidance::new("See which categories exist")
                    .with_command("storefront catalog categories"),
            );
    }

    let result = if criteria.is_identity() {
        result.with_badge(StatusBadge::info(format!("{} products", total)))
    } else {
        result.with_badge(StatusBadge::info(format!("{} of {} products", shown, total)))
    };

    result.with_suggestion(
        Guidance::new("Show details for a product").with_command("storefront product show <ID>"),
    )
}

pub fn present_categories(catalog: &Catalog) -> CommandResultViewModel<CategoryListViewModel> {
    let categories: Vec<CategoryEntry> = catalog
        .categories()
        .into_iter()
        .map(|label| {
            let product_count = catalog
                .products()
                .iter()
                .filter(|p| p.category == label)
                .count();
            CategoryEntry {
                label,
                product_count,
            }
        })
        .collect();

    let count = categories.len();
    CommandResultViewModel::new(CategoryListViewModel { categories })
        .with_badge(StatusBadge::info(format!("{} categories", count)))
        .with_suggestion(
            Guidance::new("Filter the listing by category")
                .with_command("storefront catalog list --category <LABEL>"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::StatusLevel;
    use storefront_types::{FilterCriteria, Price, ProductId};

    fn product(id: u64, title: &str, cents: u64, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: title.to_string(),
            price: Price::from_cents(cents),
            description: String::new(),
            images: vec![format!("https://img.example/{}.png", id)],
            category: category.to_string(),
        }
    }

    fn store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.replace(
            Catalog::new(vec![
                product(1, "Shirt", 1999, "clothing"),
                product(2, "Mug", 950, "home"),
                product(3, "Hoodie", 4500, "clothing"),
            ])
            .unwrap(),
        );
        store
    }

    #[test]
    fn test_product_card_uses_decimal_price_and_first_image() {
        let card = product_card(&product(1, "Shirt", 1999, "clothing"));
        assert_eq!(card.price, 19.99);
        assert_eq!(card.image.as_deref(), Some("https://img.example/1.png"));
    }

    #[test]
    fn test_filtered_list_reports_counts() {
        let mut store = store();
        store.set_criteria(FilterCriteria::new("", "clothing"));

        let result = present_product_list(&store);

        assert_eq!(result.content.products.len(), 2);
        assert_eq!(result.content.total_products, 3);
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Info);
        assert_eq!(badge.label, "2 of 3 products");
    }

    #[test]
    fn test_no_match_is_a_warning_with_tip() {
        let mut store = store();
        store.set_search("laptop");

        let result = present_product_list(&store);

        assert!(result.content.products.is_empty());
        assert_eq!(result.badge.unwrap().level, StatusLevel::Warning);
        assert_eq!(result.suggestions.len(), 1);
    }

    #[test]
    fn test_categories_keep_first_seen_order_with_counts() {
        let store = store();
        let result = present_categories(store.catalog());

        let labels: Vec<(&str, usize)> = result
            .content
            .categories
            .iter()
            .map(|c| (c.label.as_str(), c.product_count))
            .collect();
        assert_eq!(labels, vec![("clothing", 2), ("home", 1)]);
    }
}
