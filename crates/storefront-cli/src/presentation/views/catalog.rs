use std::fmt;

use crate::presentation::formatters::{format_price, truncate};
use crate::presentation::view_models::{CategoryListViewModel, ProductListViewModel, ViewMode};

// --------------------------------------------------------
// Product List View
// --------------------------------------------------------

pub struct ProductListView<'a> {
    data: &'a ProductListViewModel,
    mode: ViewMode,
}

impl<'a> ProductListView<'a> {
    pub fn new(data: &'a ProductListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_filter(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let has_search = !self.data.search.is_empty();
        let has_category = self.data.category != storefront_types::ALL_CATEGORIES;
        if !has_search && !has_category {
            return Ok(());
        }

        write!(f, "Filter:")?;
        if has_search {
            write!(f, " search \"{}\"", self.data.search)?;
        }
        if has_category {
            write!(f, " category {}", self.data.category)?;
        }
        writeln!(f)?;
        writeln!(f)
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for product in &self.data.products {
            writeln!(f, "{}", product.id)?;
        }
        Ok(())
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.products.is_empty() {
            return writeln!(f, "No products");
        }

        for product in &self.data.products {
            writeln!(
                f,
                "{} {} {}",
                product.id,
                product.title,
                format_price(product.price)
            )?;
        }
        Ok(())
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_filter(f)?;

        if self.data.products.is_empty() {
            return writeln!(f, "No products found.");
        }

        writeln!(f, "{:<6} {:<40} {:<20} {:>10}", "ID", "TITLE", "CATEGORY", "PRICE")?;
        writeln!(f, "{}", "-".repeat(79))?;

        for product in &self.data.products {
            writeln!(
                f,
                "{:<6} {:<40} {:<20} {:>10}",
                product.id,
                truncate(&product.title, 40),
                truncate(&product.category, 20),
                format_price(product.price)
            )?;
        }

        Ok(())
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_filter(f)?;

        if self.data.products.is_empty() {
            return writeln!(f, "No products found.");
        }

        for (idx, product) in self.data.products.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            writeln!(f, "#{} {}", product.id, product.title)?;
            writeln!(f, "  price:    {}", format_price(product.price))?;
            writeln!(f, "  category: {}", product.category)?;
            writeln!(
                f,
                "  image:    {}",
                product.image.as_deref().unwrap_or("(none)")
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Showing {} of {} products",
            self.data.products.len(),
            self.data.total_products
        )
    }
}

impl<'a> fmt::Display for ProductListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Category List View
// --------------------------------------------------------

pub struct CategoryListView<'a> {
    data: &'a CategoryListViewModel,
    mode: ViewMode,
}

impl<'a> CategoryListView<'a> {
    pub fn new(data: &'a CategoryListViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for CategoryListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => {
                for category in &self.data.categories {
                    writeln!(f, "{}", category.label)?;
                }
            }
            ViewMode::Compact => {
                for category in &self.data.categories {
                    writeln!(f, "{} ({})", category.label, category.product_count)?;
                }
            }
            ViewMode::Standard | ViewMode::Verbose => {
                if self.data.categories.is_empty() {
                    return writeln!(f, "No categories.");
                }

                writeln!(f, "{:<30} {:>8}", "CATEGORY", "PRODUCTS")?;
                writeln!(f, "{}", "-".repeat(39))?;
                for category in &self.data.categories {
                    writeln!(f, "{:<30} {:>8}", category.label, category.product_count)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{CategoryEntry, ProductCardViewModel};

    fn listing() -> ProductListViewModel {
        ProductListViewModel {
            search: String::new(),
            category: "clothing".to_string(),
            total_products: 3,
            products: vec![
                ProductCardViewModel {
                    id: 1,
                    title: "Shirt".to_string(),
                    price: 19.99,
                    category: "clothing".to_string(),
                    image: None,
                },
                ProductCardViewModel {
                    id: 3,
                    title: "Hoodie".to_string(),
                    price: 45.0,
                    category: "clothing".to_string(),
                    image: None,
                },
            ],
        }
    }

    #[test]
    fn test_product_list_standard() {
        let data = listing();
        let out = ProductListView::new(&data, ViewMode::Standard).to_string();
        insta::assert_snapshot!(out, @r"
        Filter: category clothing

        ID     TITLE                                    CATEGORY                  PRICE
        -------------------------------------------------------------------------------
        1      Shirt                                    clothing                 $19.99
        3      Hoodie                                   clothing                 $45.00
        ");
    }

    #[test]
    fn test_product_list_minimal_is_ids_only() {
        let data = listing();
        let out = ProductListView::new(&data, ViewMode::Minimal).to_string();
        assert_eq!(out, "1\n3\n");
    }

    #[test]
    fn test_category_list_compact() {
        let data = CategoryListViewModel {
            categories: vec![
                CategoryEntry {
                    label: "clothing".to_string(),
                    product_count: 2,
                },
                CategoryEntry {
                    label: "home".to_string(),
                    product_count: 1,
                },
            ],
        };
        let out = CategoryListView::new(&data, ViewMode::Compact).to_string();
        assert_eq!(out, "clothing (2)\nhome (1)\n");
    }
}
