use std::collections::HashSet;
use std::fmt;

use storefront_types::{CategoryFilter, FilterCriteria, Product, ProductId};

use crate::filter::filter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateProduct(ProductId),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateProduct(id) => {
                write!(f, "Product id {} appears more than once", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Ordered product list with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }
}

/// Catalog plus the view derived from the current filter criteria.
///
/// The view is recomputed from the full catalog on every criteria change and
/// never edited in place.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    catalog: Catalog,
    criteria: FilterCriteria,
    view: Vec<Product>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly loaded catalog; criteria reset so the view is unfiltered.
    pub fn replace(&mut self, catalog: Catalog) {
        self.view = catalog.products().to_vec();
        self.catalog = catalog;
        self.criteria = FilterCriteria::default();
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.view = filter(self.catalog.products(), &criteria);
        self.criteria = criteria;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let criteria = FilterCriteria {
            search: search.into(),
            category: self.criteria.category.clone(),
        };
        self.set_criteria(criteria);
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        let criteria = FilterCriteria {
            search: self.criteria.search.clone(),
            category,
        };
        self.set_criteria(criteria);
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Product from the filtered view, if it is currently listed
    pub fn visible(&self, id: ProductId) -> Option<&Product> {
        self.view.iter().find(|p| p.id == id)
    }

    pub fn categories(&self) -> Vec<String> {
        self.catalog.categories()
    }
}
