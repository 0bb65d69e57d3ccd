use storefront_types::{CartLine, Price, Product, ProductId};

/// Shopping cart: at most one line per product, every quantity >= 1.
///
/// None of the operations fail. Unknown ids are ignored and quantities that
/// would reach zero remove the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`; returns the line's new quantity.
    pub fn add_item(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }

        self.lines.push(CartLine::snapshot(product));
        1
    }

    /// Adjust a line by `delta`. Returns the remaining quantity, or `None`
    /// when the line is absent or was removed.
    pub fn change_quantity(&mut self, id: ProductId, delta: i64) -> Option<u32> {
        let index = self.lines.iter().position(|l| l.product_id == id)?;
        let next = i64::from(self.lines[index].quantity).saturating_add(delta);

        if next <= 0 {
            self.lines.remove(index);
            return None;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[index].quantity = quantity;
        Some(quantity)
    }

    /// Returns true if a line was removed
    pub fn remove_item(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != id);
        self.lines.len() != before
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of all quantities (the cart badge)
    pub fn total_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Exact sum of unit price x quantity, rounded once to the cent
    pub fn total_price(&self) -> Price {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .sum::<Price>()
            .rounded()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == id)
    }
}
