use std::fmt;

use crate::presentation::formatters::{format_price, truncate};
use crate::presentation::view_models::{CheckoutViewModel, ViewMode};

pub struct CheckoutView<'a> {
    data: &'a CheckoutViewModel,
    mode: ViewMode,
}

impl<'a> CheckoutView<'a> {
    pub fn new(data: &'a CheckoutViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.order {
            Some(order) => writeln!(f, "{}", order.reference),
            None => {
                for line in &self.data.cart.lines {
                    writeln!(f, "{} {}", line.product_id, line.quantity)?;
                }
                Ok(())
            }
        }
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in &self.data.cart.lines {
            writeln!(
                f,
                "{} x {} {}",
                line.quantity,
                line.title,
                format_price(line.subtotal)
            )?;
        }
        writeln!(f, "Total: {}", format_price(self.data.cart.total))?;
        if let Some(order) = &self.data.order {
            writeln!(f, "Order: {}", order.reference)?;
        }
        Ok(())
    }

    fn render_table(&self, f: &mut fmt::Formatter, with_ids: bool) -> fmt::Result {
        let cart = &self.data.cart;

        if !self.data.skipped.is_empty() {
            let ids: Vec<String> = self.data.skipped.iter().map(u64::to_string).collect();
            writeln!(f, "Skipped unknown ids: {}", ids.join(", "))?;
            writeln!(f)?;
        }

        if cart.lines.is_empty() {
            writeln!(f, "Cart is empty.")?;
        } else {
            if with_ids {
                write!(f, "{:<6} ", "ID")?;
            }
            writeln!(f, "{:>4} {:<36} {:>10} {:>10}", "QTY", "ITEM", "UNIT", "SUBTOTAL")?;
            writeln!(f, "{}", "-".repeat(if with_ids { 70 } else { 63 }))?;

            for line in &cart.lines {
                if with_ids {
                    write!(f, "{:<6} ", line.product_id)?;
                }
                writeln!(
                    f,
                    "{:>4} {:<36} {:>10} {:>10}",
                    line.quantity,
                    truncate(&line.title, 36),
                    format_price(line.unit_price),
                    format_price(line.subtotal)
                )?;
            }

            writeln!(f)?;
            writeln!(
                f,
                "Total: {} item(s), {}",
                cart.total_count,
                format_price(cart.total)
            )?;
        }

        if let Some(order) = &self.data.order {
            writeln!(f)?;
            writeln!(f, "Order reference: {}", order.reference)?;
            if self.mode == ViewMode::Verbose {
                writeln!(f, "Placed at:       {}", order.placed_at.to_rfc3339())?;
            }
        }

        Ok(())
    }
}

impl<'a> fmt::Display for CheckoutView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_table(f, false),
            ViewMode::Verbose => self.render_table(f, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{CartLineViewModel, CartViewModel};

    fn checkout() -> CheckoutViewModel {
        CheckoutViewModel {
            cart: CartViewModel {
                lines: vec![
                    CartLineViewModel {
                        product_id: 1,
                        title: "Shirt".to_string(),
                        unit_price: 19.99,
                        quantity: 2,
                        subtotal: 39.98,
                        image: None,
                    },
                    CartLineViewModel {
                        product_id: 2,
                        title: "Mug".to_string(),
                        unit_price: 9.5,
                        quantity: 1,
                        subtotal: 9.5,
                        image: None,
                    },
                ],
                total_count: 3,
                total: 49.48,
            },
            skipped: vec![42],
            order: None,
        }
    }

    #[test]
    fn test_checkout_standard() {
        let data = checkout();
        let out = CheckoutView::new(&data, ViewMode::Standard).to_string();
        insta::assert_snapshot!(out, @r"
        Skipped unknown ids: 42

         QTY ITEM                                       UNIT   SUBTOTAL
        ---------------------------------------------------------------
           2 Shirt                                    $19.99     $39.98
           1 Mug                                       $9.50      $9.50

        Total: 3 item(s), $49.48
        ");
    }

    #[test]
    fn test_checkout_compact() {
        let data = checkout();
        let out = CheckoutView::new(&data, ViewMode::Compact).to_string();
        assert_eq!(out, "2 x Shirt $39.98\n1 x Mug $9.50\nTotal: $49.48\n");
    }
}
