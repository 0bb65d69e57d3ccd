use std::fmt;

use crate::presentation::formatters::format_price;
use crate::presentation::formatters::text::single_line;
use crate::presentation::view_models::{ProductDetailViewModel, ViewMode};

pub struct ProductDetailView<'a> {
    data: &'a ProductDetailViewModel,
    mode: ViewMode,
}

impl<'a> ProductDetailView<'a> {
    pub fn new(data: &'a ProductDetailViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.data;
        writeln!(f, "{}", p.title)?;
        writeln!(f, "{}", "=".repeat(p.title.chars().count()))?;
        writeln!(f, "Price:    {}", format_price(p.price))?;
        writeln!(f, "Category: {}", p.category)?;
        if p.in_cart > 0 {
            writeln!(f, "In cart:  {}", p.in_cart)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", single_line(&p.description))
    }
}

impl<'a> fmt::Display for ProductDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let p = self.data;
        match self.mode {
            ViewMode::Minimal => writeln!(f, "{}", p.id),
            ViewMode::Compact => writeln!(
                f,
                "{} {} {} [{}]",
                p.id,
                p.title,
                format_price(p.price),
                p.category
            ),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => {
                writeln!(f, "ID:       {}", p.id)?;
                self.render_standard(f)?;
                if !p.images.is_empty() {
                    writeln!(f)?;
                    writeln!(f, "Images:")?;
                    for url in &p.images {
                        writeln!(f, "  {}", url)?;
                    }
                }
                Ok(())
            }
        }
    }
}
