use super::cart::Cart;
use super::menu::{ItemId, MenuCatalog};

/// One priced line of the order. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: ItemId,
    pub title: String,
    pub unit_price: u32,
    pub quantity: u32,
    pub line_total: u64,
}

/// Lines and totals derived from the cart and the catalog.
///
/// Recomputed in full after every cart mutation; nothing is cached between
/// calls, so computing twice on unchanged inputs yields identical values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderSummary {
    /// One line per cart entry that resolves against the catalog, in catalog
    /// traversal order.
    pub lines: Vec<OrderLine>,
    /// Total units across all lines, not the number of distinct lines.
    pub item_count: u32,
    pub grand_total: u64,
}

impl OrderSummary {
    pub fn compute(cart: &Cart, catalog: &MenuCatalog) -> OrderSummary {
        let mut summary = OrderSummary::default();
        for item in catalog.items() {
            let quantity = cart.quantity(&item.id);
            if quantity == 0 {
                continue;
            }
            let line_total = u64::from(item.price) * u64::from(quantity);
            summary.item_count += quantity;
            summary.grand_total += line_total;
            summary.lines.push(OrderLine {
                id: item.id.clone(),
                title: item.title.clone(),
                unit_price: item.price,
                quantity,
                line_total,
            });
        }
        // Cart ids with no catalog match (stale after a catalog change) are
        // skipped silently: they simply produce no line.
        summary
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
