use std::collections::BTreeMap;

use crate::domain::Product;
use crate::ui::mvi::UiState;

/// One product in the cart with its quantity (always at least 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal(&self) -> u64 {
        self.product.price.saturating_mul(u64::from(self.quantity))
    }
}

/// Cart contents keyed by product id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartState {
    lines: BTreeMap<String, CartLine>,
}

impl UiState for CartState {}

impl CartState {
    pub(super) fn from_lines(lines: BTreeMap<String, CartLine>) -> Self {
        Self { lines }
    }

    pub(super) fn into_lines(self) -> BTreeMap<String, CartLine> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines with a positive quantity, ordered by product id.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values().filter(|line| line.quantity > 0)
    }

    /// Badge count for a product tile.
    pub fn quantity_of(&self, product_id: &str) -> u32 {
        self.lines
            .get(product_id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    pub fn total_items(&self) -> u64 {
        self.lines.values().map(|line| u64::from(line.quantity)).sum()
    }

    pub fn total_price(&self) -> u64 {
        self.lines()
            .fold(0u64, |total, line| total.saturating_add(line.subtotal()))
    }
}
