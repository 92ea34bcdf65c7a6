use crate::domain::Product;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CartIntent {
    /// Add one unit. Re-adding a product bumps its quantity.
    Add { product: Product },
    /// Empty the cart. There is no per-line removal.
    Clear,
}

impl Intent for CartIntent {}
