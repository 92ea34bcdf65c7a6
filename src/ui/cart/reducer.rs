use std::collections::BTreeMap;

use crate::ui::mvi::Reducer;

use super::intent::CartIntent;
use super::state::{CartLine, CartState};

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Intent = CartIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CartIntent::Add { product } => {
                let mut lines = state.into_lines();
                match lines.get_mut(&product.id) {
                    Some(line) => {
                        line.quantity = line.quantity.saturating_add(1);
                        // Keep the latest snapshot of the product.
                        line.product = product;
                    }
                    None => {
                        lines.insert(
                            product.id.clone(),
                            CartLine {
                                product,
                                quantity: 1,
                            },
                        );
                    }
                }
                CartState::from_lines(lines)
            }
            CartIntent::Clear => CartState::from_lines(BTreeMap::new()),
        }
    }
}
