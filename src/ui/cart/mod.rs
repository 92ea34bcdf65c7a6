//! Session-scoped shopping cart.

mod intent;
mod reducer;
mod state;

pub use intent::CartIntent;
pub use reducer::CartReducer;
pub use state::{CartLine, CartState};
