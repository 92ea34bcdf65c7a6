//! Pet map: marker filtering and the selected-pet overlay.

mod filter;
mod intent;
mod reducer;
mod state;

pub use filter::{visible_pets, Filter, StatusSelector, UnknownSelector};
pub use intent::MapIntent;
pub use reducer::MapReducer;
pub use state::{MapState, MarkerView};
