//! The signed-in user's own publications and the "add pet" gate.

mod intent;
mod reducer;
mod state;

pub use intent::MyPetsIntent;
pub use reducer::MyPetsReducer;
pub use state::MyPetsState;
