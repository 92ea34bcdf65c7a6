//! Domain types shared by the state components and services.

mod limit;
mod pet;
mod product;
mod style;
mod user;

pub use limit::{ActivePetLimit, DEFAULT_MAX_ACTIVE_PETS};
pub use pet::{
    AgeBracket, Coordinate, Gender, ImageRef, InvalidImage, NewPet, PetKind, PetRecord, PetStatus,
    StatusTransitionError,
};
pub use product::{catalog, find_product, Product};
pub use style::{StatusStyle, ALL_CHIP_COLOR, DEFAULT_MARKER_COLOR, MINE_CHIP_COLOR};
pub use user::{CurrentUser, UserProfile};
