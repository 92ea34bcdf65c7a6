use crate::domain::{ActivePetLimit, PetRecord, PetStatus};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum MyPetsIntent {
    /// Screen opened or refreshed.
    Load,
    Loaded {
        pets: Vec<PetRecord>,
        limit: ActivePetLimit,
    },
    Failed { message: String },
    /// A record's status changed through an edit.
    StatusChanged { pet_id: String, status: PetStatus },
}

impl Intent for MyPetsIntent {}
