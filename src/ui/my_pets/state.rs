use crate::domain::{ActivePetLimit, PetRecord};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MyPetsState {
    #[default]
    Loading,
    Loaded {
        pets: Vec<PetRecord>,
        limit: ActivePetLimit,
    },
    /// Fetch failed; adding stays disabled until a reload succeeds.
    Failed { message: String },
}

impl UiState for MyPetsState {}

impl MyPetsState {
    pub fn pets(&self) -> &[PetRecord] {
        match self {
            MyPetsState::Loaded { pets, .. } => pets,
            _ => &[],
        }
    }

    pub fn active_count(&self) -> usize {
        self.pets().iter().filter(|pet| pet.is_active()).count()
    }

    /// Whether the "add new pet" action is enabled.
    pub fn can_add(&self) -> bool {
        match self {
            MyPetsState::Loaded { limit, .. } => limit.allows(self.active_count()),
            _ => false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, MyPetsState::Loading)
    }
}
