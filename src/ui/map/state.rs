use crate::domain::{Coordinate, PetRecord, StatusStyle};
use crate::ui::mvi::UiState;

use super::filter::{visible_pets, Filter};

/// What the map needs to draw one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub pet_id: String,
    pub coordinate: Coordinate,
    pub color: &'static str,
    pub icon: &'static str,
}

impl MarkerView {
    fn from_pet(pet: &PetRecord) -> Self {
        Self {
            pet_id: pet.id.clone(),
            coordinate: pet.coordinate(),
            color: StatusStyle::for_status(pet.status()).main,
            icon: pet.details.kind.icon(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapState {
    pub(super) pets: Vec<PetRecord>,
    pub(super) filter: Filter,
    pub(super) selected: Option<PetRecord>,
    pub(super) user_id: Option<String>,
}

impl UiState for MapState {}

impl MapState {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn selected(&self) -> Option<&PetRecord> {
        self.selected.as_ref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Full list as last fetched, before filtering.
    pub fn pets(&self) -> &[PetRecord] {
        &self.pets
    }

    pub fn visible(&self) -> impl Iterator<Item = &PetRecord> {
        visible_pets(&self.pets, self.filter, self.user_id.as_deref())
    }

    pub fn is_visible(&self, pet_id: &str) -> bool {
        self.visible().any(|pet| pet.id == pet_id)
    }

    pub fn markers(&self) -> Vec<MarkerView> {
        self.visible().map(MarkerView::from_pet).collect()
    }

    /// The "my pets" chip is only offered to signed-in users.
    pub fn can_filter_mine(&self) -> bool {
        self.user_id.is_some()
    }
}
