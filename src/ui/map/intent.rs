use crate::domain::PetRecord;
use crate::ui::mvi::Intent;

use super::filter::StatusSelector;

#[derive(Debug, Clone)]
pub enum MapIntent {
    /// Signed-in user changed (sign in, sign out).
    UserChanged { user_id: Option<String> },
    /// A fetch from the record store completed.
    PetsLoaded { pets: Vec<PetRecord> },
    /// One record changed after a write; replaced in place if listed.
    PetUpdated { pet: PetRecord },
    /// Status chip tapped. Turns "mine only" off.
    SetFilterStatus { selector: StatusSelector },
    /// "My pets" chip toggled. Resets the status chip to "all".
    SetOnlyMine { enabled: bool },
    /// Marker tapped.
    Select { pet_id: String },
    /// Detail overlay closed.
    Dismiss,
}

impl Intent for MapIntent {}
