//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;

use petfinder::domain::{
    ActivePetLimit, AgeBracket, CurrentUser, Gender, ImageRef, NewPet, PetKind, PetRecord,
    PetStatus, UserProfile,
};
use petfinder::forms::PetForm;
use petfinder::services::memory::{MemoryIdentity, MemoryProfileStore, MemoryRecordStore};
use petfinder::services::PetService;
use tempfile::TempDir;

pub fn pet(id: &str, status: PetStatus, user: &str) -> PetRecord {
    PetRecord::new(
        id,
        NewPet {
            name: format!("pet-{}", id),
            status,
            user_id: user.to_string(),
            latitude: -34.6,
            longitude: -58.5,
            ..Default::default()
        },
    )
}

/// The three-record sample: lost/A, found/B, resolved/A.
pub fn sample_pets() -> Vec<PetRecord> {
    vec![
        pet("1", PetStatus::Lost, "A"),
        pet("2", PetStatus::Found, "B"),
        pet("3", PetStatus::Resolved, "A"),
    ]
}

pub fn user(id: &str) -> CurrentUser {
    CurrentUser::new(id, format!("{}@example.com", id.to_lowercase()))
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "Ana".to_string(),
        surname: "Gómez".to_string(),
        phone: "+54 11 5555-0000".to_string(),
        ..Default::default()
    }
}

/// A complete pet form ready to save.
pub fn pet_form(status: PetStatus) -> PetForm {
    let mut form = PetForm::with_status(status);
    form.name = "Luna".to_string();
    form.kind = Some(PetKind::Dog);
    form.breed = "Mestiza".to_string();
    form.gender = Some(Gender::Female);
    form.age = Some(AgeBracket::Adult);
    form.address = "Av. Rivadavia 1234".to_string();
    form.description = "Collar rojo".to_string();
    form.image = Some(ImageRef::new("https://img/luna.jpg"));
    form
}

/// Service over in-memory collaborators with `user_id` signed in and
/// owning a profile.
pub fn service_for(
    store: Arc<MemoryRecordStore>,
    user_id: &str,
) -> (PetService, Arc<MemoryIdentity>) {
    let identity = Arc::new(MemoryIdentity::signed_in(user(user_id)));
    let service = PetService::new(
        store,
        Arc::new(MemoryProfileStore::with_profile(user_id, profile())),
        identity.clone(),
        ActivePetLimit::default(),
    );
    (service, identity)
}

/// Write `pets` as a JSON fixture in a fresh temp dir.
pub fn pets_fixture(pets: &[PetRecord]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("pets.json");
    let json = serde_json::to_string_pretty(pets).expect("Failed to encode pets");
    std::fs::write(&path, json).expect("Failed to write pets fixture");
    (dir, path)
}
