//! External collaborators and the service functions that call them.
//!
//! The backend (auth, documents, images, location) is only reached
//! through the traits below. `memory` holds in-process implementations
//! for tests and the demo binary.

mod auth;
mod error;
mod images;
mod location;
pub mod memory;
mod pets;
mod profile;

pub use auth::{sign_in, sign_out, sign_up};
pub use error::{AuthError, LocationError, ServiceError, StoreError};
pub use images::pick_image;
pub use location::{locate, LocationFix};
pub use pets::PetService;
pub use profile::{load_profile_form, save_profile};

use async_trait::async_trait;

use crate::domain::{Coordinate, CurrentUser, NewPet, PetRecord, PetStatus, UserProfile};

/// Equality filters supported by the record store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PetQuery {
    pub status: Option<PetStatus>,
    pub user_id: Option<String>,
}

impl PetQuery {
    pub fn with_status(status: PetStatus) -> Self {
        Self {
            status: Some(status),
            user_id: None,
        }
    }

    pub fn for_user(user_id: &str) -> Self {
        Self {
            status: None,
            user_id: Some(user_id.to_string()),
        }
    }

    pub fn matches(&self, pet: &PetRecord) -> bool {
        self.status.map_or(true, |status| pet.status() == status)
            && self
                .user_id
                .as_deref()
                .map_or(true, |user| pet.user_id() == user)
    }
}

/// Document collection holding pet records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_pets(&self, query: &PetQuery) -> Result<Vec<PetRecord>, StoreError>;

    async fn get_pet(&self, id: &str) -> Result<PetRecord, StoreError>;

    /// Insert a record and return its generated id.
    async fn create_pet(&self, pet: NewPet) -> Result<String, StoreError>;

    async fn update_pet(&self, id: &str, pet: NewPet) -> Result<(), StoreError>;
}

/// Document collection holding one profile per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError>;

    async fn set_profile(&self, user_id: &str, profile: UserProfile) -> Result<(), StoreError>;
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    fn current_user(&self) -> Option<CurrentUser>;

    async fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError>;

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<CurrentUser, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

/// Result of opening the platform image picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickedImage {
    /// Base64-encoded JPEG payload.
    Picked(String),
    Cancelled,
}

#[async_trait]
pub trait ImagePicker: Send + Sync {
    async fn pick_image(&self) -> PickedImage;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

#[async_trait]
pub trait Geolocation: Send + Sync {
    async fn request_permission(&self) -> Permission;

    async fn coordinates(&self) -> Result<Coordinate, LocationError>;
}
