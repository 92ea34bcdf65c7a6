//! In-process collaborators.
//!
//! Behave like the hosted backend for the operations this crate uses,
//! with switches to simulate outages and denials.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::{Coordinate, CurrentUser, NewPet, PetRecord, UserProfile};

use super::error::{AuthError, LocationError, StoreError};
use super::{
    Geolocation, IdentityProvider, ImagePicker, Permission, PetQuery, PickedImage, ProfileStore,
    RecordStore,
};

/// Pet collection kept in insertion order.
#[derive(Default)]
pub struct MemoryRecordStore {
    pets: RwLock<Vec<PetRecord>>,
    offline: AtomicBool,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pets(pets: Vec<PetRecord>) -> Self {
        Self {
            pets: RwLock::new(pets),
            offline: AtomicBool::new(false),
        }
    }

    /// While offline every call fails with a backend error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.pets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.read().is_empty()
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("store unreachable".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list_pets(&self, query: &PetQuery) -> Result<Vec<PetRecord>, StoreError> {
        self.check_online()?;
        Ok(self
            .pets
            .read()
            .iter()
            .filter(|pet| query.matches(pet))
            .cloned()
            .collect())
    }

    async fn get_pet(&self, id: &str) -> Result<PetRecord, StoreError> {
        self.check_online()?;
        self.pets
            .read()
            .iter()
            .find(|pet| pet.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    async fn create_pet(&self, pet: NewPet) -> Result<String, StoreError> {
        self.check_online()?;
        let id = Uuid::new_v4().to_string();
        self.pets.write().push(PetRecord::new(id.clone(), pet));
        Ok(id)
    }

    async fn update_pet(&self, id: &str, pet: NewPet) -> Result<(), StoreError> {
        self.check_online()?;
        let mut pets = self.pets.write();
        let record = pets
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        record.details = pet;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<String, UserProfile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(user_id: &str, profile: UserProfile) -> Self {
        let store = Self::default();
        store.profiles.write().insert(user_id.to_string(), profile);
        store
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, user_id: &str) -> Result<Option<UserProfile>, StoreError> {
        Ok(self.profiles.read().get(user_id).cloned())
    }

    async fn set_profile(&self, user_id: &str, profile: UserProfile) -> Result<(), StoreError> {
        self.profiles.write().insert(user_id.to_string(), profile);
        Ok(())
    }
}

struct Account {
    password: String,
    user: CurrentUser,
    display_name: String,
}

/// Email/password accounts with a single signed-in slot.
#[derive(Default)]
pub struct MemoryIdentity {
    accounts: RwLock<HashMap<String, Account>>,
    current: RwLock<Option<CurrentUser>>,
}

impl MemoryIdentity {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider with `user` already signed in.
    pub fn signed_in(user: CurrentUser) -> Self {
        let identity = Self::default();
        *identity.current.write() = Some(user);
        identity
    }

    pub fn display_name(&self, email: &str) -> Option<String> {
        self.accounts
            .read()
            .get(&email.to_lowercase())
            .map(|account| account.display_name.clone())
    }
}

#[async_trait]
impl IdentityProvider for MemoryIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        self.current.read().clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<CurrentUser, AuthError> {
        let user = {
            let accounts = self.accounts.read();
            let account = accounts
                .get(&email.to_lowercase())
                .filter(|account| account.password == password)
                .ok_or(AuthError::InvalidCredentials)?;
            account.user.clone()
        };
        *self.current.write() = Some(user.clone());
        Ok(user)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<CurrentUser, AuthError> {
        let key = email.to_lowercase();
        let mut accounts = self.accounts.write();
        if accounts.contains_key(&key) {
            return Err(AuthError::EmailInUse {
                email: email.to_string(),
            });
        }
        let user = CurrentUser::new(Uuid::new_v4().to_string(), email);
        accounts.insert(
            key,
            Account {
                password: password.to_string(),
                user: user.clone(),
                display_name: display_name.to_string(),
            },
        );
        Ok(user)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.current.write() = None;
        Ok(())
    }
}

/// Hands out queued picker results, then reports cancellation.
#[derive(Default)]
pub struct ScriptedImagePicker {
    results: Mutex<VecDeque<PickedImage>>,
}

impl ScriptedImagePicker {
    pub fn new(results: impl IntoIterator<Item = PickedImage>) -> Self {
        Self {
            results: Mutex::new(results.into_iter().collect()),
        }
    }
}

#[async_trait]
impl ImagePicker for ScriptedImagePicker {
    async fn pick_image(&self) -> PickedImage {
        self.results
            .lock()
            .pop_front()
            .unwrap_or(PickedImage::Cancelled)
    }
}

/// Device location with a fixed answer.
pub struct FixedGeolocation {
    permission: Permission,
    coordinate: Result<Coordinate, LocationError>,
}

impl FixedGeolocation {
    pub fn granted(coordinate: Coordinate) -> Self {
        Self {
            permission: Permission::Granted,
            coordinate: Ok(coordinate),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: Permission::Denied,
            coordinate: Err(LocationError::PermissionDenied),
        }
    }

    /// Permission granted but no fix available.
    pub fn unavailable(reason: &str) -> Self {
        Self {
            permission: Permission::Granted,
            coordinate: Err(LocationError::Unavailable(reason.to_string())),
        }
    }
}

#[async_trait]
impl Geolocation for FixedGeolocation {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn coordinates(&self) -> Result<Coordinate, LocationError> {
        self.coordinate.clone()
    }
}
