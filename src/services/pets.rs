use std::sync::Arc;

use chrono::Utc;

use crate::domain::{ActivePetLimit, Coordinate, CurrentUser, PetRecord, PetStatus};
use crate::forms::PetForm;

use super::error::ServiceError;
use super::{IdentityProvider, PetQuery, ProfileStore, RecordStore};

/// Pet publication workflows on top of the store collaborators.
///
/// Every rule that guards a write (signed-in user, profile present,
/// active-pet limit, ownership, status machine) is checked here before
/// the store is called, so a rejected save leaves the store untouched.
#[derive(Clone)]
pub struct PetService {
    store: Arc<dyn RecordStore>,
    profiles: Arc<dyn ProfileStore>,
    identity: Arc<dyn IdentityProvider>,
    limit: ActivePetLimit,
}

impl PetService {
    pub fn new(
        store: Arc<dyn RecordStore>,
        profiles: Arc<dyn ProfileStore>,
        identity: Arc<dyn IdentityProvider>,
        limit: ActivePetLimit,
    ) -> Self {
        Self {
            store,
            profiles,
            identity,
            limit,
        }
    }

    pub fn limit(&self) -> ActivePetLimit {
        self.limit
    }

    fn require_user(&self) -> Result<CurrentUser, ServiceError> {
        self.identity.current_user().ok_or(ServiceError::NotSignedIn)
    }

    pub async fn list(&self, query: &PetQuery) -> Result<Vec<PetRecord>, ServiceError> {
        Ok(self.store.list_pets(query).await?)
    }

    pub async fn get(&self, id: &str) -> Result<PetRecord, ServiceError> {
        Ok(self.store.get_pet(id).await?)
    }

    /// Records published by the signed-in user.
    pub async fn my_pets(&self) -> Result<Vec<PetRecord>, ServiceError> {
        let user = self.require_user()?;
        Ok(self.store.list_pets(&PetQuery::for_user(&user.id)).await?)
    }

    /// Whether the signed-in user may publish another pet.
    pub async fn can_add_pet(&self) -> Result<bool, ServiceError> {
        let user = self.require_user()?;
        let pets = self.my_pets().await?;
        Ok(self.limit.can_add(&pets, &user.id))
    }

    /// Create or update the record behind `form`; returns its id.
    pub async fn save(
        &self,
        form: &PetForm,
        location: Option<Coordinate>,
    ) -> Result<String, ServiceError> {
        let user = self.require_user()?;
        form.validate()?;

        let profile = self
            .profiles
            .get_profile(&user.id)
            .await?
            .ok_or(ServiceError::ProfileMissing)?;

        let pet = form.build(&user.id, &profile, location, Utc::now())?;

        match form.existing() {
            Some(existing) => {
                // Re-read so the transition is checked against the stored
                // status, not the one the form was opened with.
                let current = self.store.get_pet(&existing.id).await?;
                if !current.is_owned_by(&user.id) {
                    return Err(ServiceError::NotOwner {
                        id: current.id.clone(),
                    });
                }
                current.status().transition(pet.status)?;
                if !current.is_active() && pet.status.is_active() {
                    self.check_limit(&user.id).await?;
                }

                let status = pet.status;
                self.store.update_pet(&current.id, pet).await?;
                tracing::info!(
                    pet_id = %current.id,
                    from = %current.status(),
                    to = %status,
                    "Pet updated"
                );
                Ok(current.id)
            }
            None => {
                self.check_limit(&user.id).await?;

                let status = pet.status;
                let id = self.store.create_pet(pet).await?;
                tracing::info!(pet_id = %id, status = %status, "Pet created");
                Ok(id)
            }
        }
    }

    /// Fails when `user_id` already has the maximum of active records.
    async fn check_limit(&self, user_id: &str) -> Result<(), ServiceError> {
        let mine = self.store.list_pets(&PetQuery::for_user(user_id)).await?;
        let active = self.limit.active_count(&mine, user_id);
        if !self.limit.allows(active) {
            tracing::warn!(
                user_id = %user_id,
                active,
                max = self.limit.max(),
                "Active pet limit reached"
            );
            return Err(ServiceError::LimitReached {
                active,
                max: self.limit.max(),
            });
        }
        Ok(())
    }

    /// Mark one of the user's records as resolved.
    pub async fn resolve(&self, id: &str) -> Result<PetRecord, ServiceError> {
        let user = self.require_user()?;
        let mut pet = self.store.get_pet(id).await?;
        if !pet.is_owned_by(&user.id) {
            return Err(ServiceError::NotOwner { id: id.to_string() });
        }
        let previous = pet.status();
        pet.details.status = previous.transition(PetStatus::Resolved)?;
        self.store.update_pet(id, pet.details.clone()).await?;
        tracing::info!(pet_id = %id, from = %previous, "Pet resolved");
        Ok(pet)
    }
}
