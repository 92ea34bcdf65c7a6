//! Session context: the signed-in user plus every piece of screen
//! state that lives as long as the app instance.
//!
//! One `Session` is created at startup and passed explicitly to the
//! screens. Signing out tears down the user-bound state; the cart only
//! goes away with the session itself.

use crate::domain::{CurrentUser, PetStatus, Product};
use crate::services::{PetService, ServiceError};
use crate::ui::cart::{CartIntent, CartReducer, CartState};
use crate::ui::map::{MapIntent, MapReducer, MapState, StatusSelector};
use crate::ui::mvi::Reducer;
use crate::ui::my_pets::{MyPetsIntent, MyPetsReducer, MyPetsState};

/// Replace a state field with the reducer's output.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

#[derive(Debug, Default)]
pub struct Session {
    user: Option<CurrentUser>,
    cart: CartState,
    map: MapState,
    my_pets: MyPetsState,
}

impl Session {
    pub fn new(user: Option<CurrentUser>) -> Self {
        let mut session = Self::default();
        session.set_user(user);
        session
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }

    pub fn my_pets(&self) -> &MyPetsState {
        &self.my_pets
    }

    /// Sign-in or sign-out completed.
    pub fn set_user(&mut self, user: Option<CurrentUser>) {
        let user_id = user.as_ref().map(|u| u.id.clone());
        if user_id.as_deref() != self.user.as_ref().map(|u| u.id.as_str()) {
            self.my_pets = MyPetsState::default();
        }
        self.user = user;
        self.dispatch_map(MapIntent::UserChanged { user_id });
    }

    pub fn dispatch_cart(&mut self, intent: CartIntent) {
        dispatch_mvi!(self, cart, CartReducer, intent);
    }

    pub fn dispatch_map(&mut self, intent: MapIntent) {
        dispatch_mvi!(self, map, MapReducer, intent);
    }

    pub fn dispatch_my_pets(&mut self, intent: MyPetsIntent) {
        dispatch_mvi!(self, my_pets, MyPetsReducer, intent);
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.dispatch_cart(CartIntent::Add { product });
    }

    pub fn clear_cart(&mut self) {
        self.dispatch_cart(CartIntent::Clear);
    }

    /// Change the status chip and refetch the map.
    pub async fn set_filter_status(
        &mut self,
        service: &PetService,
        selector: StatusSelector,
    ) -> Result<(), ServiceError> {
        self.dispatch_map(MapIntent::SetFilterStatus { selector });
        self.refresh_map(service).await
    }

    /// Toggle "my pets" and refetch the map.
    pub async fn set_only_mine(
        &mut self,
        service: &PetService,
        enabled: bool,
    ) -> Result<(), ServiceError> {
        self.dispatch_map(MapIntent::SetOnlyMine { enabled });
        self.refresh_map(service).await
    }

    /// Fetch the records matching the current filter.
    ///
    /// On failure the previous list stays on screen.
    pub async fn refresh_map(&mut self, service: &PetService) -> Result<(), ServiceError> {
        let query = self.map.filter().to_query(self.map.user_id());
        match service.list(&query).await {
            Ok(pets) => {
                tracing::debug!(count = pets.len(), filter = ?self.map.filter(), "Map pets loaded");
                self.dispatch_map(MapIntent::PetsLoaded { pets });
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load map pets");
                Err(e)
            }
        }
    }

    /// Reload the "my pets" screen.
    pub async fn refresh_my_pets(&mut self, service: &PetService) -> Result<(), ServiceError> {
        self.dispatch_my_pets(MyPetsIntent::Load);
        match service.my_pets().await {
            Ok(pets) => {
                self.dispatch_my_pets(MyPetsIntent::Loaded {
                    pets,
                    limit: service.limit(),
                });
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load own pets");
                self.dispatch_my_pets(MyPetsIntent::Failed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Resolve one of the user's records and reflect it on both the
    /// "my pets" list and the map.
    pub async fn resolve_pet(
        &mut self,
        service: &PetService,
        pet_id: &str,
    ) -> Result<(), ServiceError> {
        let pet = service.resolve(pet_id).await?;
        self.dispatch_my_pets(MyPetsIntent::StatusChanged {
            pet_id: pet.id.clone(),
            status: PetStatus::Resolved,
        });
        self.dispatch_map(MapIntent::PetUpdated { pet });
        Ok(())
    }

    /// Sign-out: drop everything bound to the user, keep the cart.
    pub fn sign_out(&mut self) {
        self.set_user(None);
        self.dispatch_map(MapIntent::Dismiss);
    }
}
