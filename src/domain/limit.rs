use super::pet::PetRecord;

/// How many lost/found records a user may have published at once.
pub const DEFAULT_MAX_ACTIVE_PETS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivePetLimit {
    max: usize,
}

impl Default for ActivePetLimit {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX_ACTIVE_PETS,
        }
    }
}

impl ActivePetLimit {
    /// A limit of zero would lock every user out; it is raised to one.
    pub fn new(max: usize) -> Self {
        Self { max: max.max(1) }
    }

    pub fn max(&self) -> usize {
        self.max
    }

    /// Active records among `pets` owned by `user_id`.
    pub fn active_count(&self, pets: &[PetRecord], user_id: &str) -> usize {
        pets.iter()
            .filter(|pet| pet.is_owned_by(user_id) && pet.is_active())
            .count()
    }

    pub fn allows(&self, active: usize) -> bool {
        active < self.max
    }

    pub fn can_add(&self, pets: &[PetRecord], user_id: &str) -> bool {
        self.allows(self.active_count(pets, user_id))
    }
}
