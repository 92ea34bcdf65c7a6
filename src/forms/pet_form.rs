use chrono::{DateTime, Utc};

use crate::domain::{
    AgeBracket, Coordinate, Gender, ImageRef, NewPet, PetKind, PetRecord, PetStatus, UserProfile,
};

use super::error::{PetField, ValidationError};
use super::is_blank;

/// Draft behind the add/edit pet screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PetForm {
    pub name: String,
    pub kind: Option<PetKind>,
    pub breed: String,
    pub gender: Option<Gender>,
    pub age: Option<AgeBracket>,
    pub address: String,
    pub description: String,
    pub status: PetStatus,
    pub retained: bool,
    pub image: Option<ImageRef>,
    existing: Option<PetRecord>,
}

impl PetForm {
    /// Empty draft for a new publication, status "lost".
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty draft for a new publication with `status` preselected.
    pub fn with_status(status: PetStatus) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Draft pre-filled from a record being edited.
    pub fn edit(pet: &PetRecord) -> Self {
        let details = &pet.details;
        Self {
            name: details.name.clone(),
            kind: Some(details.kind),
            breed: details.breed.clone(),
            gender: Some(details.gender),
            age: Some(details.age),
            address: details.address.clone(),
            description: details.description.clone(),
            status: details.status,
            retained: details.retained,
            image: details.image.clone(),
            existing: Some(pet.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.existing.is_some()
    }

    /// Record being edited, if any.
    pub fn existing(&self) -> Option<&PetRecord> {
        self.existing.as_ref()
    }

    /// A finder may not know the pet's name.
    pub fn name_required(&self) -> bool {
        self.status != PetStatus::Found
    }

    /// Fields still missing, in form order.
    pub fn missing_fields(&self) -> Vec<PetField> {
        let mut missing = Vec::new();
        if self.name_required() && is_blank(&self.name) {
            missing.push(PetField::Name);
        }
        if self.kind.is_none() {
            missing.push(PetField::Kind);
        }
        if is_blank(&self.breed) {
            missing.push(PetField::Breed);
        }
        if self.gender.is_none() {
            missing.push(PetField::Gender);
        }
        if self.age.is_none() {
            missing.push(PetField::Age);
        }
        if is_blank(&self.address) {
            missing.push(PetField::Address);
        }
        if is_blank(&self.description) {
            missing.push(PetField::Description);
        }
        match &self.image {
            Some(image) if !is_blank(&image.uri) => {}
            _ => missing.push(PetField::Image),
        }
        missing
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if !self.is_editing() && !self.status.is_active() {
            return Err(ValidationError::InvalidInitialStatus(self.status));
        }
        Ok(())
    }

    /// Build the document to write.
    ///
    /// New records take `location` (or 0,0), today's date and `now`.
    /// Edits keep the original location when none is given, and always
    /// keep the original date and creation time.
    pub fn build(
        &self,
        user_id: &str,
        profile: &UserProfile,
        location: Option<Coordinate>,
        now: DateTime<Utc>,
    ) -> Result<NewPet, ValidationError> {
        self.validate()?;

        let (coordinate, date, created_at) = match &self.existing {
            Some(pet) => (
                location.unwrap_or_else(|| pet.coordinate()),
                pet.details.date.clone(),
                pet.details.created_at,
            ),
            None => (
                location.unwrap_or_default(),
                now.format("%-d/%-m/%Y").to_string(),
                Some(now),
            ),
        };

        Ok(NewPet {
            name: self.name.trim().to_string(),
            kind: self.kind.unwrap_or_default(),
            breed: self.breed.trim().to_string(),
            gender: self.gender.unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            address: self.address.trim().to_string(),
            description: self.description.trim().to_string(),
            status: self.status,
            retained: self.retained,
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            image: self.image.clone(),
            user_id: user_id.to_string(),
            owner: profile.display_name(),
            phone: profile.phone.clone(),
            date,
            created_at,
        })
    }
}
