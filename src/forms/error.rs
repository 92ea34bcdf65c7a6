use thiserror::Error;

use crate::domain::PetStatus;

/// Pet form inputs, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetField {
    Name,
    Kind,
    Breed,
    Gender,
    Age,
    Address,
    Description,
    Image,
}

impl PetField {
    pub fn label(&self) -> &'static str {
        match self {
            PetField::Name => "name",
            PetField::Kind => "type",
            PetField::Breed => "breed",
            PetField::Gender => "gender",
            PetField::Age => "age",
            PetField::Address => "address",
            PetField::Description => "description",
            PetField::Image => "image",
        }
    }
}

impl std::fmt::Display for PetField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join(.0))]
    MissingFields(Vec<PetField>),

    #[error("A new publication must start as lost or found, not {0}")]
    InvalidInitialStatus(PetStatus),

    #[error("Name must contain letters only")]
    InvalidName,

    #[error("Surname must contain letters only")]
    InvalidSurname,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Passwords are empty or do not match")]
    PasswordMismatch,
}

fn join(fields: &[PetField]) -> String {
    fields
        .iter()
        .map(PetField::label)
        .collect::<Vec<_>>()
        .join(", ")
}
