use thiserror::Error;

use crate::domain::{InvalidImage, StatusTransitionError};
use crate::forms::ValidationError;

/// Failures reported by a record or profile store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Record '{id}' not found")]
    NotFound { id: String },

    #[error("Store request failed: {0}")]
    Backend(String),
}

/// Failures reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account already exists for '{email}'")]
    EmailInUse { email: String },

    #[error("Identity provider failed: {0}")]
    Backend(String),
}

/// Failures of the location collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location permission was denied")]
    PermissionDenied,

    #[error("Could not read the device location: {0}")]
    Unavailable(String),
}

/// Errors surfaced to a screen by the service functions.
///
/// All of them are recoverable: the screen notifies the user and the
/// user retries. Cart and map state are never touched by a failure.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("You need to sign in first")]
    NotSignedIn,

    #[error("Could not load the user profile")]
    ProfileMissing,

    #[error("Only {max} active pets (lost or found) are allowed at a time")]
    LimitReached { active: usize, max: usize },

    #[error("Pet '{id}' belongs to another user")]
    NotOwner { id: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transition(#[from] StatusTransitionError),

    #[error(transparent)]
    Image(#[from] InvalidImage),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Location(#[from] LocationError),
}
