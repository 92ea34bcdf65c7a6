//! Form drafts and their validation.
//!
//! A failed validation never touches stored data; the screen shows the
//! error and the user corrects the input.

mod error;
mod pet_form;
mod profile_form;
mod sign_up;

pub use error::{PetField, ValidationError};
pub use pet_form::PetForm;
pub use profile_form::ProfileForm;
pub use sign_up::{SignUpCheck, SignUpForm};

/// Empty or whitespace-only.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
