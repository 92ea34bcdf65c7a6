//! Pet detail view model: captions, ownership and outbound links.

use thiserror::Error;
use url::Url;

use crate::domain::{CurrentUser, PetRecord, PetStatus, StatusStyle};

const WHATSAPP_BASE: &str = "https://wa.me/";
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Pet '{pet_id}' has no usable contact phone")]
    NoPhone { pet_id: String },

    #[error("Could not build link: {0}")]
    Url(#[from] url::ParseError),
}

/// What the contact button does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    /// Open a chat with the publisher.
    WhatsApp(Url),
    /// Viewer must sign in before contacting.
    SignInRequired,
    /// Resolved records are not contactable.
    Hidden,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PetDetail {
    pub style: StatusStyle,
    pub owner_caption: String,
    pub retained_notice: bool,
    pub contact: ContactAction,
    pub directions: Url,
    pub can_edit: bool,
}

impl PetDetail {
    pub fn new(pet: &PetRecord, viewer: Option<&CurrentUser>) -> Result<Self, ContactError> {
        let contact = match (pet.status(), viewer) {
            (PetStatus::Resolved, _) => ContactAction::Hidden,
            (_, None) => ContactAction::SignInRequired,
            (_, Some(_)) => ContactAction::WhatsApp(whatsapp_link(pet)?),
        };
        Ok(Self {
            style: StatusStyle::for_status(pet.status()),
            owner_caption: owner_caption(pet),
            retained_notice: pet.status() == PetStatus::Found && pet.details.retained,
            contact,
            directions: directions_link(pet)?,
            can_edit: viewer.is_some_and(|user| pet.is_owned_by(&user.id)),
        })
    }
}

/// "Dueño/a" for lost pets, "Encontrado por" for the rest.
pub fn owner_caption(pet: &PetRecord) -> String {
    match pet.status() {
        PetStatus::Lost => format!("Dueño/a: {}", pet.details.owner),
        _ => format!("Encontrado por: {}", pet.details.owner),
    }
}

/// Chat link with a prefilled, percent-encoded message about the pet.
pub fn whatsapp_link(pet: &PetRecord) -> Result<Url, ContactError> {
    let digits: String = pet
        .details
        .phone
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(ContactError::NoPhone {
            pet_id: pet.id.clone(),
        });
    }
    let message = format!(
        "Hola, vi tu publicación sobre {}. ¿Sigue disponible la información?",
        pet.details.name
    );
    let url = Url::parse(&format!(
        "{}{}?text={}",
        WHATSAPP_BASE,
        digits,
        urlencoding::encode(&message)
    ))?;
    Ok(url)
}

/// Driving directions to where the pet was reported.
pub fn directions_link(pet: &PetRecord) -> Result<Url, ContactError> {
    let destination = format!("{},{}", pet.details.latitude, pet.details.longitude);
    let url = Url::parse_with_params(
        DIRECTIONS_BASE,
        &[("api", "1"), ("destination", destination.as_str())],
    )?;
    Ok(url)
}
