use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Publication status of a pet record.
///
/// Lost and Found are entry states and both end in Resolved. Records
/// written with a status this crate does not know are kept as
/// `Unrecognized` instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PetStatus {
    #[default]
    Lost,
    Found,
    Resolved,
    Unrecognized,
}

impl PetStatus {
    /// Statuses a user can pick for a record, in display order.
    pub const SELECTABLE: [PetStatus; 3] = [PetStatus::Lost, PetStatus::Found, PetStatus::Resolved];

    /// Parse a stored status. Legacy Spanish values are accepted.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "lost" | "perdido" => PetStatus::Lost,
            "found" | "encontrado" => PetStatus::Found,
            "resolved" | "resuelto" => PetStatus::Resolved,
            _ => PetStatus::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Lost => "lost",
            PetStatus::Found => "found",
            PetStatus::Resolved => "resolved",
            PetStatus::Unrecognized => "unrecognized",
        }
    }

    /// Lost and found records count against the active-pet limit.
    pub fn is_active(&self) -> bool {
        matches!(self, PetStatus::Lost | PetStatus::Found)
    }

    pub fn can_transition_to(&self, next: PetStatus) -> bool {
        match (self, next) {
            (_, PetStatus::Unrecognized) => false,
            (current, next) if *current == next => true,
            (PetStatus::Lost | PetStatus::Found, PetStatus::Resolved) => true,
            (PetStatus::Unrecognized, _) => true,
            _ => false,
        }
    }

    /// Validate a status change requested by an edit.
    pub fn transition(self, next: PetStatus) -> Result<PetStatus, StatusTransitionError> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(StatusTransitionError {
                from: self,
                to: next,
            })
        }
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PetStatus {
    fn from(value: String) -> Self {
        PetStatus::parse(&value)
    }
}

impl From<PetStatus> for String {
    fn from(value: PetStatus) -> Self {
        value.as_str().to_string()
    }
}

/// A status change outside the lost/found -> resolved machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot change a {from} record to {to}")]
pub struct StatusTransitionError {
    pub from: PetStatus,
    pub to: PetStatus,
}

/// Species shown on map markers and detail screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PetKind {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Turtle,
    #[default]
    Other,
}

impl PetKind {
    /// Kinds offered by the pet form.
    pub const SELECTABLE: [PetKind; 3] = [PetKind::Dog, PetKind::Cat, PetKind::Other];

    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "dog" | "perro" => PetKind::Dog,
            "cat" | "gato" => PetKind::Cat,
            "bird" | "ave" => PetKind::Bird,
            "rabbit" | "conejo" => PetKind::Rabbit,
            "turtle" | "tortuga" => PetKind::Turtle,
            _ => PetKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PetKind::Dog => "dog",
            PetKind::Cat => "cat",
            PetKind::Bird => "bird",
            PetKind::Rabbit => "rabbit",
            PetKind::Turtle => "turtle",
            PetKind::Other => "other",
        }
    }

    /// Marker icon.
    pub fn icon(&self) -> &'static str {
        match self {
            PetKind::Dog => "🐶",
            PetKind::Cat => "🐱",
            PetKind::Bird => "🕊️",
            PetKind::Rabbit => "🐰",
            PetKind::Turtle => "🐢",
            PetKind::Other => "🐾",
        }
    }
}

impl From<String> for PetKind {
    fn from(value: String) -> Self {
        PetKind::parse(&value)
    }
}

impl From<PetKind> for String {
    fn from(value: PetKind) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[serde(alias = "macho")]
    Male,
    #[serde(alias = "hembra")]
    Female,
    #[default]
    #[serde(alias = "desconocido")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    #[serde(alias = "cachorro")]
    Puppy,
    #[serde(alias = "adulto")]
    Adult,
    #[default]
    #[serde(alias = "desconocido")]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Picked image is not valid base64: {0}")]
pub struct InvalidImage(pub String);

/// Image reference stored with a record: a URL or an inline data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub uri: String,
}

impl ImageRef {
    const JPEG_DATA_PREFIX: &'static str = "data:image/jpeg;base64,";

    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Wrap raw base64 from the image picker into a JPEG data URI.
    pub fn from_base64(data: &str) -> Result<Self, InvalidImage> {
        let data = data.trim();
        if data.is_empty() {
            return Err(InvalidImage("empty payload".to_string()));
        }
        STANDARD
            .decode(data)
            .map_err(|e| InvalidImage(e.to_string()))?;
        Ok(Self {
            uri: format!("{}{}", Self::JPEG_DATA_PREFIX, data),
        })
    }

    pub fn is_inline(&self) -> bool {
        self.uri.starts_with("data:")
    }
}

/// Everything a record store keeps for a pet, minus its id.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: PetKind,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub age: AgeBracket,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: PetStatus,
    /// Found pet is being kept at the finder's home.
    #[serde(default)]
    pub retained: bool,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
    #[serde(default)]
    pub image: Option<ImageRef>,
    pub user_id: String,
    /// Owner or finder display name.
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub phone: String,
    /// Publication date as shown to users (d/m/yyyy).
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A pet record as read back from the store.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PetRecord {
    pub id: String,
    #[serde(flatten)]
    pub details: NewPet,
}

impl PetRecord {
    pub fn new(id: impl Into<String>, details: NewPet) -> Self {
        Self {
            id: id.into(),
            details,
        }
    }

    pub fn status(&self) -> PetStatus {
        self.details.status
    }

    pub fn user_id(&self) -> &str {
        &self.details.user_id
    }

    pub fn is_active(&self) -> bool {
        self.details.status.is_active()
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        !user_id.is_empty() && self.details.user_id == user_id
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.details.latitude, self.details.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_accepts_legacy_values() {
        assert_eq!(PetStatus::parse("perdido"), PetStatus::Lost);
        assert_eq!(PetStatus::parse("Encontrado"), PetStatus::Found);
        assert_eq!(PetStatus::parse("resuelto"), PetStatus::Resolved);
        assert_eq!(PetStatus::parse("adopted"), PetStatus::Unrecognized);
    }

    #[test]
    fn unknown_status_keeps_record_valid() {
        let json = r#"{"id":"p1","status":"adoptado","userId":"u1","name":"Tom"}"#;
        let record: PetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status(), PetStatus::Unrecognized);
        assert!(!record.is_active());
        assert_eq!(record.details.name, "Tom");
    }

    #[test]
    fn record_round_trips_store_field_names() {
        let json = r#"{
            "id": "p1",
            "name": "Luna",
            "type": "Perro",
            "gender": "hembra",
            "age": "adulto",
            "status": "perdido",
            "latitude": -34.6,
            "longitude": -58.5,
            "image": {"uri": "https://img/1.jpg"},
            "userId": "u1"
        }"#;
        let record: PetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.details.kind, PetKind::Dog);
        assert_eq!(record.details.gender, Gender::Female);
        assert_eq!(record.details.age, AgeBracket::Adult);
        assert_eq!(record.user_id(), "u1");

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "lost");
        assert_eq!(value["type"], "dog");
        assert_eq!(value["userId"], "u1");
    }

    #[test]
    fn active_statuses_only_move_to_resolved() {
        assert!(PetStatus::Lost.can_transition_to(PetStatus::Resolved));
        assert!(PetStatus::Found.can_transition_to(PetStatus::Resolved));
        assert!(!PetStatus::Lost.can_transition_to(PetStatus::Found));
        assert!(!PetStatus::Found.can_transition_to(PetStatus::Lost));
        assert!(PetStatus::Lost.can_transition_to(PetStatus::Lost));
    }

    #[test]
    fn resolved_is_terminal() {
        let err = PetStatus::Resolved.transition(PetStatus::Lost).unwrap_err();
        assert_eq!(err.from, PetStatus::Resolved);
        assert_eq!(err.to, PetStatus::Lost);
        assert!(PetStatus::Resolved.transition(PetStatus::Resolved).is_ok());
    }

    #[test]
    fn unrecognized_can_be_repaired() {
        assert!(PetStatus::Unrecognized.can_transition_to(PetStatus::Found));
        assert!(!PetStatus::Lost.can_transition_to(PetStatus::Unrecognized));
    }

    #[test]
    fn image_from_base64_builds_data_uri() {
        let image = ImageRef::from_base64("aGVsbG8=").unwrap();
        assert_eq!(image.uri, "data:image/jpeg;base64,aGVsbG8=");
        assert!(image.is_inline());
    }

    #[test]
    fn image_from_invalid_base64_fails() {
        assert!(ImageRef::from_base64("not base64!").is_err());
        assert!(ImageRef::from_base64("   ").is_err());
    }

    #[test]
    fn kind_icons_fall_back_to_paw() {
        assert_eq!(PetKind::parse("Tortuga").icon(), "🐢");
        assert_eq!(PetKind::parse("Mascota").icon(), "🐾");
    }

    #[test]
    fn ownership_requires_non_empty_user() {
        let record = PetRecord::new("p1", NewPet::default());
        assert!(!record.is_owned_by(""));
    }
}
