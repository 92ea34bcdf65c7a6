use crate::domain::{ImageRef, UserProfile};

/// Draft behind the "edit profile" screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileForm {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub address: String,
    /// Inline photo (data URI).
    pub photo: Option<String>,
}

impl ProfileForm {
    pub fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            surname: profile.surname.clone(),
            phone: profile.phone.clone(),
            address: profile.address.clone(),
            photo: profile.photo.clone(),
        }
    }

    pub fn set_photo(&mut self, image: ImageRef) {
        self.photo = Some(image.uri);
    }

    /// Profile document to save. The email always comes from the auth
    /// account, never from user input.
    pub fn into_profile(self, email: &str) -> UserProfile {
        UserProfile {
            name: self.name.trim().to_string(),
            surname: self.surname.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
            photo: self.photo.filter(|photo| !photo.is_empty()),
            email: email.to_string(),
        }
    }
}
