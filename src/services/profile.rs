use crate::forms::ProfileForm;

use super::error::ServiceError;
use super::{IdentityProvider, ProfileStore};

/// Draft for the profile screen; empty when no profile was saved yet.
pub async fn load_profile_form(
    identity: &dyn IdentityProvider,
    profiles: &dyn ProfileStore,
) -> Result<ProfileForm, ServiceError> {
    let user = identity.current_user().ok_or(ServiceError::NotSignedIn)?;
    let profile = profiles.get_profile(&user.id).await?;
    Ok(profile
        .as_ref()
        .map(ProfileForm::from_profile)
        .unwrap_or_default())
}

pub async fn save_profile(
    identity: &dyn IdentityProvider,
    profiles: &dyn ProfileStore,
    form: ProfileForm,
) -> Result<(), ServiceError> {
    let user = identity.current_user().ok_or(ServiceError::NotSignedIn)?;
    profiles
        .set_profile(&user.id, form.into_profile(&user.email))
        .await?;
    tracing::info!(user_id = %user.id, "Profile saved");
    Ok(())
}
