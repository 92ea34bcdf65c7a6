use crate::domain::CurrentUser;
use crate::forms::SignUpForm;

use super::error::ServiceError;
use super::IdentityProvider;

/// Create an account after the form passes validation.
pub async fn sign_up(
    identity: &dyn IdentityProvider,
    form: &SignUpForm,
) -> Result<CurrentUser, ServiceError> {
    form.validate()?;
    let user = identity
        .sign_up(form.email.trim(), &form.password, &form.display_name())
        .await?;
    tracing::info!(user_id = %user.id, "Account created");
    Ok(user)
}

pub async fn sign_in(
    identity: &dyn IdentityProvider,
    email: &str,
    password: &str,
) -> Result<CurrentUser, ServiceError> {
    let user = identity.sign_in(email.trim(), password).await?;
    tracing::info!(user_id = %user.id, "Signed in");
    Ok(user)
}

pub async fn sign_out(identity: &dyn IdentityProvider) -> Result<(), ServiceError> {
    identity.sign_out().await?;
    tracing::info!("Signed out");
    Ok(())
}
