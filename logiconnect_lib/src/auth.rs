use tracing::{debug, warn};

use crate::{
    Error, ResultExt, Step,
    api::BackendApi,
    session::{Session, SessionStore},
    storage::KeyValueStore,
    user::{Credentials, Signup},
};

pub const SIGNUP_SUCCESS: &str = "Signup successful! Please check your email for verification.";
pub const LOGIN_SUCCESS: &str = "Login successful!";

/// Logs in and persists the resulting session. Nothing is written to the
/// store unless every step succeeded.
pub async fn login<A, S>(
    api: &A,
    store: &SessionStore<S>,
    credentials: &Credentials,
) -> Result<Session, Error>
where
    A: BackendApi + ?Sized,
    S: KeyValueStore,
{
    credentials.validate().at(Step::Login)?;

    let response = api.login(credentials).await.at(Step::Login)?;
    let session = response.into_session().at(Step::Login)?;

    store.persist(&session)?;
    debug!(user_id = %session.user_id, "logged in");

    Ok(session)
}

pub async fn signup<A>(api: &A, signup: &Signup) -> Result<(), Error>
where
    A: BackendApi + ?Sized,
{
    signup.validate().at(Step::Signup)?;

    if let Err(err) = api.onboard(signup).await {
        warn!(%err, "onboarding failed");
        return Err(err.at(Step::Signup));
    }

    debug!(email = %signup.email, "onboarded");
    Ok(())
}
