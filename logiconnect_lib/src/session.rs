use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, storage::KeyValueStore};

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const USER_ID_KEY: &str = "userid";
pub const ROLE_KEY: &str = "role";

pub const SESSION_KEYS: [&str; 3] = [ACCESS_TOKEN_KEY, USER_ID_KEY, ROLE_KEY];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Driver,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Driver => "driver",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "user" => Some(Role::User),
            "driver" => Some(Role::Driver),
            _ => None,
        }
    }

    /// Path a freshly logged in actor lands on.
    pub fn landing_route(self) -> &'static str {
        match self {
            Role::User => "/user/profile",
            Role::Driver => "/driver/profile",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user_id: String,
    pub role: Role,
}

impl Session {
    pub fn new(access_token: impl Into<String>, user_id: impl Into<String>, role: Role) -> Self {
        Self {
            access_token: access_token.into(),
            user_id: user_id.into(),
            role,
        }
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn landing_route(&self) -> &'static str {
        self.role.landing_route()
    }
}

/// The persisted session, kept under the `access_token`, `userid` and `role`
/// keys of the underlying store.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Token and user id must both be present. A missing role reads as a user,
    /// since older sessions were stored without one.
    pub fn get_session(&self) -> Option<Session> {
        let access_token = self.storage.get(ACCESS_TOKEN_KEY).filter(|v| !v.is_empty())?;
        let user_id = self.storage.get(USER_ID_KEY).filter(|v| !v.is_empty())?;
        let role = self
            .storage
            .get(ROLE_KEY)
            .and_then(|role| Role::parse(&role))
            .unwrap_or_default();

        Some(Session {
            access_token,
            user_id,
            role,
        })
    }

    pub fn require_session(&self) -> Result<Session, Error> {
        self.get_session().ok_or(Error::NotLoggedIn)
    }

    pub fn persist(&self, session: &Session) -> Result<(), Error> {
        self.storage.set(ACCESS_TOKEN_KEY, &session.access_token)?;
        self.storage.set(USER_ID_KEY, &session.user_id)?;
        self.storage.set(ROLE_KEY, session.role.as_str())?;
        debug!(user_id = %session.user_id, role = session.role.as_str(), "session persisted");
        Ok(())
    }

    /// Removes every session key, even when an earlier removal fails. The
    /// first failure is reported.
    pub fn logout(&self) -> Result<(), Error> {
        let mut result = Ok(());
        for key in SESSION_KEYS {
            if let Err(err) = self.storage.remove(key) {
                warn!(key, %err, "failed to remove session key");
                if result.is_ok() {
                    result = Err(err);
                }
            }
        }
        debug!("session cleared");
        result
    }

    /// Clears the session when the backend refused the token. Returns whether
    /// it did, so the caller knows to send the user back to login.
    pub fn reject_if_unauthorized(&self, err: &Error) -> bool {
        if !err.is_unauthorized() {
            return false;
        }

        warn!(%err, "backend rejected the session");
        if let Err(err) = self.logout() {
            warn!(%err, "session could not be fully cleared");
        }
        true
    }
}
