use serde::{Deserialize, Serialize};

use crate::{
    Error,
    session::{Role, Session},
};

pub const DEFAULT_COUNTRY_CODE: &str = "+91";

fn require(value: &str, field: &'static str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        require(&self.email, "email")?;
        require(&self.password, "password")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub userid: Option<String>,
    #[serde(default)]
    pub driverid: Option<String>,
}

impl LoginResponse {
    /// A user id wins over a driver id; a response with neither is refused.
    pub fn into_session(self) -> Result<Session, Error> {
        let non_empty = |id: Option<String>| id.filter(|id| !id.is_empty());

        let (user_id, role) = match (non_empty(self.userid), non_empty(self.driverid)) {
            (Some(user_id), _) => (user_id, Role::User),
            (None, Some(driver_id)) => (driver_id, Role::Driver),
            (None, None) => return Err(Error::UnknownAccount),
        };

        if self.access_token.is_empty() {
            return Err(Error::Decode("login response carried an empty access token".into()));
        }

        Ok(Session::new(self.access_token, user_id, role))
    }
}

/// Onboarding form. `country` doubles as the phone country code.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signup {
    pub name: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub country_code: String,
    pub phone_number: String,
    pub password: String,
}

impl Default for Signup {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            country: DEFAULT_COUNTRY_CODE.to_owned(),
            state: String::new(),
            country_code: DEFAULT_COUNTRY_CODE.to_owned(),
            phone_number: String::new(),
            password: String::new(),
        }
    }
}

impl Signup {
    pub fn set_country(&mut self, country: String) {
        self.country_code = country.clone();
        self.country = country;
    }

    pub fn validate(&self) -> Result<(), Error> {
        require(&self.name, "name")?;
        require(&self.email, "email")?;
        require(&self.country, "country")?;
        require(&self.state, "state")?;
        require(&self.phone_number, "phone_number")?;
        require(&self.password, "password")
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub country: String,
    pub state: String,
    pub phone_number: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_derives_role() {
        let user: LoginResponse =
            serde_json::from_str(r#"{"access_token":"t","token_type":"bearer","userid":"u-1"}"#).unwrap();
        assert_eq!(user.into_session().unwrap(), Session::new("t", "u-1", Role::User));

        let driver: LoginResponse =
            serde_json::from_str(r#"{"access_token":"t","driverid":"d-1"}"#).unwrap();
        assert_eq!(driver.into_session().unwrap(), Session::new("t", "d-1", Role::Driver));

        let nobody: LoginResponse =
            serde_json::from_str(r#"{"access_token":"t","userid":""}"#).unwrap();
        assert_eq!(nobody.into_session(), Err(Error::UnknownAccount));
    }

    #[test]
    fn credentials_require_both_fields() {
        assert_eq!(
            Credentials::new(" ", "pw").validate(),
            Err(Error::MissingField("email"))
        );
        assert_eq!(
            Credentials::new("a@b.c", "").validate(),
            Err(Error::MissingField("password"))
        );
        assert!(Credentials::new("a@b.c", "pw").validate().is_ok());
    }

    #[test]
    fn signup_mirrors_country_into_country_code() {
        let mut signup = Signup::default();
        assert_eq!(signup.country_code, "+91");

        signup.set_country("+45".into());
        assert_eq!(signup.country, "+45");
        assert_eq!(signup.country_code, "+45");
        assert_eq!(signup.validate(), Err(Error::MissingField("name")));

        signup.name = "Asha".into();
        signup.email = "asha@example.com".into();
        signup.state = "Karnataka".into();
        signup.phone_number = "9000000000".into();
        assert_eq!(signup.validate(), Err(Error::MissingField("password")));

        signup.password = "secret".into();
        assert!(signup.validate().is_ok());
    }
}
