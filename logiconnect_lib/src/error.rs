use serde::Deserialize;

/// The backend call or user action an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Login,
    Signup,
    Profile,
    Coordinates,
    VehicleSearch,
    Driver,
    CreateBooking,
    Bookings,
    UpdateOrderStatus,
}

impl Step {
    /// Shown when the backend answered with a non-2xx status.
    pub fn failure_text(self) -> &'static str {
        match self {
            Step::Login => "Invalid email or password.",
            Step::Signup => "Signup failed! Please try again.",
            Step::Profile => "Failed to fetch user profile.",
            Step::Coordinates => "Failed to fetch coordinates.",
            Step::VehicleSearch => "Failed to fetch vehicle details.",
            Step::Driver => "Failed to fetch driver details.",
            Step::CreateBooking => "Failed to confirm booking.",
            Step::Bookings => "Failed to fetch bookings.",
            Step::UpdateOrderStatus => "Failed to update order status.",
        }
    }

    /// Shown when the request never produced a usable response.
    pub fn network_text(self) -> &'static str {
        match self {
            Step::Login => "An error occurred while logging in. Please try again.",
            Step::Signup => "An error occurred. Please try again later.",
            Step::Profile | Step::Bookings => "An error occurred while fetching user data.",
            Step::Coordinates | Step::VehicleSearch => "An error occurred during booking.",
            Step::Driver => "An error occurred while fetching driver details.",
            Step::CreateBooking => "An error occurred while confirming the booking.",
            Step::UpdateOrderStatus => "An error occurred while updating order status.",
        }
    }

    fn surfaces_server_message(self) -> bool {
        matches!(self, Step::Signup | Step::CreateBooking)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("network error: {0}")]
    Network(String),
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("request unauthorized with status {status}")]
    Unauthorized { status: u16 },
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid value for `{0}`")]
    InvalidValue(&'static str),
    #[error("login response carried neither a user id nor a driver id")]
    UnknownAccount,
    #[error("no active session")]
    NotLoggedIn,
    #[error("cannot {action} while {actual}")]
    InvalidStep {
        action: &'static str,
        actual: &'static str,
    },
    #[error("vehicle {0} is not part of the current search results")]
    UnknownVehicle(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("{step:?} failed: {source}")]
    Step { step: Step, source: Box<Error> },
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    detail: Option<serde_json::Value>,
}

impl Error {
    /// Classifies a non-2xx response. 401 and 403 end the session, anything
    /// else is a plain rejection carrying the server's message if it sent one.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 || status == 403 {
            return Error::Unauthorized { status };
        }

        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| {
                body.message.or(match body.detail {
                    Some(serde_json::Value::String(detail)) => Some(detail),
                    _ => None,
                })
            })
            .filter(|message| !message.trim().is_empty());

        Error::Rejected { status, message }
    }

    pub fn at(self, step: Step) -> Self {
        match self {
            Error::Step { .. } => self,
            other => Error::Step {
                step,
                source: Box::new(other),
            },
        }
    }

    pub fn step(&self) -> Option<Step> {
        match self {
            Error::Step { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// The error with any step context stripped.
    pub fn root(&self) -> &Error {
        match self {
            Error::Step { source, .. } => source.root(),
            other => other,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.root(), Error::Unauthorized { .. })
    }

    /// True when the backend answered at all, but not with success.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.root(),
            Error::Rejected { .. } | Error::Unauthorized { .. }
        )
    }

    /// Text for the transient notification shown to the user.
    pub fn notification(&self) -> String {
        match self {
            Error::Step { step, source } => match source.as_ref() {
                Error::Network(_) | Error::Decode(_) => step.network_text().to_owned(),
                Error::Rejected {
                    message: Some(message),
                    ..
                } if step.surfaces_server_message() => message.clone(),
                Error::Rejected { .. } | Error::Unauthorized { .. } => {
                    step.failure_text().to_owned()
                }
                other => other.notification(),
            },
            Error::MissingField(_) => "Please fill in all fields.".to_owned(),
            Error::InvalidValue("capacity") => "Vehicle capacity must be a non-negative number.".to_owned(),
            Error::InvalidValue(field) => format!("Please enter a valid {field}."),
            Error::UnknownAccount => "User ID or Driver ID not found in the response.".to_owned(),
            Error::NotLoggedIn => "Please log in to continue.".to_owned(),
            Error::UnknownVehicle(_) => "The selected vehicle is no longer available.".to_owned(),
            other => other.to_string(),
        }
    }
}

pub trait ResultExt<T> {
    fn at(self, step: Step) -> Result<T, Error>;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn at(self, step: Step) -> Result<T, Error> {
        self.map_err(|err| err.at(step))
    }
}
