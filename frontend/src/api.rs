use async_trait::async_trait;
use gloo_console::error;
use gloo_net::http::{Request, RequestBuilder, Response};
use logiconnect_lib::{
    Error,
    api::BackendApi,
    booking::{Booking, BookingConfirmation, NewBooking, OrderStatus},
    config::ApiConfig,
    endpoint::{Endpoint, Method},
    session::Session,
    user::{Credentials, LoginResponse, Signup, UserProfile},
    vehicle::{Coordinates, Driver, Vehicle, VehicleSearch},
};
use serde::{Serialize, de::DeserializeOwned};

/// The backend over `fetch`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct HttpApi {
    config: ApiConfig,
}

impl HttpApi {
    pub fn new() -> Self {
        Self::default()
    }

    fn request(&self, endpoint: &Endpoint, session: Option<&Session>) -> Result<RequestBuilder, Error> {
        let url = endpoint.url(&self.config)?;

        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
        }
        .header("accept", "application/json");

        Ok(match session {
            Some(session) if endpoint.requires_auth() => {
                builder.header("Authorization", &session.bearer())
            }
            _ => builder,
        })
    }
}

async fn check(response: Response, expected: Option<u16>) -> Result<Response, Error> {
    let status = response.status();
    let accepted = match expected {
        Some(expected) => status == expected,
        None => response.ok(),
    };
    if accepted {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!(format!("{} {} -> {}", response.url(), status, body));
    Err(Error::from_response(status, &body))
}

async fn send(builder: RequestBuilder) -> Result<Response, Error> {
    let response = builder
        .send()
        .await
        .map_err(|err| Error::Network(err.to_string()))?;
    check(response, None).await
}

async fn send_json<B: Serialize>(builder: RequestBuilder, body: &B) -> Result<Response, Error> {
    let request = builder
        .json(body)
        .map_err(|err| Error::Network(err.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|err| Error::Network(err.to_string()))?;
    check(response, None).await
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    response
        .json::<T>()
        .await
        .map_err(|err| Error::Decode(err.to_string()))
}

#[async_trait(?Send)]
impl BackendApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, Error> {
        let builder = self.request(&Endpoint::Login, None)?;
        decode(send_json(builder, credentials).await?).await
    }

    async fn onboard(&self, signup: &Signup) -> Result<(), Error> {
        let request = self
            .request(&Endpoint::Onboard, None)?
            .json(signup)
            .map_err(|err| Error::Network(err.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|err| Error::Network(err.to_string()))?;

        // Only a created account counts
        check(response, Some(201)).await?;
        Ok(())
    }

    async fn profile(&self, session: &Session) -> Result<UserProfile, Error> {
        let endpoint = Endpoint::Profile {
            user_id: &session.user_id,
        };
        decode(send(self.request(&endpoint, Some(session))?).await?).await
    }

    async fn coordinates(
        &self,
        session: &Session,
        pickup_address: &str,
        drop_address: &str,
    ) -> Result<Coordinates, Error> {
        let endpoint = Endpoint::Coordinates {
            pickup_address,
            drop_address,
            user_id: &session.user_id,
        };
        decode(send(self.request(&endpoint, Some(session))?).await?).await
    }

    async fn search_vehicles(
        &self,
        session: &Session,
        search: &VehicleSearch,
    ) -> Result<Vec<Vehicle>, Error> {
        let endpoint = Endpoint::VehicleSearch {
            user_id: &session.user_id,
        };
        decode(send_json(self.request(&endpoint, Some(session))?, search).await?).await
    }

    async fn driver_for_vehicle(&self, session: &Session, vehicle_id: &str) -> Result<Driver, Error> {
        let endpoint = Endpoint::Driver {
            vehicle_id,
            user_id: &session.user_id,
        };
        decode(send(self.request(&endpoint, Some(session))?).await?).await
    }

    async fn create_booking(
        &self,
        session: &Session,
        booking: &NewBooking,
    ) -> Result<BookingConfirmation, Error> {
        let endpoint = Endpoint::NewBooking {
            user_id: &session.user_id,
        };
        decode(send_json(self.request(&endpoint, Some(session))?, booking).await?).await
    }

    async fn bookings(&self, session: &Session) -> Result<Vec<Booking>, Error> {
        let endpoint = Endpoint::Bookings {
            user_id: &session.user_id,
        };
        decode(send(self.request(&endpoint, Some(session))?).await?).await
    }

    async fn update_order_status(
        &self,
        session: &Session,
        booking_id: &str,
        new_status: OrderStatus,
    ) -> Result<(), Error> {
        let endpoint = Endpoint::UpdateOrderStatus {
            booking_id,
            new_status,
            user_id: &session.user_id,
        };
        send(self.request(&endpoint, Some(session))?).await?;
        Ok(())
    }
}
