use async_trait::async_trait;

use crate::{
    Error,
    booking::{Booking, BookingConfirmation, NewBooking, OrderStatus},
    session::Session,
    user::{Credentials, LoginResponse, Signup, UserProfile},
    vehicle::{Coordinates, Driver, Vehicle, VehicleSearch},
};

/// The external backend. Browser futures are not `Send`, hence `?Send`.
///
/// Implementations map transport failures to [`Error::Network`], non-2xx
/// answers through [`Error::from_response`] and undecodable bodies to
/// [`Error::Decode`].
#[async_trait(?Send)]
pub trait BackendApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, Error>;

    /// Succeeds only on `201 Created`.
    async fn onboard(&self, signup: &Signup) -> Result<(), Error>;

    async fn profile(&self, session: &Session) -> Result<UserProfile, Error>;

    async fn coordinates(
        &self,
        session: &Session,
        pickup_address: &str,
        drop_address: &str,
    ) -> Result<Coordinates, Error>;

    async fn search_vehicles(
        &self,
        session: &Session,
        search: &VehicleSearch,
    ) -> Result<Vec<Vehicle>, Error>;

    async fn driver_for_vehicle(&self, session: &Session, vehicle_id: &str) -> Result<Driver, Error>;

    async fn create_booking(
        &self,
        session: &Session,
        booking: &NewBooking,
    ) -> Result<BookingConfirmation, Error>;

    async fn bookings(&self, session: &Session) -> Result<Vec<Booking>, Error>;

    async fn update_order_status(
        &self,
        session: &Session,
        booking_id: &str,
        new_status: OrderStatus,
    ) -> Result<(), Error>;
}
