use std::{
    cell::RefCell,
    collections::VecDeque,
};

use async_trait::async_trait;

use crate::{
    Error,
    api::BackendApi,
    booking::{
        Booking, BookingConfirmation, DeliveryStatus, DriverDetails, NewBooking, OrderStatus,
        RequestStatus,
    },
    session::{Role, Session},
    user::{Credentials, LoginResponse, Signup, UserProfile},
    vehicle::{Coordinates, Driver, Vehicle, VehicleSearch},
};

type Replies<T> = RefCell<VecDeque<Result<T, Error>>>;

/// Backend double: each call pops the next scripted reply for its route and
/// records its name. An unscripted call fails like a dropped connection.
#[derive(Default)]
pub struct MockApi {
    pub login: Replies<LoginResponse>,
    pub onboard: Replies<()>,
    pub profile: Replies<UserProfile>,
    pub coordinates: Replies<Coordinates>,
    pub search_vehicles: Replies<Vec<Vehicle>>,
    pub driver: Replies<Driver>,
    pub create_booking: Replies<BookingConfirmation>,
    pub bookings: Replies<Vec<Booking>>,
    pub update_order_status: Replies<()>,

    pub calls: RefCell<Vec<&'static str>>,
    pub last_search: RefCell<Option<VehicleSearch>>,
    pub last_booking: RefCell<Option<NewBooking>>,
    pub last_status_update: RefCell<Option<(String, OrderStatus)>>,
}

pub fn script<T>(replies: &Replies<T>, reply: Result<T, Error>) {
    replies.borrow_mut().push_back(reply);
}

impl MockApi {
    fn reply<T>(&self, name: &'static str, replies: &Replies<T>) -> Result<T, Error> {
        self.calls.borrow_mut().push(name);
        replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Network(format!("no reply scripted for {name}"))))
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl BackendApi for MockApi {
    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse, Error> {
        self.reply("login", &self.login)
    }

    async fn onboard(&self, _signup: &Signup) -> Result<(), Error> {
        self.reply("onboard", &self.onboard)
    }

    async fn profile(&self, _session: &Session) -> Result<UserProfile, Error> {
        self.reply("profile", &self.profile)
    }

    async fn coordinates(
        &self,
        _session: &Session,
        _pickup_address: &str,
        _drop_address: &str,
    ) -> Result<Coordinates, Error> {
        self.reply("coordinates", &self.coordinates)
    }

    async fn search_vehicles(
        &self,
        _session: &Session,
        search: &VehicleSearch,
    ) -> Result<Vec<Vehicle>, Error> {
        *self.last_search.borrow_mut() = Some(search.clone());
        self.reply("search_vehicles", &self.search_vehicles)
    }

    async fn driver_for_vehicle(&self, _session: &Session, _vehicle_id: &str) -> Result<Driver, Error> {
        self.reply("driver", &self.driver)
    }

    async fn create_booking(
        &self,
        _session: &Session,
        booking: &NewBooking,
    ) -> Result<BookingConfirmation, Error> {
        *self.last_booking.borrow_mut() = Some(booking.clone());
        self.reply("create_booking", &self.create_booking)
    }

    async fn bookings(&self, _session: &Session) -> Result<Vec<Booking>, Error> {
        self.reply("bookings", &self.bookings)
    }

    async fn update_order_status(
        &self,
        _session: &Session,
        booking_id: &str,
        new_status: OrderStatus,
    ) -> Result<(), Error> {
        *self.last_status_update.borrow_mut() = Some((booking_id.to_owned(), new_status));
        self.reply("update_order_status", &self.update_order_status)
    }
}

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn user_session() -> Session {
    Session::new("token-1", "u-1", Role::User)
}

pub fn coordinates() -> Coordinates {
    Coordinates {
        pickup_coordinates: (12.97, 77.59),
        drop_coordinates: (12.96, 77.75),
    }
}

pub fn vehicle(vehicle_id: &str) -> Vehicle {
    Vehicle {
        vehicle_id: vehicle_id.to_owned(),
        registration_number: format!("KA-01-{vehicle_id}"),
        model_name: "Tata Ace".to_owned(),
        capacity_in_kg: 1500.0,
        current_latitude: 12.95,
        current_longitude: 77.60,
        fuel_type: "Diesel".to_owned(),
        distance_from_pickup: 2.4,
        total_distance_km: 17.2,
        base_price: 1000.0,
        gst: 180.0,
        platform_fee: 20.0,
        total_price: 1200.0,
    }
}

pub fn driver(driver_id: &str) -> Driver {
    Driver {
        driver_id: driver_id.to_owned(),
        name: "Ravi".to_owned(),
        mobile: "9000000001".to_owned(),
        email: "ravi@example.com".to_owned(),
    }
}

pub fn profile() -> UserProfile {
    UserProfile {
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        country: "+91".to_owned(),
        state: "Karnataka".to_owned(),
        phone_number: "9000000000".to_owned(),
        role: "user".to_owned(),
    }
}

pub fn booking(booking_id: &str, request_status: RequestStatus, delivery_status: DeliveryStatus) -> Booking {
    Booking {
        booking_id: booking_id.to_owned(),
        pickup_location: "Indiranagar".to_owned(),
        drop_location: "Whitefield".to_owned(),
        distance_to_cover: 14.5,
        estimated_delivery_time: 1.5,
        total_price: 1180.0,
        request_status,
        delivery_status,
        driver_details: DriverDetails {
            name: "Ravi".to_owned(),
            email: "ravi@example.com".to_owned(),
            mobile: "9000000001".to_owned(),
        },
    }
}
