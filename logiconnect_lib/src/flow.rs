//! The booking wizard: search for vehicles, pick one, confirm the booking.
//!
//! Each operation is one round trip (two for the search). An operation only
//! changes the stage when every call it made succeeded, so a failure leaves
//! the wizard where it was and the user can simply try again.

use tracing::debug;

use crate::{
    Error, ResultExt, Step,
    api::BackendApi,
    booking::{BookingConfirmation, NewBooking},
    session::Session,
    vehicle::{Driver, Vehicle, VehicleSearch},
};

pub const DEFAULT_CAPACITY_KG: f64 = 1500.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub pickup: String,
    pub drop: String,
    pub capacity_in_kg: f64,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            pickup: String::new(),
            drop: String::new(),
            capacity_in_kg: DEFAULT_CAPACITY_KG,
        }
    }
}

impl SearchQuery {
    pub fn validate(&self) -> Result<(), Error> {
        if self.pickup.trim().is_empty() {
            return Err(Error::MissingField("pickup"));
        }
        if self.drop.trim().is_empty() {
            return Err(Error::MissingField("drop"));
        }
        if !self.capacity_in_kg.is_finite() || self.capacity_in_kg < 0.0 {
            return Err(Error::InvalidValue("capacity"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Stage {
    #[default]
    Searching,
    Selecting {
        query: SearchQuery,
        vehicles: Vec<Vehicle>,
    },
    Confirming {
        query: SearchQuery,
        vehicle: Vehicle,
        driver: Driver,
    },
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::Searching => "searching",
            Stage::Selecting { .. } => "selecting",
            Stage::Confirming { .. } => "confirming",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingFlow {
    stage: Stage,
}

impl BookingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Search results, empty outside the selecting stage.
    pub fn vehicles(&self) -> &[Vehicle] {
        match &self.stage {
            Stage::Selecting { vehicles, .. } => vehicles,
            _ => &[],
        }
    }

    pub fn selection(&self) -> Option<(&Vehicle, &Driver)> {
        match &self.stage {
            Stage::Confirming { vehicle, driver, .. } => Some((vehicle, driver)),
            _ => None,
        }
    }

    fn invalid(&self, action: &'static str) -> Error {
        Error::InvalidStep {
            action,
            actual: self.stage.name(),
        }
    }

    /// Geocodes both addresses, then looks for vehicles with the requested
    /// capacity. Allowed again while selecting, to refine the search.
    /// Returns how many vehicles were found.
    pub async fn search<A>(&mut self, api: &A, session: &Session, query: SearchQuery) -> Result<usize, Error>
    where
        A: BackendApi + ?Sized,
    {
        if matches!(self.stage, Stage::Confirming { .. }) {
            return Err(self.invalid("search"));
        }
        query.validate()?;

        let coordinates = api
            .coordinates(session, &query.pickup, &query.drop)
            .await
            .at(Step::Coordinates)?;

        let search = VehicleSearch::new(query.capacity_in_kg, &coordinates);
        let vehicles = api
            .search_vehicles(session, &search)
            .await
            .at(Step::VehicleSearch)?;

        let found = vehicles.len();
        debug!(found, pickup = %query.pickup, drop = %query.drop, "vehicle search finished");
        self.stage = Stage::Selecting { query, vehicles };

        Ok(found)
    }

    /// Picks a vehicle from the current results and fetches its driver.
    pub async fn select_vehicle<A>(&mut self, api: &A, session: &Session, vehicle_id: &str) -> Result<(), Error>
    where
        A: BackendApi + ?Sized,
    {
        let (query, vehicle) = match &self.stage {
            Stage::Selecting { query, vehicles } => {
                let vehicle = vehicles
                    .iter()
                    .find(|vehicle| vehicle.vehicle_id == vehicle_id)
                    .cloned()
                    .ok_or_else(|| Error::UnknownVehicle(vehicle_id.to_owned()))?;
                (query.clone(), vehicle)
            }
            _ => return Err(self.invalid("select a vehicle")),
        };

        let driver = api
            .driver_for_vehicle(session, &vehicle.vehicle_id)
            .await
            .at(Step::Driver)?;

        debug!(vehicle_id = %vehicle.vehicle_id, driver_id = %driver.driver_id, "vehicle selected");
        self.stage = Stage::Confirming { query, vehicle, driver };

        Ok(())
    }

    /// Creates the booking. The flow stays in confirming either way; on
    /// success the caller moves on to the dashboard.
    pub async fn confirm<A>(&self, api: &A, session: &Session) -> Result<BookingConfirmation, Error>
    where
        A: BackendApi + ?Sized,
    {
        let Stage::Confirming { query, vehicle, driver } = &self.stage else {
            return Err(self.invalid("confirm a booking"));
        };

        let booking = NewBooking {
            user_id: session.user_id.clone(),
            vehicle_id: vehicle.vehicle_id.clone(),
            driver_id: driver.driver_id.clone(),
            pickup_location: query.pickup.clone(),
            drop_location: query.drop.clone(),
        };

        let confirmation = api
            .create_booking(session, &booking)
            .await
            .at(Step::CreateBooking)?;
        debug!(message = %confirmation.message, "booking created");

        Ok(confirmation)
    }
}
