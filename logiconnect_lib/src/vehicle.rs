use serde::{Deserialize, Serialize};

/// Geocoded pickup and drop points, each as `[latitude, longitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinates {
    pub pickup_coordinates: (f64, f64),
    pub drop_coordinates: (f64, f64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VehicleSearch {
    pub capacity_in_kg: f64,
    pub pickup_latitude: f64,
    pub pickup_longitude: f64,
    pub drop_latitude: f64,
    pub drop_longitude: f64,
}

impl VehicleSearch {
    pub fn new(capacity_in_kg: f64, coordinates: &Coordinates) -> Self {
        let (pickup_latitude, pickup_longitude) = coordinates.pickup_coordinates;
        let (drop_latitude, drop_longitude) = coordinates.drop_coordinates;
        Self {
            capacity_in_kg,
            pickup_latitude,
            pickup_longitude,
            drop_latitude,
            drop_longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub registration_number: String,
    pub model_name: String,
    pub capacity_in_kg: f64,
    pub current_latitude: f64,
    pub current_longitude: f64,
    pub fuel_type: String,
    pub distance_from_pickup: f64,
    pub total_distance_km: f64,
    pub base_price: f64,
    pub gst: f64,
    pub platform_fee: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub driver_id: String,
    pub name: String,
    pub mobile: String,
    pub email: String,
}
