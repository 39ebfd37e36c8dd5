use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Accepted => "Accepted",
            RequestStatus::Rejected => "Rejected",
            RequestStatus::Completed => "Completed",
            RequestStatus::Unknown => "Unknown",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "Pending Pickup")]
    PendingPickup,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeliveryStatus::PendingPickup => "Pending Pickup",
            DeliveryStatus::InTransit => "In Transit",
            DeliveryStatus::OutForDelivery => "Out for Delivery",
            DeliveryStatus::Delivered => "Delivered",
            DeliveryStatus::Canceled => "Canceled",
            DeliveryStatus::Unknown => "Unknown",
        })
    }
}

/// Order status the customer can move a booking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Received,
}

impl OrderStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Received => "Received",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DriverDetails {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Booking {
    pub booking_id: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub distance_to_cover: f64,
    /// Hours.
    pub estimated_delivery_time: f64,
    pub total_price: f64,
    pub request_status: RequestStatus,
    pub delivery_status: DeliveryStatus,
    pub driver_details: DriverDetails,
}

pub const BOOKING_COLUMNS: [&str; 11] = [
    "Pickup Location",
    "Drop Location",
    "Distance",
    "Delivery Time (hrs)",
    "Total Price",
    "Request Status",
    "Delivery Status",
    "Driver Name",
    "Driver Email",
    "Driver Mobile",
    "Actions",
];

impl Booking {
    /// Accepted and delivered, but the customer has not confirmed receipt.
    pub fn awaiting_receipt(&self) -> bool {
        self.request_status == RequestStatus::Accepted
            && self.delivery_status == DeliveryStatus::Delivered
    }

    /// Data cells of a dashboard row, in `BOOKING_COLUMNS` order minus the
    /// trailing actions column.
    pub fn table_cells(&self) -> [String; 10] {
        [
            self.pickup_location.clone(),
            self.drop_location.clone(),
            self.distance_to_cover.to_string(),
            self.estimated_delivery_time.to_string(),
            self.total_price.to_string(),
            self.request_status.to_string(),
            self.delivery_status.to_string(),
            self.driver_details.name.clone(),
            self.driver_details.email.clone(),
            self.driver_details.mobile.clone(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBooking {
    pub user_id: String,
    pub vehicle_id: String,
    pub driver_id: String,
    pub pickup_location: String,
    pub drop_location: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingDetails {
    pub booking_id: String,
    pub pickup_location: String,
    pub drop_location: String,
    pub total_distance: f64,
    pub estimated_delivery_time: f64,
    pub base_price: f64,
    pub gst: f64,
    pub platform_fee: f64,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookingConfirmation {
    pub message: String,
    #[serde(default)]
    pub details: Option<BookingDetails>,
}
