use crate::{Error, booking::OrderStatus, config::ApiConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

/// Every backend route the front end talks to.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    Login,
    Onboard,
    Profile {
        user_id: &'a str,
    },
    Coordinates {
        pickup_address: &'a str,
        drop_address: &'a str,
        user_id: &'a str,
    },
    VehicleSearch {
        user_id: &'a str,
    },
    Driver {
        vehicle_id: &'a str,
        user_id: &'a str,
    },
    NewBooking {
        user_id: &'a str,
    },
    Bookings {
        user_id: &'a str,
    },
    UpdateOrderStatus {
        booking_id: &'a str,
        new_status: OrderStatus,
        user_id: &'a str,
    },
}

impl<'a> Endpoint<'a> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Login | Endpoint::Onboard | Endpoint::VehicleSearch { .. } | Endpoint::NewBooking { .. } => {
                Method::Post
            }
            Endpoint::UpdateOrderStatus { .. } => Method::Put,
            Endpoint::Profile { .. }
            | Endpoint::Coordinates { .. }
            | Endpoint::Driver { .. }
            | Endpoint::Bookings { .. } => Method::Get,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Login => "/user/login",
            Endpoint::Onboard => "/user/onboard",
            Endpoint::Profile { .. } => "/user/profile",
            Endpoint::Coordinates { .. } => "/booking/coordinates",
            Endpoint::VehicleSearch { .. } => "/vehicle/search",
            Endpoint::Driver { .. } => "/vehicle/search/driver",
            Endpoint::NewBooking { .. } => "/booking/new",
            Endpoint::Bookings { .. } => "/booking/",
            Endpoint::UpdateOrderStatus { .. } => "/booking/update-order-status",
        }
    }

    pub fn query(&self) -> Vec<(&'static str, &'a str)> {
        match *self {
            Endpoint::Login | Endpoint::Onboard => Vec::new(),
            Endpoint::Profile { user_id }
            | Endpoint::VehicleSearch { user_id }
            | Endpoint::NewBooking { user_id }
            | Endpoint::Bookings { user_id } => vec![("user_id", user_id)],
            Endpoint::Coordinates {
                pickup_address,
                drop_address,
                user_id,
            } => vec![
                ("pickup_address", pickup_address),
                ("drop_address", drop_address),
                ("user_id", user_id),
            ],
            Endpoint::Driver { vehicle_id, user_id } => {
                vec![("vehicle_id", vehicle_id), ("user_id", user_id)]
            }
            Endpoint::UpdateOrderStatus {
                booking_id,
                new_status,
                user_id,
            } => vec![
                ("booking_id", booking_id),
                ("new_status", new_status.as_str()),
                ("user_id", user_id),
            ],
        }
    }

    /// Everything but login and onboarding carries the bearer token.
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Endpoint::Login | Endpoint::Onboard)
    }

    pub fn url(&self, config: &ApiConfig) -> Result<String, Error> {
        config.url(self.path(), &self.query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BACKEND_URL;

    fn url(endpoint: Endpoint) -> String {
        endpoint.url(&ApiConfig::new(DEFAULT_BACKEND_URL)).unwrap()
    }

    #[test]
    fn builds_backend_routes() {
        assert_eq!(url(Endpoint::Login), "http://localhost:3001/user/login");
        assert_eq!(
            url(Endpoint::Profile { user_id: "u-1" }),
            "http://localhost:3001/user/profile?user_id=u-1"
        );
        assert_eq!(
            url(Endpoint::Coordinates {
                pickup_address: "MG Road, Bengaluru",
                drop_address: "Anna Nagar",
                user_id: "u-1",
            }),
            "http://localhost:3001/booking/coordinates?pickup_address=MG+Road%2C+Bengaluru&drop_address=Anna+Nagar&user_id=u-1"
        );
        assert_eq!(
            url(Endpoint::Driver {
                vehicle_id: "v-9",
                user_id: "u-1"
            }),
            "http://localhost:3001/vehicle/search/driver?vehicle_id=v-9&user_id=u-1"
        );
        assert_eq!(
            url(Endpoint::Bookings { user_id: "u-1" }),
            "http://localhost:3001/booking/?user_id=u-1"
        );
        assert_eq!(
            url(Endpoint::UpdateOrderStatus {
                booking_id: "b-1",
                new_status: OrderStatus::Received,
                user_id: "u-1",
            }),
            "http://localhost:3001/booking/update-order-status?booking_id=b-1&new_status=Received&user_id=u-1"
        );
    }

    #[test]
    fn methods_and_auth() {
        assert_eq!(Endpoint::Onboard.method(), Method::Post);
        assert_eq!(Endpoint::NewBooking { user_id: "u" }.method(), Method::Post);
        assert_eq!(Endpoint::Bookings { user_id: "u" }.method(), Method::Get);
        assert_eq!(
            Endpoint::UpdateOrderStatus {
                booking_id: "b",
                new_status: OrderStatus::Received,
                user_id: "u"
            }
            .method(),
            Method::Put
        );

        assert!(!Endpoint::Login.requires_auth());
        assert!(!Endpoint::Onboard.requires_auth());
        assert!(Endpoint::VehicleSearch { user_id: "u" }.requires_auth());
    }
}
