use tracing::{debug, warn};

use crate::{
    Error, ResultExt, Step,
    api::BackendApi,
    booking::{Booking, OrderStatus},
    session::{Session, SessionStore},
    storage::KeyValueStore,
    user::UserProfile,
};

pub const NO_BOOKINGS: &str = "No bookings found.";
pub const ORDER_RECEIVED: &str = "Order status updated successfully!";

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub profile: UserProfile,
    pub bookings: Vec<Booking>,
    /// Set when the profile loaded but the booking list did not.
    pub notice: Option<Error>,
}

/// A booking the backend has marked as received.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// The re-fetched list, when the re-fetch worked.
    pub bookings: Option<Vec<Booking>>,
    /// Why the list could not be re-fetched. The status update still stands.
    pub notice: Option<Error>,
}

/// What a failed dashboard load did to the stored session. Either way the
/// user is sent back to login.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    /// The backend refused the profile, so the session was cleared.
    SessionDropped,
    /// The backend could not be reached; the session stays for the next try.
    SessionKept,
}

impl LoadFailure {
    pub fn of(err: &Error) -> Self {
        if err.is_rejection() {
            LoadFailure::SessionDropped
        } else {
            LoadFailure::SessionKept
        }
    }
}

/// What the bookings section shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BookingsView<'a> {
    Empty(&'static str),
    Table(&'a [Booking]),
}

impl Dashboard {
    pub fn bookings_view(&self) -> BookingsView<'_> {
        bookings_view(&self.bookings)
    }
}

pub fn bookings_view(bookings: &[Booking]) -> BookingsView<'_> {
    if bookings.is_empty() {
        BookingsView::Empty(NO_BOOKINGS)
    } else {
        BookingsView::Table(bookings)
    }
}

/// Fetches the profile, then the bookings.
///
/// The profile doubles as the session check: if the backend refuses it, the
/// stored session is cleared and the error returned. A failed booking list
/// still yields a dashboard, with the failure kept in `notice`.
pub async fn load<A, S>(api: &A, store: &SessionStore<S>, session: &Session) -> Result<Dashboard, Error>
where
    A: BackendApi + ?Sized,
    S: KeyValueStore,
{
    let profile = match api.profile(session).await.at(Step::Profile) {
        Ok(profile) => profile,
        Err(err) => {
            if LoadFailure::of(&err) == LoadFailure::SessionDropped {
                warn!(%err, "profile refused, dropping session");
                if let Err(err) = store.logout() {
                    warn!(%err, "session could not be fully cleared");
                }
            }
            return Err(err);
        }
    };

    let (bookings, notice) = match api.bookings(session).await.at(Step::Bookings) {
        Ok(bookings) => (bookings, None),
        Err(err) => {
            warn!(%err, "booking list unavailable");
            (Vec::new(), Some(err))
        }
    };

    debug!(bookings = bookings.len(), "dashboard loaded");
    Ok(Dashboard {
        profile,
        bookings,
        notice,
    })
}

/// Marks a delivered booking as received, then re-fetches the list.
///
/// Only the status update can fail the call. A failed re-fetch is reported in
/// the receipt so the caller still confirms the update and keeps its old list.
pub async fn confirm_received<A>(api: &A, session: &Session, booking_id: &str) -> Result<Receipt, Error>
where
    A: BackendApi + ?Sized,
{
    api.update_order_status(session, booking_id, OrderStatus::Received)
        .await
        .at(Step::UpdateOrderStatus)?;
    debug!(booking_id, "order marked as received");

    Ok(match api.bookings(session).await.at(Step::Bookings) {
        Ok(bookings) => Receipt {
            bookings: Some(bookings),
            notice: None,
        },
        Err(err) => {
            warn!(%err, "booking list unavailable after receipt");
            Receipt {
                bookings: None,
                notice: Some(err),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{
        booking::{DeliveryStatus, RequestStatus},
        storage::MemoryStorage,
        testing::{MockApi, booking, init_logging, profile, script, user_session},
    };

    fn logged_in() -> SessionStore<MemoryStorage> {
        let store = SessionStore::new(MemoryStorage::new());
        store.persist(&user_session()).unwrap();
        store
    }

    #[test]
    fn empty_booking_list_shows_the_empty_message() {
        init_logging();
        let api = MockApi::default();
        let store = logged_in();
        script(&api.profile, Ok(profile()));
        script(&api.bookings, Ok(Vec::new()));

        let dashboard = block_on(load(&api, &store, &user_session())).unwrap();

        assert_eq!(dashboard.bookings_view(), BookingsView::Empty("No bookings found."));
        assert_eq!(dashboard.notice, None);
        assert_eq!(api.calls(), vec!["profile", "bookings"]);
    }

    #[test]
    fn populated_list_shows_a_table() {
        let api = MockApi::default();
        let store = logged_in();
        let rows = vec![
            booking("b-1", RequestStatus::Accepted, DeliveryStatus::Delivered),
            booking("b-2", RequestStatus::Pending, DeliveryStatus::PendingPickup),
        ];
        script(&api.profile, Ok(profile()));
        script(&api.bookings, Ok(rows.clone()));

        let dashboard = block_on(load(&api, &store, &user_session())).unwrap();

        match dashboard.bookings_view() {
            BookingsView::Table(shown) => {
                assert_eq!(shown, rows.as_slice());
                assert!(shown[0].awaiting_receipt());
                assert!(!shown[1].awaiting_receipt());
            }
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn refused_profile_drops_the_session() {
        let api = MockApi::default();
        let store = logged_in();
        script(&api.profile, Err(Error::from_response(404, r#"{"detail":"User not found"}"#)));

        let err = block_on(load(&api, &store, &user_session())).unwrap_err();

        assert_eq!(LoadFailure::of(&err), LoadFailure::SessionDropped);
        assert_eq!(err.notification(), "Failed to fetch user profile.");
        assert_eq!(store.get_session(), None);
        assert_eq!(api.calls(), vec!["profile"]);
    }

    #[test]
    fn unreachable_backend_keeps_the_session() {
        let api = MockApi::default();
        let store = logged_in();
        script(&api.profile, Err(Error::Network("offline".into())));

        let err = block_on(load(&api, &store, &user_session())).unwrap_err();

        assert_eq!(LoadFailure::of(&err), LoadFailure::SessionKept);
        assert_eq!(err.notification(), "An error occurred while fetching user data.");
        assert_eq!(store.get_session(), Some(user_session()));
    }

    #[test]
    fn failed_booking_list_still_renders_the_profile() {
        let api = MockApi::default();
        let store = logged_in();
        script(&api.profile, Ok(profile()));
        script(&api.bookings, Err(Error::from_response(500, "")));

        let dashboard = block_on(load(&api, &store, &user_session())).unwrap();

        assert_eq!(dashboard.profile.name, "Asha");
        assert_eq!(dashboard.bookings_view(), BookingsView::Empty(NO_BOOKINGS));
        assert_eq!(
            dashboard.notice.map(|err| err.notification()).as_deref(),
            Some("Failed to fetch bookings.")
        );
    }

    #[test]
    fn confirming_receipt_refetches_the_list() {
        let api = MockApi::default();
        script(&api.update_order_status, Ok(()));
        script(
            &api.bookings,
            Ok(vec![booking("b-1", RequestStatus::Completed, DeliveryStatus::Delivered)]),
        );

        let receipt = block_on(confirm_received(&api, &user_session(), "b-1")).unwrap();

        assert_eq!(receipt.notice, None);
        let bookings = receipt.bookings.unwrap();
        assert_eq!(bookings[0].request_status, RequestStatus::Completed);
        assert_eq!(
            api.last_status_update.borrow().clone(),
            Some(("b-1".to_owned(), OrderStatus::Received))
        );
        assert_eq!(api.calls(), vec!["update_order_status", "bookings"]);
    }

    #[test]
    fn receipt_stands_when_the_refetch_fails() {
        init_logging();
        let api = MockApi::default();
        script(&api.update_order_status, Ok(()));
        script(&api.bookings, Err(Error::from_response(500, "")));

        let receipt = block_on(confirm_received(&api, &user_session(), "b-1")).unwrap();

        assert_eq!(receipt.bookings, None);
        assert_eq!(
            receipt.notice.map(|err| err.notification()).as_deref(),
            Some("Failed to fetch bookings.")
        );
        assert_eq!(api.calls(), vec!["update_order_status", "bookings"]);
    }

    #[test]
    fn failed_receipt_skips_the_refetch() {
        let api = MockApi::default();
        script(&api.update_order_status, Err(Error::from_response(500, "")));

        let err = block_on(confirm_received(&api, &user_session(), "b-1")).unwrap_err();

        assert_eq!(err.notification(), "Failed to update order status.");
        assert_eq!(api.calls(), vec!["update_order_status"]);
    }
}
