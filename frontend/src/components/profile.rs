use gloo_console::{error, info};
use logiconnect_lib::{
    booking::{BOOKING_COLUMNS, Booking},
    dashboard::{self, BookingsView, LoadFailure, ORDER_RECEIVED},
    user::UserProfile,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::{Route, api::HttpApi, auth::use_auth, toast::use_toaster};

#[function_component]
pub fn ProfilePage() -> Html {
    let auth = use_auth();
    let toaster = use_toaster();
    let navigator = use_navigator();
    let loading = use_state(|| true);
    let profile = use_state(|| None::<UserProfile>);
    let bookings = use_state(Vec::<Booking>::new);

    {
        let auth = auth.clone();
        let toaster = toaster.clone();
        let loading = loading.clone();
        let profile = profile.clone();
        let bookings = bookings.clone();
        use_effect_with((), move |_| {
            match auth.session.clone() {
                None => {
                    info!("No session, redirecting to login");
                    if let Some(navigator) = &navigator {
                        navigator.push(&Route::Login);
                    }
                }
                Some(session) => spawn_local(async move {
                    let result = dashboard::load(&HttpApi::new(), &auth.store(), &session).await;
                    loading.set(false);
                    match result {
                        Ok(loaded) => {
                            if let Some(notice) = &loaded.notice {
                                toaster.error(notice.notification());
                            }
                            profile.set(Some(loaded.profile));
                            bookings.set(loaded.bookings);
                        }
                        Err(err) => {
                            error!(format!("Dashboard failed to load: {err}"));
                            toaster.error(err.notification());
                            match LoadFailure::of(&err) {
                                LoadFailure::SessionDropped => auth.logout(),
                                LoadFailure::SessionKept => {
                                    if let Some(navigator) = &navigator {
                                        navigator.push(&Route::Login);
                                    }
                                }
                            }
                        }
                    }
                }),
            }
            || ()
        });
    }

    let on_received = {
        let auth = auth.clone();
        let bookings = bookings.clone();
        Callback::from(move |booking_id: String| {
            let Some(session) = auth.session.clone() else {
                return;
            };
            let auth = auth.clone();
            let toaster = toaster.clone();
            let bookings = bookings.clone();
            spawn_local(async move {
                match dashboard::confirm_received(&HttpApi::new(), &session, &booking_id).await {
                    Ok(receipt) => {
                        toaster.success(ORDER_RECEIVED);
                        if let Some(updated) = receipt.bookings {
                            bookings.set(updated);
                        }
                        if let Some(notice) = receipt.notice {
                            error!(format!("Bookings refresh failed: {notice}"));
                            toaster.error(notice.notification());
                            auth.reject(&notice);
                        }
                    }
                    Err(err) => {
                        error!(format!("Order status update failed: {err}"));
                        toaster.error(err.notification());
                        auth.reject(&err);
                    }
                }
            });
        })
    };

    if *loading && auth.session.is_some() {
        return html! { <div class="page loading">{"Loading..."}</div> };
    }

    html! {
        <section class="page dashboard">
            <header><h1>{"User Dashboard"}</h1></header>
            <div class="profile-grid">
                if let Some(profile) = &*profile {
                    <div class="card">
                        <h2>{"Profile Information"}</h2>
                        <p><strong>{"Name: "}</strong>{&profile.name}</p>
                        <p><strong>{"Email: "}</strong>{&profile.email}</p>
                    </div>
                    <div class="card">
                        <h2>{"Contact Information"}</h2>
                        <p><strong>{"Phone Number: "}</strong>{&profile.phone_number}</p>
                        <p><strong>{"Country: "}</strong>{&profile.country}</p>
                        <p><strong>{"State: "}</strong>{&profile.state}</p>
                    </div>
                    <div class="card wide">
                        <h2>{"User Role"}</h2>
                        <p><strong>{"Role: "}</strong>{&profile.role}</p>
                    </div>
                } else {
                    <p class="empty">{"No user profile found."}</p>
                }
            </div>

            <div class="bookings">
                <h2>{"Bookings"}</h2>
                <BookingsTable bookings={(*bookings).clone()} on_received={on_received} />
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct BookingsTableProps {
    pub bookings: Vec<Booking>,
    pub on_received: Callback<String>,
}

#[function_component]
fn BookingsTable(props: &BookingsTableProps) -> Html {
    let rows = match dashboard::bookings_view(&props.bookings) {
        BookingsView::Empty(message) => return html! { <p>{message}</p> },
        BookingsView::Table(rows) => rows,
    };

    html! {
        <table class="bookings-table">
            <thead>
                <tr>{ for BOOKING_COLUMNS.iter().map(|column| html! { <th>{*column}</th> }) }</tr>
            </thead>
            <tbody>
                { for rows.iter().map(|booking| {
                    let action = if booking.awaiting_receipt() {
                        let booking_id = booking.booking_id.clone();
                        let on_received = props.on_received.clone();
                        let onclick = Callback::from(move |_: MouseEvent| on_received.emit(booking_id.clone()));
                        html! { <button class="btn-primary" {onclick}>{"Confirm Order Received"}</button> }
                    } else {
                        html! {}
                    };
                    html! {
                        <tr key={booking.booking_id.clone()}>
                            { for booking.table_cells().into_iter().map(|cell| html! { <td>{cell}</td> }) }
                            <td>{action}</td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
