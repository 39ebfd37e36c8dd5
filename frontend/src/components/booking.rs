use gloo_console::{error, info};
use logiconnect_lib::{
    Error,
    booking::BookingConfirmation,
    flow::{BookingFlow, SearchQuery, Stage},
    vehicle::{Driver, Vehicle},
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{context::ContextHandle, prelude::*};
use yew_router::scope_ext::RouterScopeExt;

use crate::{Route, api::HttpApi, auth::AuthContext, toast::Toaster};

pub enum Msg {
    Pickup(String),
    Drop(String),
    Capacity(String),
    Search,
    Select(String),
    Confirm,
    Searched(BookingFlow, Result<usize, Error>),
    Selected(BookingFlow, Result<(), Error>),
    Booked(Result<BookingConfirmation, Error>),
    AuthChanged(AuthContext),
}

/// The booking wizard page. Every step is one request; `loading` only
/// disables the buttons while it runs.
pub struct BookingPage {
    flow: BookingFlow,
    query: SearchQuery,
    capacity_input: String,
    loading: bool,
    auth: AuthContext,
    toaster: Toaster,
    _auth_handle: Option<ContextHandle<AuthContext>>,
}

impl BookingPage {
    fn go_to(ctx: &Context<Self>, route: Route) {
        if let Some(navigator) = ctx.link().navigator() {
            navigator.push(&route);
        }
    }

    fn fail(&self, err: &Error) {
        error!(format!("Booking step failed: {err}"));
        self.toaster.error(err.notification());
        self.auth.reject(err);
    }

    fn search_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Search
        });
        let input = |msg: fn(String) -> Msg| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                msg(input.value())
            })
        };

        html! {
            <form class="booking-form" onsubmit={on_submit}>
                <label for="pickup">{"Pickup Location"}</label>
                <input id="pickup" type="text" required=true value={self.query.pickup.clone()} oninput={input(Msg::Pickup)} />

                <label for="drop">{"Drop Location"}</label>
                <input id="drop" type="text" required=true value={self.query.drop.clone()} oninput={input(Msg::Drop)} />

                <label for="capacity">{"Vehicle Capacity (in kg)"}</label>
                <input id="capacity" type="number" min="0" required=true value={self.capacity_input.clone()} oninput={input(Msg::Capacity)} />

                <button type="submit" class="btn-primary" disabled={self.loading}>
                    { if self.loading { "Loading..." } else { "Submit" } }
                </button>
            </form>
        }
    }

    fn vehicle_list(&self, ctx: &Context<Self>, vehicles: &[Vehicle]) -> Html {
        if vehicles.is_empty() {
            return html! { <p class="empty">{"No vehicles available for this route."}</p> };
        }

        html! {
            <div class="vehicles">
                <h2>{"Available Vehicles"}</h2>
                <ul>
                    { for vehicles.iter().map(|vehicle| {
                        let vehicle_id = vehicle.vehicle_id.clone();
                        let on_select = ctx.link().callback(move |_: MouseEvent| Msg::Select(vehicle_id.clone()));
                        html! {
                            <li key={vehicle.vehicle_id.clone()} class="card">
                                <h3>{&vehicle.model_name}</h3>
                                { vehicle_details(vehicle) }
                                <button class="btn-primary" disabled={self.loading} onclick={on_select}>{"Select Vehicle"}</button>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        }
    }

    fn summary(&self, ctx: &Context<Self>, vehicle: &Vehicle, driver: &Driver) -> Html {
        let on_confirm = ctx.link().callback(|_: MouseEvent| Msg::Confirm);

        html! {
            <div class="summary">
                <h2>{"Booking Summary"}</h2>
                <div class="card">
                    <h3>{"Vehicle Details"}</h3>
                    <p><strong>{"Model: "}</strong>{&vehicle.model_name}</p>
                    { vehicle_details(vehicle) }
                </div>
                <div class="card">
                    <h3>{"Driver Details"}</h3>
                    <p><strong>{"Name: "}</strong>{&driver.name}</p>
                    <p><strong>{"Email: "}</strong>{&driver.email}</p>
                    <p><strong>{"Contact Number: "}</strong>{&driver.mobile}</p>
                </div>
                <button class="btn-confirm" disabled={self.loading} onclick={on_confirm}>
                    { if self.loading { "Confirming..." } else { "Confirm Booking" } }
                </button>
            </div>
        }
    }
}

fn vehicle_details(vehicle: &Vehicle) -> Html {
    html! { <>
        <p><strong>{"Registration Number: "}</strong>{&vehicle.registration_number}</p>
        <p><strong>{"Capacity: "}</strong>{format!("{} kg", vehicle.capacity_in_kg)}</p>
        <p><strong>{"Fuel Type: "}</strong>{&vehicle.fuel_type}</p>
        <p><strong>{"Distance from Pickup: "}</strong>{format!("{:.2} km", vehicle.distance_from_pickup)}</p>
        <p><strong>{"Total Distance: "}</strong>{format!("{:.2} km", vehicle.total_distance_km)}</p>
        <p><strong>{"Total Price: "}</strong>{format!("Rs. {:.2}", vehicle.total_price)}</p>
    </> }
}

impl Component for BookingPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link();

        let (auth, auth_handle) = match link.context::<AuthContext>(link.callback(Msg::AuthChanged)) {
            Some((auth, handle)) => (auth, Some(handle)),
            None => (AuthContext::default(), None),
        };
        let toaster = link
            .context::<Toaster>(Callback::noop())
            .map(|(toaster, _)| toaster)
            .unwrap_or_default();

        if auth.session.is_none() {
            info!("No session, redirecting to login");
            Self::go_to(ctx, Route::Login);
        }

        let query = SearchQuery::default();
        Self {
            flow: BookingFlow::new(),
            capacity_input: query.capacity_in_kg.to_string(),
            query,
            loading: false,
            auth,
            toaster,
            _auth_handle: auth_handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Pickup(pickup) => self.query.pickup = pickup,
            Msg::Drop(drop) => self.query.drop = drop,
            Msg::Capacity(capacity) => {
                // An unparsable number fails validation on submit
                self.query.capacity_in_kg = capacity.trim().parse().unwrap_or(f64::NAN);
                self.capacity_input = capacity;
            }
            Msg::AuthChanged(auth) => {
                if auth.session.is_none() {
                    Self::go_to(ctx, Route::Login);
                }
                self.auth = auth;
            }
            Msg::Search | Msg::Select(_) | Msg::Confirm if self.loading => return false,
            Msg::Search | Msg::Select(_) | Msg::Confirm if self.auth.session.is_none() => {
                Self::go_to(ctx, Route::Login);
                return false;
            }
            Msg::Search => {
                let Some(session) = self.auth.session.clone() else {
                    return false;
                };
                self.loading = true;
                let mut flow = self.flow.clone();
                let query = self.query.clone();
                let cb = ctx
                    .link()
                    .callback(|(flow, result): (BookingFlow, Result<usize, Error>)| Msg::Searched(flow, result));
                spawn_local(async move {
                    let result = flow.search(&HttpApi::new(), &session, query).await;
                    cb.emit((flow, result));
                });
            }
            Msg::Select(vehicle_id) => {
                let Some(session) = self.auth.session.clone() else {
                    return false;
                };
                self.loading = true;
                let mut flow = self.flow.clone();
                let cb = ctx
                    .link()
                    .callback(|(flow, result): (BookingFlow, Result<(), Error>)| Msg::Selected(flow, result));
                spawn_local(async move {
                    let result = flow.select_vehicle(&HttpApi::new(), &session, &vehicle_id).await;
                    cb.emit((flow, result));
                });
            }
            Msg::Confirm => {
                let Some(session) = self.auth.session.clone() else {
                    return false;
                };
                self.loading = true;
                let flow = self.flow.clone();
                let cb = ctx.link().callback(Msg::Booked);
                spawn_local(async move {
                    cb.emit(flow.confirm(&HttpApi::new(), &session).await);
                });
            }
            // `loading` refuses other flow steps while a request runs, so the
            // flow it cloned is still current and can replace ours
            Msg::Searched(flow, result) => {
                self.loading = false;
                self.flow = flow;
                match result {
                    Ok(found) => info!(format!("Found {} vehicles", found)),
                    Err(err) => self.fail(&err),
                }
            }
            Msg::Selected(flow, result) => {
                self.loading = false;
                self.flow = flow;
                if let Err(err) = result {
                    self.fail(&err);
                }
            }
            Msg::Booked(result) => {
                self.loading = false;
                match result {
                    Ok(confirmation) => {
                        self.toaster.success(confirmation.message);
                        Self::go_to(ctx, Route::Profile);
                    }
                    Err(err) => self.fail(&err),
                }
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <section class="page booking">
                { match self.flow.stage() {
                    Stage::Searching => self.search_form(ctx),
                    Stage::Selecting { vehicles, .. } => html! { <>
                        { self.search_form(ctx) }
                        { self.vehicle_list(ctx, vehicles) }
                    </> },
                    Stage::Confirming { vehicle, driver, .. } => self.summary(ctx, vehicle, driver),
                } }
            </section>
        }
    }
}
