use components::{
    booking::BookingPage, driver_profile::DriverProfile, footer::Footer, home::Home, login::Login,
    navbar::Navbar, profile::ProfilePage, signup::Signup,
};
use gloo_console::{error, info};
use yew::prelude::*;
use yew_router::{BrowserRouter, Routable, Switch};

use crate::{auth::AuthProvider, toast::ToastProvider};

mod api;
mod auth;
mod components;
mod storage;
mod toast;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/user/booking")]
    Booking,
    #[at("/user/profile")]
    Profile,
    #[at("/driver/profile")]
    DriverProfile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    info!(format!("Route: {:?}", route));
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::Booking => html! { <BookingPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::DriverProfile => html! { <DriverProfile /> },
        Route::NotFound => {
            error!("Invalid route");
            html! {
                <section class="page not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page does not exist."}</p>
                </section>
            }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ToastProvider>
                <AuthProvider>
                    <Navbar />
                    <Switch<Route> render={switch} />
                    <Footer />
                </AuthProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
