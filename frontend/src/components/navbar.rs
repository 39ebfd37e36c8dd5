use yew::prelude::*;
use yew_router::prelude::*;

use crate::{Route, auth::use_auth};

#[function_component]
pub fn Navbar() -> Html {
    let auth = use_auth();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| auth.logout())
    };

    html! {
        <nav class="navbar">
            <Link<Route> to={Route::Home} classes={classes!("brand")}>
                {"Logi"}<span class="brand-accent">{"Connect"}</span>
            </Link<Route>>
            <div class="nav-actions">
                if let Some(session) = &auth.session {
                    <Link<Route> to={Route::landing(session.role)} classes={classes!("nav-btn")}>{"Dashboard"}</Link<Route>>
                    <Link<Route> to={Route::Booking} classes={classes!("nav-btn")}>{"Book"}</Link<Route>>
                    <button class="nav-btn nav-btn-primary" onclick={on_logout}>{"Logout"}</button>
                } else {
                    <Link<Route> to={Route::Login} classes={classes!("nav-btn")}>{"LogIn"}</Link<Route>>
                    <Link<Route> to={Route::Signup} classes={classes!("nav-btn", "nav-btn-primary")}>{"SignUp"}</Link<Route>>
                }
            </div>
        </nav>
    }
}
