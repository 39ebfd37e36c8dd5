use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::{Route, auth::use_auth};

/// Landing page for drivers. Deliveries are managed elsewhere; this only
/// confirms who is logged in.
#[function_component]
pub fn DriverProfile() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    {
        let logged_in = auth.session.is_some();
        use_effect_with(logged_in, move |logged_in| {
            if !*logged_in {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Login);
                }
            }
            || ()
        });
    }

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| auth.logout())
    };

    html! {
        <section class="page dashboard">
            <header><h1>{"Driver Dashboard"}</h1></header>
            if let Some(session) = &auth.session {
                <div class="card">
                    <p><strong>{"Driver ID: "}</strong>{&session.user_id}</p>
                    <p><strong>{"Role: "}</strong>{session.role.as_str()}</p>
                    <button class="btn-primary" onclick={on_logout}>{"Logout"}</button>
                </div>
            }
        </section>
    }
}
