use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::Route;

#[function_component]
pub fn Home() -> Html {
    let navigator = use_navigator();

    let on_click = Callback::from(move |_| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Booking);
        }
    });

    html! {
        <main class="page home">
            <h1>{"Quick & reliable "}<span class="accent">{"logistics"}</span>{" solution."}</h1>
            <p>
                {"On-demand goods transportation: tell us where to pick up and where to drop, \
                  pick a vehicle that fits the load and follow the delivery from your dashboard."}
            </p>
            <button class="btn-primary" onclick={on_click}>{"Get Started"}</button>
        </main>
    }
}
