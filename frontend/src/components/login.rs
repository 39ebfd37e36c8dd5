use gloo_console::error;
use logiconnect_lib::{
    auth::{LOGIN_SUCCESS, login},
    user::Credentials,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::{api::HttpApi, auth::use_auth, components::bind, toast::use_toaster};

#[function_component]
pub fn Login() -> Html {
    let auth = use_auth();
    let toaster = use_toaster();
    let is_driver = use_state(|| false);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let set_driver = {
        let is_driver = is_driver.clone();
        move |driver: bool| {
            let is_driver = is_driver.clone();
            Callback::from(move |_: MouseEvent| is_driver.set(driver))
        }
    };

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }
            loading.set(true);

            let credentials = Credentials::new((*email).clone(), (*password).clone());
            let auth = auth.clone();
            let toaster = toaster.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let result = login(&HttpApi::new(), &auth.store(), &credentials).await;
                loading.set(false);
                match result {
                    Ok(session) => {
                        toaster.success(LOGIN_SUCCESS);
                        auth.login(session);
                    }
                    Err(err) => {
                        error!(format!("Login failed: {err}"));
                        toaster.error(err.notification());
                    }
                }
            });
        })
    };

    let tab_class = |active: bool| if active { "tab active" } else { "tab" };

    html! {
        <section class="page auth-page">
            <div class="card">
                <h2>{"Login Page"}</h2>
                <div class="tabs">
                    <button class={tab_class(!*is_driver)} onclick={set_driver(false)}>{"User Login"}</button>
                    <button class={tab_class(*is_driver)} onclick={set_driver(true)}>{"Driver Login"}</button>
                </div>
                <form onsubmit={on_submit}>
                    <label for="email">{"Email"}</label>
                    <input id="email" type="email" required=true value={(*email).clone()} oninput={bind(&email)} />

                    <label for="password">{"Password"}</label>
                    <input id="password" type="password" required=true value={(*password).clone()} oninput={bind(&password)} />

                    <button type="submit" class="btn-primary" disabled={*loading}>
                        { format!("Login as {}", if *is_driver { "Driver" } else { "User" }) }
                    </button>
                </form>
            </div>
        </section>
    }
}
