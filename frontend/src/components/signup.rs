use gloo_console::error;
use logiconnect_lib::{
    auth::{SIGNUP_SUCCESS, signup},
    user::{DEFAULT_COUNTRY_CODE, Signup as SignupForm},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::{Route, api::HttpApi, components::bind, toast::use_toaster};

#[function_component]
pub fn Signup() -> Html {
    let toaster = use_toaster();
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let country = use_state(|| DEFAULT_COUNTRY_CODE.to_owned());
    let state = use_state(String::new);
    let phone_number = use_state(String::new);
    let password = use_state(String::new);
    let loading = use_state(|| false);

    let on_submit = {
        let fields = [
            name.clone(),
            email.clone(),
            state.clone(),
            phone_number.clone(),
            password.clone(),
        ];
        let country = country.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *loading {
                return;
            }

            let [name, email, state, phone_number, password] = fields.clone();
            let mut form = SignupForm {
                name: (*name).clone(),
                email: (*email).clone(),
                state: (*state).clone(),
                phone_number: (*phone_number).clone(),
                password: (*password).clone(),
                ..SignupForm::default()
            };
            form.set_country((*country).clone());

            loading.set(true);
            let toaster = toaster.clone();
            let navigator = navigator.clone();
            let loading = loading.clone();
            spawn_local(async move {
                let result = signup(&HttpApi::new(), &form).await;
                loading.set(false);
                match result {
                    Ok(()) => {
                        toaster.success(SIGNUP_SUCCESS);
                        for field in [name, email, state, phone_number, password] {
                            field.set(String::new());
                        }
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::Login);
                        }
                    }
                    Err(err) => {
                        error!(format!("Signup failed: {err}"));
                        toaster.error(err.notification());
                    }
                }
            });
        })
    };

    let field = |id: &'static str, label: &'static str, kind: &'static str, value: &UseStateHandle<String>| {
        html! {
            <div class="field">
                <label for={id}>{label}</label>
                <input id={id} type={kind} required=true value={(**value).clone()} oninput={bind(value)} />
            </div>
        }
    };

    html! {
        <section class="page auth-page">
            <div class="card">
                <h2>{"SignUp Page"}</h2>
                <form onsubmit={on_submit}>
                    { field("name", "Name", "text", &name) }
                    { field("email", "Email", "email", &email) }
                    { field("country", "Country Code", "text", &country) }
                    { field("state", "State", "text", &state) }
                    { field("phone", "Phone Number", "tel", &phone_number) }
                    { field("password", "Password", "password", &password) }
                    <button type="submit" class="btn-primary" disabled={*loading}>{"Sign Up"}</button>
                </form>
            </div>
        </section>
    }
}
