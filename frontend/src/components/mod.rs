pub mod booking;
pub mod driver_profile;
pub mod footer;
pub mod home;
pub mod login;
pub mod navbar;
pub mod profile;
pub mod signup;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// `oninput` handler writing the field's value into `state`.
pub fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}
