use yew::prelude::*;

#[function_component]
pub fn Footer() -> Html {
    html! {
        <footer class="footer">
            <h3>{"LogiConnect @2024"}</h3>
        </footer>
    }
}
