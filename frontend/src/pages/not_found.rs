use yew::prelude::*;

use crate::components::link::InterceptedLink;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content">
            <div>
                <h1>{"Page not found"}</h1>
                <p>{"The page you were looking for does not exist or has moved."}</p>
                <InterceptedLink to="/" classes="hero-cta">{"Back to home"}</InterceptedLink>
            </div>
        </div>
    }
}
