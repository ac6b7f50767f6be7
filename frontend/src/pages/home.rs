use yew::prelude::*;

use crate::components::link::InterceptedLink;

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="home-page">
            <section class="hero">
                <h1>{"Senior freelancers, one accountable team"}</h1>
                <p class="hero-subtitle">
                    {"We plan, build and maintain web products for small businesses and startups, billed through Upwork so every milestone stays protected."}
                </p>
                <div class="hero-actions">
                    <InterceptedLink to="/team" classes="hero-cta">
                        {"Meet the team"}
                    </InterceptedLink>
                    <InterceptedLink to="/faq" classes="hero-secondary">
                        {"How we work"}
                    </InterceptedLink>
                </div>
            </section>

            <section class="services">
                <h2>{"What we do"}</h2>
                <div class="services-grid">
                    <div class="service-item">
                        <h3>{"Web applications"}</h3>
                        <p>{"From a first prototype to a production app with authentication, payments and dashboards."}</p>
                    </div>
                    <div class="service-item">
                        <h3>{"Marketing sites"}</h3>
                        <p>{"Fast, accessible pages your team can update without calling a developer."}</p>
                    </div>
                    <div class="service-item">
                        <h3>{"Ongoing maintenance"}</h3>
                        <p>{"Monthly retainers for updates, monitoring and the small fixes that pile up."}</p>
                    </div>
                </div>
            </section>

            <section class="footer-cta">
                <h2>{"Have a project in mind?"}</h2>
                <p class="subtitle">
                    {"Read through the common questions, then reach out through our Upwork agency page."}
                </p>
                <InterceptedLink to="/faq" classes="hero-cta">
                    {"Read the FAQ"}
                </InterceptedLink>
            </section>
        </div>
    }
}
