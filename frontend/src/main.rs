use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod components {
    pub mod link;
    pub mod team_card;
}
mod team {
    pub mod component;
    pub mod directory;
    pub mod model;
    pub mod source;
}
mod pages {
    pub mod faq;
    pub mod home;
    pub mod not_found;
    pub mod team;
    pub mod termsprivacy;
}

use components::link::{InterceptedLink, NavigationProvider};
use pages::{
    faq::Faq,
    home::Home,
    not_found::NotFound,
    team::Team,
    termsprivacy::{PrivacyPolicy, TermsOfService},
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/team")]
    Team,
    #[at("/faq")]
    Faq,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Team => {
            info!("Rendering Team page");
            html! { <Team /> }
        },
        Route::Faq => {
            info!("Rendering FAQ page");
            html! { <Faq /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <InterceptedLink to="/" classes="nav-logo" on_navigate={close_menu.clone()}>
                    {"Brightwork Studio"}
                </InterceptedLink>

                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <InterceptedLink to="/team" classes="nav-link" on_navigate={close_menu.clone()}>
                        {"Team"}
                    </InterceptedLink>
                    <InterceptedLink to="/faq" classes="nav-link" on_navigate={close_menu.clone()}>
                        {"FAQ"}
                    </InterceptedLink>
                </div>
            </div>
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <p>{"© Brightwork Studio"}</p>
            <div class="legal-links">
                <InterceptedLink to="/privacy">{"Privacy Policy"}</InterceptedLink>
                {" | "}
                <InterceptedLink to="/terms">{"Terms of Service"}</InterceptedLink>
                {" | "}
                <InterceptedLink to="/faq">{"FAQ"}</InterceptedLink>
            </div>
        </footer>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NavigationProvider>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </NavigationProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
