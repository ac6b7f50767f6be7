use log::{debug, warn};
use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    pub fn from_code(code: i16) -> PointerButton {
        match code {
            1 => PointerButton::Middle,
            2 => PointerButton::Right,
            _ => PointerButton::Left,
        }
    }
}

/// One click on an `InterceptedLink`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkIntent {
    pub target_path: String,
    pub modifier_keys_pressed: bool,
    pub triggering_button: PointerButton,
    pub has_handler: bool,
}

impl LinkIntent {
    pub fn from_event(target_path: &str, e: &MouseEvent, has_handler: bool) -> LinkIntent {
        LinkIntent {
            target_path: target_path.to_string(),
            modifier_keys_pressed: e.ctrl_key() || e.meta_key(),
            triggering_button: PointerButton::from_code(e.button()),
            has_handler,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Leave the click to the browser (new tab, new window).
    Native,
    /// Prevent the default and switch views inside the app.
    InApp,
}

pub fn decide(intent: &LinkIntent) -> NavigationDecision {
    if intent.modifier_keys_pressed || intent.triggering_button == PointerButton::Middle {
        NavigationDecision::Native
    } else {
        NavigationDecision::InApp
    }
}

/// The browser's own navigation is cancelled only for in-app transitions;
/// otherwise the anchor's `href` is followed as usual.
pub fn should_prevent_default(intent: &LinkIntent) -> bool {
    decide(intent) == NavigationDecision::InApp
}

/// Navigation primitives the links call into. Provided once near the root
/// by `NavigationProvider`.
#[derive(Clone, PartialEq)]
pub struct NavigationContext {
    pub transition: Callback<String>,
    pub reset_scroll: Callback<()>,
}

/// Runs the side effects for a click: for in-app navigation the optional
/// callback, then the transition, then the scroll reset. Native clicks
/// touch nothing.
pub fn dispatch(
    intent: &LinkIntent,
    on_navigate: Option<&Callback<()>>,
    context: &NavigationContext,
) -> NavigationDecision {
    let decision = decide(intent);
    if decision == NavigationDecision::InApp {
        if let Some(on_navigate) = on_navigate {
            on_navigate.emit(());
        }
        context.transition.emit(intent.target_path.clone());
        context.reset_scroll.emit(());
    }
    decision
}

fn is_external(path: &str) -> bool {
    path.contains("://") || path.starts_with("mailto:")
}

fn browser_transition(navigator: Option<Navigator>, path: &str) {
    if is_external(path) {
        if let Some(window) = window() {
            let _ = window.location().set_href(path);
        }
        return;
    }
    match navigator {
        Some(navigator) => {
            let route = Route::recognize(path).unwrap_or(Route::NotFound);
            debug!("In-app transition to {}", path);
            navigator.push(&route);
        }
        None => {
            warn!("No router available, loading {} natively", path);
            if let Some(window) = window() {
                let _ = window.location().set_href(path);
            }
        }
    }
}

fn browser_reset_scroll() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProviderProps {
    pub children: Children,
}

/// Must be mounted inside a router.
#[function_component(NavigationProvider)]
pub fn navigation_provider(props: &NavigationProviderProps) -> Html {
    let navigator = use_navigator();
    let context = use_memo(
        move |_| NavigationContext {
            transition: Callback::from(move |path: String| {
                browser_transition(navigator.clone(), &path)
            }),
            reset_scroll: Callback::from(|_| browser_reset_scroll()),
        },
        (),
    );

    html! {
        <ContextProvider<NavigationContext> context={(*context).clone()}>
            { for props.children.iter() }
        </ContextProvider<NavigationContext>>
    }
}

#[derive(Properties, PartialEq)]
pub struct InterceptedLinkProps {
    pub to: AttrValue,
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A real `<a href>` so new-tab, hover preview and screen readers see the
/// destination; plain clicks become in-app transitions.
#[function_component(InterceptedLink)]
pub fn intercepted_link(props: &InterceptedLinkProps) -> Html {
    let context = use_context::<NavigationContext>();

    let onclick = {
        let to = props.to.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(context) = context.as_ref() else {
                return;
            };
            let intent = LinkIntent::from_event(&to, &e, on_navigate.is_some());
            if should_prevent_default(&intent) {
                e.prevent_default();
            }
            dispatch(&intent, on_navigate.as_ref(), context);
        })
    };

    html! {
        <a
            href={props.to.clone()}
            class={props.classes.clone()}
            id={props.id.clone()}
            title={props.title.clone()}
            aria-label={props.aria_label.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
