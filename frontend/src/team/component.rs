use log::{debug, info, warn};
use web_sys::window;
use yew::prelude::*;

use crate::components::team_card::TeamCard;
use crate::team::directory::{DirectoryState, DirectoryView, GroupSection, LatestRequest};
use crate::team::source::DirectorySourceHandle;

#[derive(Properties, PartialEq)]
pub struct TeamDirectoryProps {
    #[prop_or_else(DirectorySourceHandle::rest)]
    pub source: DirectorySourceHandle,
}

#[function_component(TeamDirectory)]
pub fn team_directory(props: &TeamDirectoryProps) -> Html {
    let state = use_state(|| DirectoryState::Idle);
    let latest = use_memo(|_| LatestRequest::default(), ());

    {
        let state = state.clone();
        let latest = latest.clone();
        let source = props.source.clone();
        use_effect_with_deps(
            move |_| {
                let ticket = latest.issue();
                state.set(DirectoryState::Loading);
                info!("Loading team directory");

                wasm_bindgen_futures::spawn_local(async move {
                    let result = source.fetch().await;
                    if !ticket.is_current() {
                        debug!("Discarding stale team directory response");
                        return;
                    }
                    state.set(DirectoryState::settle(result));
                });

                move || latest.invalidate()
            },
            (),
        );
    }

    let body = match state.view() {
        DirectoryView::Loading => html! {
            <div class="team-status">
                <div class="spinner" role="progressbar" aria-label="Loading team"></div>
            </div>
        },
        DirectoryView::Failed => {
            let reload = Callback::from(|_: MouseEvent| {
                if let Some(window) = window() {
                    if let Err(e) = window.location().reload() {
                        warn!("Failed to reload page: {:?}", e);
                    }
                }
            });
            html! {
                <div class="team-status team-error">
                    <p>{"We couldn't load our team right now. Please reload the page to try again."}</p>
                    <button class="reload-button" onclick={reload}>{"Reload page"}</button>
                </div>
            }
        }
        DirectoryView::Empty => html! {
            <div class="team-status team-empty">
                <p>{"No team members yet. Check back soon."}</p>
            </div>
        },
        DirectoryView::Sections(sections) => html! {
            <>
                { for sections.into_iter().map(render_section) }
            </>
        },
    };

    html! {
        <div class="team-directory">
            {body}
        </div>
    }
}

fn render_section(section: GroupSection<'_>) -> Html {
    let caption = match section.caption {
        Some(text) => html! { <p class="team-section-caption">{text}</p> },
        None => html! {},
    };
    html! {
        <section class={classes!("team-section", format!("team-section-{}", section.category.as_str()))}>
            <h2>{section.heading}</h2>
            {caption}
            <div class="team-grid">
                { for section.members.iter().map(|record| html! {
                    <TeamCard key={record.id.clone()} record={record.clone()} variant={section.variant} />
                }) }
            </div>
        </section>
    }
}
