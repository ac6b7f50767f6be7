use yew::prelude::*;

use crate::team::component::TeamDirectory;

#[function_component(Team)]
pub fn team() -> Html {
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
        <div class="team-page">
            <section class="team-hero">
                <h1>{"Our Team"}</h1>
                <p>{"The people behind every project, from planning to hand-off."}</p>
            </section>
            <TeamDirectory />
            <style>
                {r#"
                .team-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .team-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }
                .team-section {
                    max-width: 1100px;
                    margin: 0 auto 3rem;
                    padding: 0 1.5rem;
                }
                .team-section h2 {
                    color: #7EB2FF;
                    margin-bottom: 1rem;
                }
                .team-section-caption {
                    color: #999;
                    margin-bottom: 1.5rem;
                }
                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .team-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 16px;
                    padding: 1.5rem;
                    text-align: center;
                }
                .team-card-image {
                    border-radius: 50%;
                    object-fit: cover;
                }
                .image-large { width: 160px; height: 160px; }
                .image-medium { width: 112px; height: 112px; }
                .image-small { width: 72px; height: 72px; }
                .team-card-role {
                    color: #999;
                }
                .team-card-description {
                    color: #ccc;
                    line-height: 1.6;
                }
                .team-card-profile {
                    color: #7EB2FF;
                    font-size: 0.9rem;
                }
                .team-status {
                    text-align: center;
                    padding: 3rem 1rem;
                    color: #999;
                }
                .reload-button {
                    margin-top: 1rem;
                    padding: 0.6rem 1.4rem;
                    border-radius: 8px;
                    border: 1px solid #7EB2FF;
                    background: transparent;
                    color: #7EB2FF;
                    cursor: pointer;
                }
                .spinner {
                    width: 40px;
                    height: 40px;
                    margin: 0 auto;
                    border: 3px solid rgba(126, 178, 255, 0.2);
                    border-top-color: #7EB2FF;
                    border-radius: 50%;
                    animation: spin 1s linear infinite;
                }
                @keyframes spin {
                    to { transform: rotate(360deg); }
                }
                "#}
            </style>
        </div>
    }
}
