use yew::prelude::*;
use web_sys::MouseEvent;
use yew::{Children, Properties};

use crate::components::link::InterceptedLink;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: String,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", (*is_open).then_some("open"))}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
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
        <div class="faq-page">
            <section class="faq-hero">
                <h1>{"Frequently Asked Questions"}</h1>
                <p>{"How projects with us start, run and wrap up"}</p>
            </section>

            <section class="faq-section">
                <h2>{"Working Together"}</h2>

                <FaqItem question="How do we start a project?">
                    <p>{"Send us a short description through our Upwork agency page. We reply with questions, then a fixed-price proposal split into milestones."}</p>
                </FaqItem>

                <FaqItem question="Why do you work through Upwork?">
                    <p>{"Upwork holds milestone payments in escrow, so you only release money for work you have approved. It also keeps contracts, invoices and messages in one place."}</p>
                </FaqItem>

                <FaqItem question="Who will I be talking to?">
                    <p>
                        {"Usually one of our junior managers, who coordinates the people doing the work. You can see everyone on the "}
                        <InterceptedLink to="/team">{"team page"}</InterceptedLink>
                        {"."}
                    </p>
                </FaqItem>

                <h2>{"Pricing & Delivery"}</h2>

                <FaqItem question="How much does a typical project cost?">
                    <p>{"Marketing sites usually land between one and three milestones; web applications are estimated after a short paid discovery phase."}</p>
                </FaqItem>

                <FaqItem question="What happens after launch?">
                    <ul>
                        <li>{"Two weeks of free fixes for anything that does not match the agreed scope"}</li>
                        <li>{"Optional monthly maintenance retainer"}</li>
                        <li>{"Full hand-off documentation if your own team takes over"}</li>
                    </ul>
                </FaqItem>

                <h2>{"Privacy"}</h2>

                <FaqItem question="What do you do with my data?">
                    <p>
                        {"Only what is needed to do the work. Details are in our "}
                        <InterceptedLink to="/privacy">{"privacy policy"}</InterceptedLink>
                        {"."}
                    </p>
                </FaqItem>
            </section>

            <style>
                {r#"
                .faq-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                }
                .faq-hero {
                    text-align: center;
                    padding: 4rem 2rem 2rem;
                }
                .faq-section {
                    max-width: 800px;
                    margin: 0 auto;
                    padding: 0 1.5rem 4rem;
                }
                .faq-section h2 {
                    color: #7EB2FF;
                    margin: 2.5rem 0 1rem;
                }
                .faq-item {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(30, 144, 255, 0.1);
                    border-radius: 12px;
                    margin-bottom: 1rem;
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.2rem 1.5rem;
                    background: none;
                    border: none;
                    color: #fff;
                    font-size: 1.05rem;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-answer {
                    max-height: 0;
                    overflow: hidden;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease;
                }
                .faq-item.open .faq-answer {
                    max-height: 1000px;
                    padding-bottom: 1.2rem;
                }
                .faq-answer p, .faq-answer li {
                    color: #999;
                    line-height: 1.6;
                }
                .faq-answer a {
                    color: #1E90FF;
                }
                "#}
            </style>
        </div>
    }
}
