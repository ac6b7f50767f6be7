use yew::prelude::*;

use crate::components::link::InterceptedLink;

#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <InterceptedLink to="/terms">{"Terms of Service"}</InterceptedLink>
            {" | "}
            <InterceptedLink to="/privacy">{"Privacy Policy"}</InterceptedLink>
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content terms-of-service">
            <h1>{"Terms of Service"}</h1>

            <section>
                <h2>{"1. Engagements"}</h2>
                <p>{"All client work is contracted and paid through Upwork. The Upwork contract for an engagement defines its scope, milestones and price, and takes precedence over anything on this site."}</p>
            </section>

            <section>
                <h2>{"2. Deliverables and Ownership"}</h2>
                <ul>
                    <li>{"Source code and design files are transferred to you when the related milestone is paid"}</li>
                    <li>{"Third-party libraries remain under their own licenses"}</li>
                    <li>{"We may reuse general techniques and internal tooling that contain none of your confidential material"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Confidentiality"}</h2>
                <p>{"We keep anything you share with us confidential and sign a separate NDA on request."}</p>
            </section>

            <section>
                <h2>{"4. Changes and Cancellation"}</h2>
                <ul>
                    <li>{"Scope changes are agreed in writing and added as new milestones"}</li>
                    <li>{"Either side may end an engagement; completed milestones remain payable"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Liability"}</h2>
                <p>{"Our total liability for an engagement is limited to the amount paid for it. We are not liable for indirect or consequential losses."}</p>
            </section>

            <LegalLinks />
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. What We Collect"}</h2>
                <p>{"This site does not use accounts, cookies for tracking, or analytics. We only receive what you send us directly:"}</p>
                <ul>
                    <li>{"Messages and project details sent through Upwork or email"}</li>
                    <li>{"Contact details you include in those messages"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use It"}</h2>
                <ul>
                    <li>{"To answer your enquiry and prepare proposals"}</li>
                    <li>{"To deliver and support the work you contract us for"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Third Parties"}</h2>
                <p>{"Payments and contracts are handled by Upwork under its own privacy policy. Team profile data shown on this site is served from our hosted database provider."}</p>
            </section>

            <section>
                <h2>{"4. Your Rights"}</h2>
                <p>{"You can ask us at any time to see, correct or delete the information we hold about you."}</p>
            </section>

            <LegalLinks />
        </div>
    }
}
