//! Marketing landing page.

use leptos::prelude::*;

/// Landing page — hero, value props, and a catalogue call-to-action.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"Supplements built around you"</h1>
                <p>
                    "Answer a few questions, get a personalized blend, and have it "
                    "delivered on your schedule. Pause or cancel any time."
                </p>
                <a class="btn btn--primary" href="/products">
                    "Shop supplements"
                </a>
            </section>

            <section class="home-page__values">
                <div class="home-page__value">
                    <h3>"Personalized"</h3>
                    <p>"Formulas matched to your goals, not a one-size-fits-all pill."</p>
                </div>
                <div class="home-page__value">
                    <h3>"Flexible"</h3>
                    <p>"Deliveries every one to eight weeks, managed from your account."</p>
                </div>
                <div class="home-page__value">
                    <h3>"Transparent"</h3>
                    <p>"Every ingredient listed with its dose. No proprietary blends."</p>
                </div>
            </section>
        </div>
    }
}
