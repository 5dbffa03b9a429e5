//! Landing page: hero text and feature cards.

use leptos::prelude::*;

const FEATURES: [(&str, &str); 4] = [
    (
        "Patient Support",
        "Register as a patient and get access to healthcare resources and support.",
    ),
    (
        "Volunteer Network",
        "Join our volunteer network and make a difference in someone's healthcare journey.",
    ),
    (
        "FAQ Chatbot",
        "Get instant answers to your questions through our chatbot assistant.",
    ),
    (
        "24/7 Support",
        "Contact our support team anytime for assistance and guidance.",
    ),
];

/// Home section shown on first load.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <div class="home__hero">
                <h2>"Welcome to CareLink"</h2>
                <p>
                    "A healthcare support platform connecting patients with healthcare
                    professionals and volunteers."
                </p>
            </div>

            <div class="home__features">
                {FEATURES
                    .into_iter()
                    .map(|(title, blurb)| {
                        view! {
                            <div class="home__card">
                                <h3>{title}</h3>
                                <p>{blurb}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
