//! Root application component: the navigation shell.

use leptos::prelude::*;

use crate::components::chatbot::ChatbotPanel;
use crate::components::contact_form::ContactForm;
use crate::components::nav_bar::NavBar;
use crate::components::patient_form::PatientRegistration;
use crate::components::volunteer_form::VolunteerRegistration;
use crate::pages::home::HomePage;
use crate::state::section::Section;

/// Root component. Holds the selected section and mounts exactly one
/// section body; switching sections discards the previous one's state.
#[component]
pub fn App() -> impl IntoView {
    let section = RwSignal::new(Section::default());

    view! {
        <div class="app">
            <NavBar section=section/>

            <main class="app__content">
                {move || match section.get() {
                    Section::Home => view! { <HomePage/> }.into_any(),
                    Section::Patient => view! { <PatientRegistration/> }.into_any(),
                    Section::Volunteer => view! { <VolunteerRegistration/> }.into_any(),
                    Section::Contact => view! { <ContactForm/> }.into_any(),
                    Section::Chatbot => view! { <ChatbotPanel/> }.into_any(),
                }}
            </main>

            <footer class="app__footer">
                <p>"© CareLink. All rights reserved."</p>
            </footer>
        </div>
    }
}
