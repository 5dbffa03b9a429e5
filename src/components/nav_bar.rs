//! Top navigation bar switching between sections.

use leptos::prelude::*;

use crate::state::section::Section;

/// Brand header plus one button per section; the selected button carries
/// the `active` class.
#[component]
pub fn NavBar(section: RwSignal<Section>) -> impl IntoView {
    view! {
        <header class="navbar">
            <div class="navbar__brand">
                <h1>"CareLink"</h1>
                <p>"Healthcare Support Web Application"</p>
            </div>
            <nav class="navbar__nav">
                {Section::ALL
                    .into_iter()
                    .map(|target| {
                        view! {
                            <button
                                class:active=move || section.get() == target
                                on:click=move |_| section.set(target)
                            >
                                {target.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
