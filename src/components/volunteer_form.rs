//! Volunteer registration form.

use leptos::prelude::*;

use crate::components::banner::{Banner, StatusBanner};
use crate::components::fields::{SelectField, TextAreaField, TextField, bind_field};
use crate::state::volunteer::{AVAILABILITY_OPTIONS, Field, FieldErrors, VolunteerForm};

/// Volunteer registration: contact details, optional skills/experience,
/// and a required availability choice.
#[component]
pub fn VolunteerRegistration() -> impl IntoView {
    let form = RwSignal::new(VolunteerForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let name = bind_field(form, errors, Field::Name, |f| f.name.clone(), |f, v| f.name = v);
    let email = bind_field(form, errors, Field::Email, |f| f.email.clone(), |f, v| f.email = v);
    let phone = bind_field(form, errors, Field::Phone, |f| f.phone.clone(), |f, v| f.phone = v);
    let skills = bind_field(form, errors, Field::Skills, |f| f.skills.clone(), |f, v| f.skills = v);
    let experience = bind_field(
        form,
        errors,
        Field::Experience,
        |f| f.experience.clone(),
        |f, v| f.experience = v,
    );
    let availability = bind_field(
        form,
        errors,
        Field::Availability,
        |f| f.availability.clone(),
        |f, v| f.availability = v,
    );
    let address =
        bind_field(form, errors, Field::Address, |f| f.address.clone(), |f, v| f.address = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let record = form.get();
        let found = record.validate();
        if !found.is_empty() {
            errors.set(found);
            banner.set(Some(Banner::error("Please fix all errors before submitting")));
            return;
        }

        submitting.set(true);
        #[cfg(target_arch = "wasm32")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::register_volunteer(&record.payload()).await {
                    Ok(()) => {
                        form.set(VolunteerForm::default());
                        errors.set(FieldErrors::new());
                        banner.set(Some(Banner::success("Volunteer registered successfully!")));
                    }
                    Err(err) => {
                        log::warn!("volunteer registration failed: {err}");
                        banner.set(Some(Banner::error(
                            err.user_message("Error registering volunteer"),
                        )));
                    }
                }
                submitting.set(false);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = record;
            submitting.set(false);
        }
    };

    view! {
        <div class="form-container">
            <h2>"Volunteer Registration"</h2>
            <StatusBanner banner=banner/>
            <form on:submit=on_submit>
                <TextField label="Full Name *" placeholder="Enter your full name" bind=name/>
                <TextField
                    label="Email *"
                    placeholder="Enter your email"
                    input_type="email"
                    bind=email
                />
                <TextField
                    label="Phone Number * (exactly 10 digits)"
                    placeholder="Enter your phone number"
                    input_type="tel"
                    bind=phone
                />
                <TextField
                    label="Skills (comma-separated, Optional)"
                    placeholder="e.g., First Aid, Counseling, Medical Support"
                    bind=skills
                    help=Signal::derive(|| "Separate multiple skills with commas".to_owned())
                />
                <TextAreaField
                    label="Experience (Optional, min 5 characters)"
                    placeholder="Describe your experience in volunteering"
                    bind=experience
                />
                <SelectField
                    label="Availability *"
                    prompt="Select availability"
                    options=&AVAILABILITY_OPTIONS
                    bind=availability
                />
                <TextField label="Address *" placeholder="Enter your address" bind=address/>
                <button type="submit" disabled=move || submitting.get()>
                    {move || {
                        if submitting.get() { "Registering..." } else { "Register as Volunteer" }
                    }}
                </button>
            </form>
        </div>
    }
}
