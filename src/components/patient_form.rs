//! Patient registration form.

use leptos::prelude::*;

use crate::components::banner::{Banner, StatusBanner};
use crate::components::fields::{TextAreaField, TextField, bind_field};
use crate::state::patient::{Field, FieldErrors, PatientForm};

/// Patient registration: six fields, client-side validation, one
/// submission in flight at a time.
#[component]
pub fn PatientRegistration() -> impl IntoView {
    let form = RwSignal::new(PatientForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let name = bind_field(form, errors, Field::Name, |f| f.name.clone(), |f, v| f.name = v);
    let email = bind_field(form, errors, Field::Email, |f| f.email.clone(), |f, v| f.email = v);
    let phone = bind_field(form, errors, Field::Phone, |f| f.phone.clone(), |f, v| f.phone = v);
    let age = bind_field(form, errors, Field::Age, |f| f.age.clone(), |f, v| f.age = v);
    let condition = bind_field(
        form,
        errors,
        Field::MedicalCondition,
        |f| f.medical_condition.clone(),
        |f, v| f.medical_condition = v,
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
                match crate::net::api::register_patient(&record.payload()).await {
                    Ok(()) => {
                        form.set(PatientForm::default());
                        errors.set(FieldErrors::new());
                        banner.set(Some(Banner::success("Patient registered successfully!")));
                    }
                    Err(err) => {
                        log::warn!("patient registration failed: {err}");
                        banner.set(Some(Banner::error(
                            err.user_message("Error registering patient"),
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
            <h2>"Patient Registration"</h2>
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
                    label="Age (1-120)"
                    placeholder="Enter your age"
                    input_type="number"
                    bind=age
                />
                <TextAreaField
                    label="Medical Condition (Optional)"
                    placeholder="Describe your medical condition"
                    bind=condition
                />
                <TextField label="Address *" placeholder="Enter your address" bind=address/>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Registering..." } else { "Register as Patient" }}
                </button>
            </form>
        </div>
    }
}
