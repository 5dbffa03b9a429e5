//! Contact form.

use leptos::prelude::*;

use crate::components::banner::{Banner, StatusBanner};
use crate::components::fields::{TextAreaField, TextField, bind_field};
use crate::state::contact::{ContactMessage, Field, FieldErrors};

/// Contact form: name, email, subject, and a free-text message with a
/// live character count.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactMessage::default());
    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<Banner>);
    let submitting = RwSignal::new(false);

    let name = bind_field(form, errors, Field::Name, |f| f.name.clone(), |f, v| f.name = v);
    let email = bind_field(form, errors, Field::Email, |f| f.email.clone(), |f, v| f.email = v);
    let subject =
        bind_field(form, errors, Field::Subject, |f| f.subject.clone(), |f, v| f.subject = v);
    let message =
        bind_field(form, errors, Field::Message, |f| f.message.clone(), |f, v| f.message = v);

    let message_count = Signal::derive(move || {
        format!("Message length: {} characters", form.get().message.chars().count())
    });

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
                match crate::net::api::submit_contact(&record.payload()).await {
                    Ok(()) => {
                        form.set(ContactMessage::default());
                        errors.set(FieldErrors::new());
                        banner.set(Some(Banner::success(
                            "Message sent successfully! We will contact you soon.",
                        )));
                    }
                    Err(err) => {
                        log::warn!("contact submission failed: {err}");
                        banner.set(Some(Banner::error(err.user_message("Error sending message"))));
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
            <h2>"Contact Us"</h2>
            <StatusBanner banner=banner/>
            <form on:submit=on_submit>
                <TextField label="Name *" placeholder="Enter your name" bind=name/>
                <TextField
                    label="Email *"
                    placeholder="Enter your email"
                    input_type="email"
                    bind=email
                />
                <TextField
                    label="Subject * (min 3 characters)"
                    placeholder="Enter subject"
                    bind=subject
                />
                <TextAreaField
                    label="Message * (min 10 characters)"
                    placeholder="Enter your message"
                    rows=5
                    bind=message
                    help=message_count
                />
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </div>
    }
}
