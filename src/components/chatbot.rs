//! FAQ chatbot panel: append-only conversation log, quick questions, and
//! an input with live validation.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Sender};
use crate::util::time;
use crate::validate;

/// How many FAQ questions to surface as quick-question chips.
const QUICK_QUESTION_LIMIT: usize = 4;

/// Chatbot panel. One outstanding question at a time; while the bot is
/// replying the input is disabled and a typing indicator is shown.
#[component]
pub fn ChatbotPanel() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // FAQ list for the quick-question chips; absent on fetch failure.
    let faqs =
        LocalResource::new(|| async { crate::net::api::fetch_faqs().await.unwrap_or_default() });

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = (chat.get().messages.len(), loading.get());
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if let Err(reason) = validate::chat_message(&text) {
            error.set(Some(reason.to_owned()));
            return;
        }
        error.set(None);

        chat.update(|c| c.push_user(&text, time::now_ms()));
        input.set(String::new());
        loading.set(true);

        #[cfg(target_arch = "wasm32")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::ask_chatbot(&text).await {
                    Ok(reply) => {
                        chat.update(|c| {
                            c.push_bot(&reply.response, reply.confidence, time::now_ms());
                        });
                    }
                    Err(err) => {
                        log::warn!("chatbot request failed: {err}");
                        let fallback = err.user_message("An error occurred. Please try again.");
                        chat.update(|c| c.push_bot(&fallback, None, time::now_ms()));
                    }
                }
                loading.set(false);
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = text;
            loading.set(false);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let can_send = move || !loading.get() && input.get().trim().chars().count() >= 3;
    let char_count = move || format!("{}/500", input.get().chars().count());

    view! {
        <div class="chatbot">
            <div class="chatbot__header">
                <h2>"CareLink FAQ Assistant"</h2>
                <p>"Ask any question about our services (min 3 characters)"</p>
            </div>

            <Suspense fallback=|| ()>
                {move || {
                    faqs.get()
                        .and_then(|list| {
                            if list.is_empty() {
                                return None;
                            }
                            let chips = list
                                .into_iter()
                                .take(QUICK_QUESTION_LIMIT)
                                .map(|faq| {
                                    let question = faq.question;
                                    let fill = question.clone();
                                    view! {
                                        <button
                                            type="button"
                                            class="chatbot__chip"
                                            on:click=move |_| {
                                                input.set(fill.clone());
                                                error.set(None);
                                            }
                                        >
                                            {question}
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>();
                            Some(view! { <div class="chatbot__chips">{chips}</div> })
                        })
                }}
            </Suspense>

            <div class="chatbot__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .iter()
                        .map(|msg| {
                            let from_user = msg.sender == Sender::User;
                            let text = msg.text.clone();
                            let stamp = time::format_hh_mm(msg.timestamp);
                            let confidence = msg.confidence.map(|c| format!("Confidence: {c}%"));
                            view! {
                                <div class="chatbot__message" class:chatbot__message--user=from_user>
                                    <div class="chatbot__bubble">
                                        <p>{text}</p>
                                        {confidence
                                            .map(|c| {
                                                view! { <small class="chatbot__confidence">{c}</small> }
                                            })}
                                    </div>
                                    <span class="chatbot__stamp">{stamp}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    loading.get()
                        .then(|| {
                            view! {
                                <div class="chatbot__message">
                                    <div class="chatbot__bubble chatbot__bubble--typing">
                                        <span></span>
                                        <span></span>
                                        <span></span>
                                    </div>
                                </div>
                            }
                        })
                }}
            </div>

            {move || error.get().map(|msg| view! { <div class="chatbot__error">{msg}</div> })}

            <form class="chatbot__input-row" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Type your question here (3-500 characters)..."
                    maxlength="500"
                    prop:value=move || input.get()
                    disabled=move || loading.get()
                    on:input=move |ev| {
                        input.set(event_target_value(&ev));
                        error.set(None);
                    }
                />
                <span class="chatbot__count">{char_count}</span>
                <button type="submit" disabled=move || !can_send()>
                    {move || if loading.get() { "Sending..." } else { "Send" }}
                </button>
            </form>
        </div>
    }
}
