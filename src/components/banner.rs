//! Submission status banner shown above each form.

use leptos::prelude::*;

/// Outcome a banner reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// One status line: the text plus whether it is good news.
#[derive(Clone, Debug, PartialEq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: BannerKind::Error, text: text.into() }
    }
}

/// Renders the current banner, or nothing when there is none.
#[component]
pub fn StatusBanner(#[prop(into)] banner: Signal<Option<Banner>>) -> impl IntoView {
    move || {
        banner.get().map(|banner| {
            let class = match banner.kind {
                BannerKind::Success => "message message--success",
                BannerKind::Error => "message message--error",
            };
            view! { <div class=class>{banner.text}</div> }
        })
    }
}
