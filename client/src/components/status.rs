//! Loading and error placeholders for data pages.
//!
//! ERROR HANDLING
//! ==============
//! The error panel shows a fixed, translated message; the underlying
//! `ApiError` is only logged. "Try again" reloads the page, which re-enters the
//! loading state through a fresh mount.

use leptos::prelude::*;

use crate::util::prefs::use_translate;

/// Placeholder cards shown while a fetch is in flight.
#[component]
pub fn LoadingSkeleton(#[prop(default = 3)] rows: usize) -> impl IntoView {
    let t = use_translate();
    view! {
        <div class="skeleton" role="status" aria-live="polite">
            <span class="visually-hidden">{move || t("status.loading")}</span>
            {(0..rows).map(|_| view! { <div class="skeleton__row"></div> }).collect_view()}
        </div>
    }
}

/// Error panel with a manual retry.
#[component]
pub fn ErrorPanel() -> impl IntoView {
    let t = use_translate();

    let on_retry = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    log::warn!("reload failed: {e:?}");
                }
            }
        }
    };

    view! {
        <div class="error-panel" role="alert">
            <h2 class="error-panel__title">{move || t("status.error_title")}</h2>
            <p class="error-panel__message">{move || t("status.error_message")}</p>
            <button class="btn btn--primary error-panel__retry" on:click=on_retry>
                {move || t("status.retry")}
            </button>
        </div>
    }
}
