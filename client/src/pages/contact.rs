//! Contact details with a copy-email action.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::toast::{ToastView, show_toast};
use crate::content::{CONTACT_EMAIL, CONTACT_PHONE, SOCIAL_LINKS, mailto, tel};
use crate::state::ui::Toast;
use crate::util::prefs::use_translate;

/// Toast message key for a finished clipboard write. A rejected write is
/// logged and shows nothing.
pub fn copy_feedback(outcome: Result<(), String>) -> Option<&'static str> {
    match outcome {
        Ok(()) => Some("contact.copied"),
        Err(e) => {
            log::warn!("copying email failed: {e}");
            None
        }
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let t = use_translate();
    let toast = RwSignal::new(Toast::default());

    let on_copy = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(clipboard) = web_sys::window().and_then(|w| w.navigator().clipboard()) else {
                log::warn!("clipboard unavailable");
                return;
            };
            let write = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(CONTACT_EMAIL));
            leptos::task::spawn_local(async move {
                let outcome = write.await.map(|_| ()).map_err(|e| format!("{e:?}"));
                if let Some(key) = copy_feedback(outcome) {
                    show_toast(toast, t(key).to_owned());
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (show_toast, toast);
    };

    let socials = SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <li>
                    <a href=link.url target="_blank" rel="noopener noreferrer">{link.label}</a>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="page contact">
            <header class="page__header">
                <h1>{move || t("contact.title")}</h1>
                <p class="page__subtitle">{move || t("contact.subtitle")}</p>
            </header>
            <dl class="contact__details">
                <dt>{move || t("contact.email")}</dt>
                <dd>
                    <a href=mailto()>{CONTACT_EMAIL}</a>
                    <button class="btn contact__copy" on:click=on_copy>{move || t("contact.copy_email")}</button>
                </dd>
                <dt>{move || t("contact.phone")}</dt>
                <dd>
                    <a href=tel() dir="ltr">{CONTACT_PHONE}</a>
                </dd>
                <dt>{move || t("contact.location")}</dt>
                <dd>{move || t("contact.location_value")}</dd>
            </dl>
            <h2>{move || t("contact.socials")}</h2>
            <ul class="contact__socials">{socials}</ul>
            <ToastView toast=toast/>
        </section>
    }
}
