//! Certification list with a detail modal.

#[cfg(test)]
#[path = "certifications_test.rs"]
mod certifications_test;

use leptos::html::Div;
use leptos::prelude::*;

use crate::components::status::{ErrorPanel, LoadingSkeleton};
use crate::net::api;
use crate::net::types::Certification;
use crate::state::load::{LoadState, load};
use crate::util::fetch::spawn_load;
use crate::util::prefs::use_translate;

#[component]
pub fn CertificationsPage() -> impl IntoView {
    let t = use_translate();
    let certifications = RwSignal::new(LoadState::<Vec<Certification>>::Loading);
    let selected = RwSignal::new(None::<Certification>);

    spawn_load(certifications, load(api::fetch_certifications(), || None));

    let body = move || {
        certifications.with(|state| match state {
            LoadState::Loading => view! { <LoadingSkeleton rows=4/> }.into_any(),
            LoadState::Errored(_) => view! { <ErrorPanel/> }.into_any(),
            LoadState::Populated(list) if list.is_empty() => {
                view! { <p class="empty">{move || t("certifications.empty")}</p> }.into_any()
            }
            LoadState::Populated(list) => view! {
                <div class="cert-grid">
                    {list
                        .iter()
                        .cloned()
                        .map(|cert| view! { <CertificationCard cert=cert selected=selected/> })
                        .collect_view()}
                </div>
            }
            .into_any(),
        })
    };

    let on_close = Callback::new(move |()| selected.set(None));

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{move || t("certifications.title")}</h1>
                <p class="page__subtitle">{move || t("certifications.subtitle")}</p>
            </header>
            {body}
            {move || selected.get().map(|cert| view! { <CertificationModal cert=cert on_close=on_close/> })}
        </section>
    }
}

#[component]
fn CertificationCard(cert: Certification, selected: RwSignal<Option<Certification>>) -> impl IntoView {
    let t = use_translate();
    let title = cert.title.clone();
    let issuer = cert.issuer.clone();
    let issue_date = cert.issue_date.clone();
    let image = cert.image.clone();
    let alt = title.clone();

    view! {
        <article class="cert-card">
            {image.map(|src| view! { <img class="cert-card__image" src=src alt=alt loading="lazy"/> })}
            <h3 class="cert-card__title">{title}</h3>
            <p class="cert-card__issuer">{move || t("certifications.issued_by")} " " {issuer}</p>
            {issue_date.map(|date| view! { <p class="cert-card__date">{date}</p> })}
            <button class="btn" on:click=move |_| selected.set(Some(cert.clone()))>
                {move || t("certifications.details")}
            </button>
        </article>
    }
}

/// Whether a key press dismisses the certification modal.
pub fn closes_modal(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Modal with the full certification record. Closes on backdrop click,
/// the close button, or Escape. Takes focus when opened so Escape works
/// without a click first.
#[component]
fn CertificationModal(cert: Certification, on_close: Callback<()>) -> impl IntoView {
    let t = use_translate();
    let Certification { title, issuer, issue_date, credential_url, image, description, .. } = cert;
    let alt = title.clone();

    let modal_ref = NodeRef::<Div>::new();

    Effect::new(move || {
        if let Some(modal) = modal_ref.get() {
            if let Err(e) = modal.focus() {
                log::warn!("failed to focus certification modal: {e:?}");
            }
        }
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if closes_modal(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                node_ref=modal_ref
                class="modal"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="modal__header">
                    <h2>{title}</h2>
                    <button
                        class="modal__close"
                        title=move || t("certifications.close")
                        aria-label=move || t("certifications.close")
                        on:click=move |_| on_close.run(())
                    >
                        "✕"
                    </button>
                </div>
                {image.map(|src| view! { <img class="modal__image" src=src alt=alt/> })}
                <p>{move || t("certifications.issued_by")} " " {issuer}</p>
                {issue_date.map(|date| view! { <p class="modal__date">{date}</p> })}
                {description.map(|text| view! { <p class="modal__description">{text}</p> })}
                {credential_url.map(|url| view! {
                    <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">
                        {move || t("certifications.view_credential")}
                    </a>
                })}
            </div>
        </div>
    }
}
