//! Experience timeline.

use leptos::prelude::*;

use crate::content::{EXPERIENCE, ExperienceEntry};
use crate::util::prefs::use_translate;

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let t = use_translate();

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{move || t("experience.title")}</h1>
                <p class="page__subtitle">{move || t("experience.subtitle")}</p>
            </header>
            <ol class="timeline">
                {EXPERIENCE.iter().map(|entry| view! { <TimelineEntry entry=entry/> }).collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn TimelineEntry(entry: &'static ExperienceEntry) -> impl IntoView {
    let t = use_translate();

    view! {
        <li class="timeline__entry">
            <span class="timeline__period">{entry.period}</span>
            <h2 class="timeline__role">{move || t(entry.role_key)}</h2>
            <p class="timeline__company">{move || t(entry.company_key)}</p>
            <p class="timeline__summary">{move || t(entry.summary_key)}</p>
            <ul class="timeline__highlights">
                {entry.highlight_keys.iter().map(|&key| view! { <li>{move || t(key)}</li> }).collect_view()}
            </ul>
            <ul class="tags">
                {entry.stack.iter().map(|tech| view! { <li class="tag">{*tech}</li> }).collect_view()}
            </ul>
        </li>
    }
}
