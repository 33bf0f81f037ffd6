//! Skill groups.

use leptos::prelude::*;

use crate::content::SKILL_GROUPS;
use crate::util::prefs::use_translate;

#[component]
pub fn SkillsPage() -> impl IntoView {
    let t = use_translate();

    let groups = SKILL_GROUPS
        .iter()
        .map(|group| {
            view! {
                <section class="skill-group">
                    <h2>{move || t(group.title_key)}</h2>
                    <ul class="tags">
                        {group.skills.iter().map(|skill| view! { <li class="tag">{*skill}</li> }).collect_view()}
                    </ul>
                </section>
            }
        })
        .collect_view();

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{move || t("skills.title")}</h1>
                <p class="page__subtitle">{move || t("skills.subtitle")}</p>
            </header>
            <div class="skill-groups">{groups}</div>
        </section>
    }
}
