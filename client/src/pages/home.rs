//! Landing page: hero, featured projects, CV download.
//!
//! The hero degrades to translated copy when the profile fetch fails; the
//! featured grid shows the error panel on its own.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::status::{ErrorPanel, LoadingSkeleton};
use crate::content::{CV_DOWNLOAD_NAME, CV_PATH};
use crate::net::api;
use crate::net::types::{Profile, Project};
use crate::state::load::{LoadState, load};
use crate::util::fetch::spawn_load;
use crate::util::prefs::use_translate;

/// Maximum number of cards in the featured grid.
pub const FEATURED_LIMIT: usize = 3;

/// Projects flagged `featured`, or the first few when none are.
pub fn featured_projects(projects: &[Project]) -> Vec<Project> {
    let flagged: Vec<Project> = projects.iter().filter(|p| p.featured).take(FEATURED_LIMIT).cloned().collect();
    if flagged.is_empty() {
        projects.iter().take(FEATURED_LIMIT).cloned().collect()
    } else {
        flagged
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let t = use_translate();
    let profile = RwSignal::new(LoadState::<Profile>::Loading);
    let projects = RwSignal::new(LoadState::<Vec<Project>>::Loading);

    spawn_load(profile, load(api::fetch_profile(), || None));
    spawn_load(projects, load(api::fetch_projects(), || None));

    let hero_name = move || profile.with(|p| p.data().map(|p| p.name.clone()));
    let hero_title = move || {
        profile
            .with(|p| p.data().and_then(|p| p.title.clone()))
            .unwrap_or_else(|| t("hero.title").to_owned())
    };
    let hero_bio = move || {
        profile
            .with(|p| p.data().and_then(|p| p.bio.clone()))
            .unwrap_or_else(|| t("hero.subtitle").to_owned())
    };
    let avatar = move || {
        profile.with(|p| p.data().and_then(|p| p.profile_picture.clone())).map(|src| {
            view! { <img class="hero__avatar" src=src alt=move || t("hero.avatar_alt")/> }
        })
    };

    let featured = move || {
        projects.with(|state| match state {
            LoadState::Loading => view! { <LoadingSkeleton/> }.into_any(),
            LoadState::Errored(_) => view! { <ErrorPanel/> }.into_any(),
            LoadState::Populated(list) => {
                let cards = featured_projects(list);
                if cards.is_empty() {
                    view! { <p class="empty">{move || t("projects.empty")}</p> }.into_any()
                } else {
                    view! {
                        <div class="project-grid">
                            {cards.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }
        })
    };

    view! {
        <section class="hero">
            {avatar}
            <div class="hero__text">
                <p class="hero__greeting">{move || t("hero.greeting")}</p>
                <h1 class="hero__name">{move || hero_name().unwrap_or_else(|| t("nav.brand").to_owned())}</h1>
                <h2 class="hero__title">{hero_title}</h2>
                <p class="hero__bio">{hero_bio}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/projects">{move || t("hero.cta_projects")}</a>
                    <a class="btn" href="/contact">{move || t("hero.cta_contact")}</a>
                    <a class="btn" href=CV_PATH download=CV_DOWNLOAD_NAME>{move || t("hero.download_cv")}</a>
                </div>
            </div>
        </section>

        <section class="featured">
            <h2 class="section-title">{move || t("home.featured_title")}</h2>
            {featured}
            <a class="featured__all" href="/projects">{move || t("home.view_all")}</a>
        </section>
    }
}
