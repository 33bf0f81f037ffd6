//! Projects grid.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::status::{ErrorPanel, LoadingSkeleton};
use crate::net::api;
use crate::net::types::Project;
use crate::state::load::{LoadState, PROJECTS_RETRIES, load_with_retry};
use crate::util::fetch::spawn_load;
use crate::util::prefs::use_translate;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let t = use_translate();
    let projects = RwSignal::new(LoadState::<Vec<Project>>::Loading);

    spawn_load(projects, load_with_retry(api::fetch_projects, PROJECTS_RETRIES, || None));

    let body = move || {
        projects.with(|state| match state {
            LoadState::Loading => view! { <LoadingSkeleton rows=6/> }.into_any(),
            LoadState::Errored(_) => view! { <ErrorPanel/> }.into_any(),
            LoadState::Populated(list) if list.is_empty() => {
                view! { <p class="empty">{move || t("projects.empty")}</p> }.into_any()
            }
            LoadState::Populated(list) => view! {
                <div class="project-grid">
                    {list.iter().cloned().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1>{move || t("projects.title")}</h1>
                <p class="page__subtitle">{move || t("projects.subtitle")}</p>
            </header>
            {body}
        </section>
    }
}
