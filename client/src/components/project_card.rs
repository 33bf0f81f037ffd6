//! Project summary card used by the home and projects pages.

use leptos::prelude::*;

use crate::net::types::Project;
use crate::util::prefs::use_translate;

/// Route of a project's details page.
pub fn project_href(slug: &str) -> String {
    format!("/projects/{slug}")
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let t = use_translate();
    let cover = project.cover_image().map(str::to_owned);
    let Project { slug, title, description, technologies, github_url, live_url, .. } = project;
    let alt = title.clone();

    view! {
        <article class="project-card">
            {cover.map(|src| view! { <img class="project-card__image" src=src alt=alt loading="lazy"/> })}
            <div class="project-card__body">
                <h3 class="project-card__title">{title}</h3>
                <p class="project-card__description">{description}</p>
                <ul class="tags">
                    {technologies.into_iter().map(|tech| view! { <li class="tag">{tech}</li> }).collect_view()}
                </ul>
                <div class="project-card__actions">
                    <a class="btn btn--primary" href=project_href(&slug)>
                        {move || t("projects.view_details")}
                    </a>
                    {github_url.map(|url| view! {
                        <a class="btn" href=url target="_blank" rel="noopener noreferrer">
                            {move || t("projects.source")}
                        </a>
                    })}
                    {live_url.map(|url| view! {
                        <a class="btn" href=url target="_blank" rel="noopener noreferrer">
                            {move || t("projects.live")}
                        </a>
                    })}
                </div>
            </div>
        </article>
    }
}
