//! Single project view with an image gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The slug comes from the route. Every slug change restarts the fetch and
//! resets the gallery. A failed fetch for the portfolio's own slug settles on
//! the bundled fallback project instead of the error panel.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::status::{ErrorPanel, LoadingSkeleton};
use crate::net::api;
use crate::net::fallback::fallback_project;
use crate::net::types::Project;
use crate::state::load::{LoadState, load};
use crate::state::ui::Gallery;
use crate::util::fetch::spawn_load;
use crate::util::prefs::use_translate;

#[component]
pub fn ProjectDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.with(|p| p.get("slug").unwrap_or_default()));
    let project = RwSignal::new(LoadState::<Project>::Loading);
    let gallery = RwSignal::new(Gallery::default());

    Effect::new(move || {
        let slug = slug.get();
        project.set(LoadState::Loading);
        gallery.set(Gallery::default());
        spawn_load(project, async move { load(api::fetch_project(&slug), || fallback_project(&slug)).await });
    });

    Effect::new(move || {
        let len = project.with(|state| state.data().map_or(0, |p| p.images.len()));
        gallery.set(Gallery::new(len));
    });

    move || {
        project.with(|state| match state {
            LoadState::Loading => view! { <LoadingSkeleton/> }.into_any(),
            LoadState::Errored(_) => view! { <ErrorPanel/> }.into_any(),
            LoadState::Populated(p) => view! { <ProjectDetails project=p.clone() gallery=gallery/> }.into_any(),
        })
    }
}

#[component]
fn ProjectDetails(project: Project, gallery: RwSignal<Gallery>) -> impl IntoView {
    let t = use_translate();
    let Project { title, description, content, technologies, images, github_url, live_url, .. } = project;

    view! {
        <article class="page project-details">
            <a class="project-details__back" href="/projects">{move || t("project.back")}</a>
            <h1>{title.clone()}</h1>
            <p class="page__subtitle">{description}</p>

            <GalleryView images=images title=title gallery=gallery/>

            {content.map(|text| view! {
                <section class="project-details__section">
                    <h2>{move || t("project.overview")}</h2>
                    <p class="project-details__content">{text}</p>
                </section>
            })}

            <section class="project-details__section">
                <h2>{move || t("project.technologies")}</h2>
                <ul class="tags">
                    {technologies.into_iter().map(|tech| view! { <li class="tag">{tech}</li> }).collect_view()}
                </ul>
            </section>

            <div class="project-details__actions">
                {github_url.map(|url| view! {
                    <a class="btn" href=url target="_blank" rel="noopener noreferrer">{move || t("projects.source")}</a>
                })}
                {live_url.map(|url| view! {
                    <a class="btn btn--primary" href=url target="_blank" rel="noopener noreferrer">{move || t("projects.live")}</a>
                })}
            </div>
        </article>
    }
}

#[component]
fn GalleryView(images: Vec<String>, title: String, gallery: RwSignal<Gallery>) -> impl IntoView {
    let t = use_translate();

    if images.is_empty() {
        return view! { <p class="empty">{move || t("project.no_images")}</p> }.into_any();
    }

    let current = {
        let images = images.clone();
        move || images.get(gallery.get().index).cloned().unwrap_or_default()
    };
    let thumbs = images
        .iter()
        .enumerate()
        .map(|(i, src)| {
            view! {
                <button
                    class=move || if gallery.get().index == i { "gallery__thumb gallery__thumb--active" } else { "gallery__thumb" }
                    on:click=move |_| gallery.update(|g| *g = g.select(i))
                >
                    <img src=src.clone() alt="" loading="lazy"/>
                </button>
            }
        })
        .collect_view();

    view! {
        <section class="gallery" aria-label=move || t("project.gallery")>
            <div class="gallery__stage">
                <button
                    class="btn gallery__nav"
                    aria-label=move || t("project.gallery_prev")
                    on:click=move |_| gallery.update(|g| *g = g.prev())
                >
                    "‹"
                </button>
                <img class="gallery__image" src=current alt=title/>
                <button
                    class="btn gallery__nav"
                    aria-label=move || t("project.gallery_next")
                    on:click=move |_| gallery.update(|g| *g = g.next())
                >
                    "›"
                </button>
            </div>
            <p class="gallery__counter">{move || gallery.get().counter()}</p>
            <div class="gallery__thumbs">{thumbs}</div>
        </section>
    }
    .into_any()
}
