//! Literal payloads that keep a page populated when the API is unreachable.
//!
//! Only one project has a fallback. It is substituted for a failed fetch of
//! that slug; there is no caching, refresh, or invalidation involved.

#[cfg(test)]
#[path = "fallback_test.rs"]
mod fallback_test;

use super::types::Project;

/// Slug of the project that always renders, with or without the API.
pub const FALLBACK_PROJECT_SLUG: &str = "portfolio-website";

/// The literal project for `slug`, if one exists.
pub fn fallback_project(slug: &str) -> Option<Project> {
    (slug == FALLBACK_PROJECT_SLUG).then(|| Project {
        id: FALLBACK_PROJECT_SLUG.to_owned(),
        slug: FALLBACK_PROJECT_SLUG.to_owned(),
        title: "Bilingual Portfolio Website".to_owned(),
        description: "This site: a server-rendered, hydrated portfolio with English and Arabic \
                      content, right-to-left layout, and light and dark themes."
            .to_owned(),
        content: Some(
            "Pages are rendered on the server and hydrated in the browser. Language and theme \
             preferences are stored locally and mirrored onto the document root, and content is \
             loaded from a small REST API with graceful fallbacks when it is unreachable."
                .to_owned(),
        ),
        technologies: ["Rust", "Leptos", "WebAssembly", "Axum", "CSS"].map(str::to_owned).to_vec(),
        images: vec!["/images/portfolio-website.svg".to_owned()],
        github_url: None,
        live_url: Some("/".to_owned()),
        featured: true,
    })
}
