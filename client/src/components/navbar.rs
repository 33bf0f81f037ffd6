//! Top navigation bar with route links, language toggle, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place the two preferences are mutated. The mobile menu flag is
//! local and closes on every route change.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::util::prefs::{toggle_language, toggle_theme, use_locale, use_theme, use_translate};

/// Route path and dictionary key for each navigation link.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("/", "nav.home"),
    ("/projects", "nav.projects"),
    ("/experience", "nav.experience"),
    ("/skills", "nav.skills"),
    ("/certifications", "nav.certifications"),
    ("/contact", "nav.contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let t = use_translate();
    let locale = use_locale();
    let theme = use_theme();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    Effect::new(move || {
        location.pathname.track();
        menu_open.set(false);
    });

    let links = NAV_LINKS
        .into_iter()
        .map(|(href, key)| {
            view! {
                <li>
                    <A href=href>{move || t(key)}</A>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar__brand">{move || t("nav.brand")}</A>

            <button
                class="btn navbar__menu-toggle"
                aria-label=move || t("nav.menu")
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <nav class=move || if menu_open.get() { "navbar__links navbar__links--open" } else { "navbar__links" }>
                <ul>{links}</ul>
            </nav>

            <div class="navbar__actions">
                <button
                    class="btn navbar__language"
                    lang=move || locale.get().language.toggled().code()
                    on:click=move |_| toggle_language(locale)
                >
                    {move || t("nav.language_toggle")}
                </button>
                <button
                    class="btn navbar__theme"
                    title=move || t("nav.theme_toggle")
                    aria-label=move || t("nav.theme_toggle")
                    on:click=move |_| toggle_theme(theme)
                >
                    {move || if theme.get().theme.is_dark() { "☀" } else { "☾" }}
                </button>
            </div>
        </header>
    }
}
