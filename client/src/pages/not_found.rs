use leptos::prelude::*;

use crate::util::prefs::use_translate;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let t = use_translate();

    view! {
        <section class="page not-found">
            <h1>"404"</h1>
            <h2>{move || t("not_found.title")}</h2>
            <p>{move || t("not_found.message")}</p>
            <a class="btn btn--primary" href="/">{move || t("not_found.home")}</a>
        </section>
    }
}
