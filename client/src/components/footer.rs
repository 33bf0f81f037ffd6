//! Site footer with contact links and the CV download.

use leptos::prelude::*;

use crate::content::{CONTACT_EMAIL, CV_DOWNLOAD_NAME, CV_PATH, SOCIAL_LINKS, mailto};
use crate::util::prefs::use_translate;

#[component]
pub fn Footer() -> impl IntoView {
    let t = use_translate();

    let socials = SOCIAL_LINKS
        .iter()
        .map(|link| {
            view! {
                <a href=link.url target="_blank" rel="noopener noreferrer">
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <div class="footer__links">
                <a href=mailto()>{CONTACT_EMAIL}</a>
                {socials}
                <a href=CV_PATH download=CV_DOWNLOAD_NAME>
                    {move || t("hero.download_cv")}
                </a>
            </div>
            <p class="footer__note">
                "© " {move || t("nav.brand")} ". " {move || t("footer.rights")} " " {move || t("footer.built_with")}
            </p>
        </footer>
    }
}
