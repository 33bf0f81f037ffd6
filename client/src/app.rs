//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::pages::{
    certifications::CertificationsPage, contact::ContactPage, experience::ExperiencePage, home::HomePage,
    not_found::NotFoundPage, project_details::ProjectDetailsPage, projects::ProjectsPage, skills::SkillsPage,
};
use crate::util::prefs::provide_preferences;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root starts in the default language and theme; the client resolves
/// the stored preferences after hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" dir="ltr" class="light">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_preferences();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Layout>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=(StaticSegment("projects"), ParamSegment("slug")) view=ProjectDetailsPage/>
                    <Route path=StaticSegment("experience") view=ExperiencePage/>
                    <Route path=StaticSegment("skills") view=SkillsPage/>
                    <Route path=StaticSegment("certifications") view=CertificationsPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
