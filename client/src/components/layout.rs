//! Shared page chrome: navigation bar, routed content, footer.

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Navbar/>
            <main class="layout__main">{children()}</main>
            <Footer/>
        </div>
    }
}
