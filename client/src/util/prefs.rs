//! Leptos glue between the preference resolvers and the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_preferences` runs once in `App`. Both preferences start at their
//! defaults so the first client render matches the server HTML, then an
//! effect (client only) resolves the stored/OS values, applies their document
//! side effects, and subscribes to OS color-scheme changes.

use leptos::prelude::*;

use crate::state::locale::{LocaleState, translate};
use crate::state::theme::ThemeState;
use crate::util::color_scheme::{system_probe, watch_system_scheme};
use crate::util::document::document_root;
use crate::util::storage::session_store;

/// Provide the locale and theme contexts and schedule their resolution.
pub fn provide_preferences() -> (RwSignal<LocaleState>, RwSignal<ThemeState>) {
    let locale = RwSignal::new(LocaleState::default());
    let theme = RwSignal::new(ThemeState::default());
    provide_context(locale);
    provide_context(theme);

    Effect::new(move || {
        let store = session_store();
        let mut root = document_root();

        let resolved_locale = LocaleState::resolve(&store);
        resolved_locale.apply(&mut root);
        locale.set(resolved_locale);

        let resolved_theme = ThemeState::resolve(&store, &system_probe());
        resolved_theme.apply(&mut root);
        theme.set(resolved_theme);

        watch_system_scheme(move |prefers_dark| {
            theme.update(|t| {
                if t.follow_system(prefers_dark, &mut document_root()) {
                    log::info!("theme follows OS: {}", t.theme.name());
                }
            });
        });
    });

    (locale, theme)
}

pub fn use_locale() -> RwSignal<LocaleState> {
    expect_context::<RwSignal<LocaleState>>()
}

pub fn use_theme() -> RwSignal<ThemeState> {
    expect_context::<RwSignal<ThemeState>>()
}

/// Reactive translation function for the active language.
pub fn use_translate() -> impl Fn(&'static str) -> &'static str + Copy + Send + Sync + 'static {
    let locale = use_locale();
    move |key| translate(locale.get().language, key)
}

/// Switch en <-> ar, persisting and updating `dir`/`lang`.
pub fn toggle_language(locale: RwSignal<LocaleState>) {
    let store = session_store();
    let mut root = document_root();
    locale.update(|l| {
        l.toggle(&store, &mut root);
    });
}

/// Flip light <-> dark as an explicit choice.
pub fn toggle_theme(theme: RwSignal<ThemeState>) {
    let store = session_store();
    let mut root = document_root();
    theme.update(|t| {
        t.toggle(&store, &mut root);
    });
}
