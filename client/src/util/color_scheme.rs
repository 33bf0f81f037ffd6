//! OS-level color scheme preference (`prefers-color-scheme`).
//!
//! TRADE-OFFS
//! ==========
//! Media queries only exist in the browser. Server rendering uses a fixed
//! light probe so SSR output is deterministic, and the theme is re-resolved
//! after hydration.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

/// Media query matched when the OS is in dark mode.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Source of the OS dark-mode preference.
pub trait ColorSchemeProbe {
    /// Whether the OS currently prefers a dark color scheme.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure when the preference cannot be queried.
    fn prefers_dark(&self) -> Result<bool, String>;
}

/// Probe with a fixed answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedScheme {
    pub dark: bool,
}

impl ColorSchemeProbe for FixedScheme {
    fn prefers_dark(&self) -> Result<bool, String> {
        Ok(self.dark)
    }
}

/// `window.matchMedia` probe.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQueryProbe;

#[cfg(feature = "hydrate")]
impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> Result<bool, String> {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let query = window
            .match_media(DARK_SCHEME_QUERY)
            .map_err(|e| format!("matchMedia failed: {e:?}"))?
            .ok_or_else(|| "matchMedia unsupported".to_owned())?;
        Ok(query.matches())
    }
}

/// The probe for the current environment.
pub fn system_probe() -> impl ColorSchemeProbe {
    #[cfg(feature = "hydrate")]
    {
        MediaQueryProbe
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FixedScheme::default()
    }
}

/// Call `on_change` with the new dark-mode state whenever the OS preference
/// changes. The listener lives as long as the page.
pub fn watch_system_scheme(on_change: impl Fn(bool) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
            log::warn!("matchMedia unavailable; OS theme changes will not be followed");
            return;
        };
        let callback = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            on_change(ev.matches());
        });
        if let Err(e) = query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref()) {
            log::warn!("failed to watch color scheme: {e:?}");
            return;
        }
        callback.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
