//! Light/dark theme resolution, toggling, and OS synchronization.
//!
//! DESIGN
//! ======
//! The initial theme comes from the first available source: an explicit
//! stored value, the OS `prefers-color-scheme`, then light. `ThemeSource`
//! records whether the user has made an explicit choice; OS changes are
//! followed only while it is `System`. Every change removes the previous
//! root class, adds the active one, and sets the toast custom properties.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::color_scheme::ColorSchemeProbe;
use crate::util::document::DocumentRoot;
use crate::util::storage::{PreferenceStore, StorageBackend, THEME_KEY};

/// Custom property holding the toast background color.
pub const TOAST_BACKGROUND_VAR: &str = "--toast-bg";
/// Custom property holding the toast text color.
pub const TOAST_FOREGROUND_VAR: &str = "--toast-color";
/// Custom property holding the toast border color.
pub const TOAST_BORDER_VAR: &str = "--toast-border";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors published to the toast layer for a theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastPalette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border: &'static str,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    /// Root class name and persisted value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value. Anything other than exactly `light` or `dark`
    /// is not an explicit preference.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn toast_palette(self) -> ToastPalette {
        match self {
            Self::Light => ToastPalette { background: "#ffffff", foreground: "#1f2937", border: "#e5e7eb" },
            Self::Dark => ToastPalette { background: "#1f2937", foreground: "#f9fafb", border: "#374151" },
        }
    }
}

/// Where the active theme came from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeSource {
    /// No explicit preference; OS changes are followed.
    #[default]
    System,
    /// The user chose a theme (now or in an earlier session); OS changes are ignored.
    Explicit,
}

/// Theme preference state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    pub source: ThemeSource,
}

impl ThemeState {
    /// Resolve the initial theme: stored explicit value, then OS preference,
    /// then light. Storage and probe failures are logged and resolve to light.
    pub fn resolve<B: StorageBackend>(store: &PreferenceStore<B>, probe: &impl ColorSchemeProbe) -> Self {
        match store.try_read(THEME_KEY) {
            Ok(stored) => {
                if let Some(theme) = stored.and_then(|v| Theme::from_name(&v)) {
                    return Self { theme, source: ThemeSource::Explicit };
                }
            }
            Err(e) => {
                log::warn!("theme preference unreadable, using light theme: {e}");
                return Self::default();
            }
        }
        let theme = match probe.prefers_dark() {
            Ok(true) => Theme::Dark,
            Ok(false) => Theme::Light,
            Err(e) => {
                log::warn!("color scheme query failed, using light theme: {e}");
                Theme::Light
            }
        };
        Self { theme, source: ThemeSource::System }
    }

    /// Replace the root theme class and publish the toast palette.
    pub fn apply(&self, root: &mut impl DocumentRoot) {
        for theme in Theme::ALL {
            if theme != self.theme {
                root.remove_class(theme.name());
            }
        }
        root.add_class(self.theme.name());

        let palette = self.theme.toast_palette();
        root.set_style_property(TOAST_BACKGROUND_VAR, palette.background);
        root.set_style_property(TOAST_FOREGROUND_VAR, palette.foreground);
        root.set_style_property(TOAST_BORDER_VAR, palette.border);
    }

    /// Set an explicit theme, persist it, and apply it.
    pub fn set_theme<B: StorageBackend>(&mut self, theme: Theme, store: &PreferenceStore<B>, root: &mut impl DocumentRoot) {
        self.theme = theme;
        self.source = ThemeSource::Explicit;
        store.write(THEME_KEY, theme.name());
        self.apply(root);
    }

    /// Flip light/dark as an explicit choice. Returns the new theme.
    pub fn toggle<B: StorageBackend>(&mut self, store: &PreferenceStore<B>, root: &mut impl DocumentRoot) -> Theme {
        let next = self.theme.toggled();
        self.set_theme(next, store, root);
        next
    }

    /// Follow an OS color-scheme change. Applied only while no explicit
    /// preference exists; never persisted. Returns whether it was applied.
    pub fn follow_system(&mut self, prefers_dark: bool, root: &mut impl DocumentRoot) -> bool {
        if self.source == ThemeSource::Explicit {
            return false;
        }
        self.theme = if prefers_dark { Theme::Dark } else { Theme::Light };
        self.apply(root);
        true
    }
}
