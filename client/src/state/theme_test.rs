use super::*;
use crate::util::color_scheme::FixedScheme;
use crate::util::document::MemoryRoot;
use crate::util::storage::{MemoryStorage, StorageError};

struct BrokenProbe;

struct UnreadableStorage;

impl StorageBackend for UnreadableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

impl ColorSchemeProbe for BrokenProbe {
    fn prefers_dark(&self) -> Result<bool, String> {
        Err("matchMedia unsupported".to_owned())
    }
}

fn store() -> PreferenceStore<MemoryStorage> {
    PreferenceStore::new(MemoryStorage::default())
}

const OS_LIGHT: FixedScheme = FixedScheme { dark: false };
const OS_DARK: FixedScheme = FixedScheme { dark: true };

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_names_round_trip() {
    for theme in Theme::ALL {
        assert_eq!(Theme::from_name(theme.name()), Some(theme));
    }
}

#[test]
fn theme_from_name_requires_exact_value() {
    assert_eq!(Theme::from_name("Dark"), None);
    assert_eq!(Theme::from_name("system"), None);
    assert_eq!(Theme::from_name(" dark"), None);
}

#[test]
fn theme_palettes_differ() {
    assert_ne!(Theme::Light.toast_palette(), Theme::Dark.toast_palette());
}

// =============================================================
// Resolution precedence
// =============================================================

#[test]
fn stored_dark_beats_os_light() {
    let store = store();
    store.write(THEME_KEY, "dark");
    let state = ThemeState::resolve(&store, &OS_LIGHT);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.source, ThemeSource::Explicit);
}

#[test]
fn stored_light_beats_os_dark() {
    let store = store();
    store.write(THEME_KEY, "light");
    let state = ThemeState::resolve(&store, &OS_DARK);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.source, ThemeSource::Explicit);
}

#[test]
fn os_dark_used_without_stored_value() {
    let state = ThemeState::resolve(&store(), &OS_DARK);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.source, ThemeSource::System);
}

#[test]
fn light_when_nothing_is_known() {
    let state = ThemeState::resolve(&store(), &OS_LIGHT);
    assert_eq!(state, ThemeState { theme: Theme::Light, source: ThemeSource::System });
}

#[test]
fn invalid_stored_value_falls_through_to_os() {
    let store = store();
    store.write(THEME_KEY, "purple");
    let state = ThemeState::resolve(&store, &OS_DARK);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.source, ThemeSource::System);
}

#[test]
fn probe_failure_resolves_to_light() {
    let state = ThemeState::resolve(&store(), &BrokenProbe);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn storage_failure_resolves_to_light_even_when_os_is_dark() {
    let state = ThemeState::resolve(&PreferenceStore::new(UnreadableStorage), &OS_DARK);
    assert_eq!(state, ThemeState { theme: Theme::Light, source: ThemeSource::System });
}

// =============================================================
// Mutations and side effects
// =============================================================

#[test]
fn set_theme_persists_across_reload() {
    for theme in Theme::ALL {
        let backend = MemoryStorage::default();
        let mut state = ThemeState::default();
        state.set_theme(theme, &PreferenceStore::new(backend.clone()), &mut MemoryRoot::default());

        let reloaded = ThemeState::resolve(&PreferenceStore::new(backend), &OS_LIGHT);
        assert_eq!(reloaded.theme, theme);
    }
}

#[test]
fn set_theme_twice_matches_once() {
    let store = store();
    let mut once = MemoryRoot::default();
    let mut twice = MemoryRoot::default();

    ThemeState::default().set_theme(Theme::Dark, &store, &mut once);
    let mut state = ThemeState::default();
    state.set_theme(Theme::Dark, &store, &mut twice);
    state.set_theme(Theme::Dark, &store, &mut twice);

    assert_eq!(once, twice);
    assert_eq!(twice.classes(), ["dark".to_owned()]);
}

#[test]
fn toggle_twice_from_light_leaves_no_dark_class() {
    let store = store();
    let mut root = MemoryRoot::default();
    let mut state = ThemeState::default();
    state.apply(&mut root);

    state.toggle(&store, &mut root);
    assert!(root.has_class("dark"));
    assert!(!root.has_class("light"));

    state.toggle(&store, &mut root);
    assert_eq!(state.theme, Theme::Light);
    assert!(root.has_class("light"));
    assert!(!root.has_class("dark"));
    assert_eq!(store.read(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn apply_sets_toast_properties() {
    let mut root = MemoryRoot::default();
    ThemeState { theme: Theme::Dark, source: ThemeSource::System }.apply(&mut root);

    let palette = Theme::Dark.toast_palette();
    assert_eq!(root.style_property(TOAST_BACKGROUND_VAR), Some(palette.background));
    assert_eq!(root.style_property(TOAST_FOREGROUND_VAR), Some(palette.foreground));
    assert_eq!(root.style_property(TOAST_BORDER_VAR), Some(palette.border));
}

#[test]
fn apply_keeps_unrelated_root_classes() {
    let mut root = MemoryRoot::default();
    root.add_class("fonts-loaded");
    ThemeState { theme: Theme::Dark, source: ThemeSource::System }.apply(&mut root);
    assert!(root.has_class("fonts-loaded"));
    assert!(root.has_class("dark"));
}

// =============================================================
// OS following
// =============================================================

#[test]
fn follows_os_changes_while_unset() {
    let mut root = MemoryRoot::default();
    let mut state = ThemeState::resolve(&store(), &OS_LIGHT);

    assert!(state.follow_system(true, &mut root));
    assert_eq!(state.theme, Theme::Dark);
    assert!(root.has_class("dark"));

    assert!(state.follow_system(false, &mut root));
    assert_eq!(state.theme, Theme::Light);
    assert!(!root.has_class("dark"));
}

#[test]
fn follow_system_does_not_persist() {
    let store = store();
    let mut state = ThemeState::resolve(&store, &OS_LIGHT);
    state.follow_system(true, &mut MemoryRoot::default());
    assert_eq!(store.read(THEME_KEY), None);
    assert_eq!(state.source, ThemeSource::System);
}

#[test]
fn explicit_choice_suppresses_os_changes() {
    let store = store();
    let mut root = MemoryRoot::default();
    let mut state = ThemeState::resolve(&store, &OS_LIGHT);

    state.toggle(&store, &mut root);
    assert!(!state.follow_system(false, &mut root));
    assert_eq!(state.theme, Theme::Dark);
    assert!(root.has_class("dark"));
}

#[test]
fn stored_preference_suppresses_os_changes_after_reload() {
    let store = store();
    store.write(THEME_KEY, "light");
    let mut state = ThemeState::resolve(&store, &OS_LIGHT);
    assert!(!state.follow_system(true, &mut MemoryRoot::default()));
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn cleared_storage_resumes_os_following_on_reload() {
    let backend = MemoryStorage::default();
    let store = PreferenceStore::new(backend.clone());
    ThemeState::default().set_theme(Theme::Dark, &store, &mut MemoryRoot::default());

    backend.clear();
    let mut state = ThemeState::resolve(&store, &OS_LIGHT);
    assert_eq!(state.source, ThemeSource::System);
    assert!(state.follow_system(true, &mut MemoryRoot::default()));
}
