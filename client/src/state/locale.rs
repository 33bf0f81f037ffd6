//! Active language, dictionary lookup, and text-direction side effects.
//!
//! DESIGN
//! ======
//! Dictionaries are flat `key -> string` maps with dot-namespaced keys,
//! embedded at compile time and parsed once on first lookup. A lookup miss
//! returns the key itself, so an untranslated string shows up as its key
//! rather than as an empty node.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::util::document::DocumentRoot;
use crate::util::storage::{LANGUAGE_KEY, PreferenceStore, StorageBackend};

static EN: LazyLock<HashMap<String, String>> =
    LazyLock::new(|| parse_dictionary("en", include_str!("../../locales/en.json")));
static AR: LazyLock<HashMap<String, String>> =
    LazyLock::new(|| parse_dictionary("ar", include_str!("../../locales/ar.json")));

/// Supported interface languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ar];

    /// BCP 47 code, also the persisted value.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a persisted code. Only the exact codes are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }

    /// Value for the `dir` attribute.
    pub fn direction(self) -> &'static str {
        if self.is_rtl() { "rtl" } else { "ltr" }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Ar,
            Self::Ar => Self::En,
        }
    }
}

fn parse_dictionary(code: &str, raw: &str) -> HashMap<String, String> {
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::error!("dictionary {code} is malformed, falling back to keys: {e}");
        HashMap::new()
    })
}

/// The dictionary for `language`.
pub fn dictionary(language: Language) -> &'static HashMap<String, String> {
    match language {
        Language::En => LazyLock::force(&EN),
        Language::Ar => LazyLock::force(&AR),
    }
}

/// Look up `key` in `language`'s dictionary, falling back to `key` itself.
pub fn translate(language: Language, key: &str) -> &str {
    dictionary(language).get(key).map_or(key, String::as_str)
}

/// Language preference state shared through context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleState {
    pub language: Language,
}

impl LocaleState {
    /// Read the persisted language, defaulting to English for missing or
    /// unrecognized values.
    pub fn resolve<B: StorageBackend>(store: &PreferenceStore<B>) -> Self {
        let language = store
            .read(LANGUAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_default();
        Self { language }
    }

    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    /// Mirror the active language onto the root element's `dir` and `lang`.
    pub fn apply(&self, root: &mut impl DocumentRoot) {
        root.set_attribute("dir", self.language.direction());
        root.set_attribute("lang", self.language.code());
    }

    /// Switch language, persist it, and update the root element.
    pub fn set_language<B: StorageBackend>(
        &mut self,
        language: Language,
        store: &PreferenceStore<B>,
        root: &mut impl DocumentRoot,
    ) {
        self.language = language;
        store.write(LANGUAGE_KEY, language.code());
        self.apply(root);
    }

    /// Switch to the other language. Returns the new language.
    pub fn toggle<B: StorageBackend>(&mut self, store: &PreferenceStore<B>, root: &mut impl DocumentRoot) -> Language {
        let next = self.language.toggled();
        self.set_language(next, store, root);
        next
    }
}
