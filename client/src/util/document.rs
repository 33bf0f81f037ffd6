//! Side effects on the document root element (`<html>`).
//!
//! The locale resolver writes `dir`/`lang` attributes; the theme resolver
//! toggles the `light`/`dark` class and the toast custom properties. Both go
//! through `DocumentRoot` so the same code runs against the real element in
//! the browser and against `MemoryRoot` during SSR and in tests.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::collections::BTreeMap;

/// Mutations the preference resolvers perform on the root element.
pub trait DocumentRoot {
    fn set_attribute(&mut self, name: &str, value: &str);
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn set_style_property(&mut self, name: &str, value: &str);
}

/// Detached root element that records what was applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryRoot {
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
}

impl MemoryRoot {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Classes in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.style.get(name).map(String::as_str)
    }
}

impl DocumentRoot for MemoryRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_owned(), value.to_owned());
    }

    fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        self.style.insert(name.to_owned(), value.to_owned());
    }
}

/// `document.documentElement` of the current window.
///
/// Every operation is best-effort: a missing document or a rejected DOM call
/// is logged and skipped.
#[cfg(feature = "hydrate")]
pub struct BrowserRoot {
    element: Option<web_sys::HtmlElement>,
}

#[cfg(feature = "hydrate")]
impl BrowserRoot {
    pub fn current() -> Self {
        use wasm_bindgen::JsCast;

        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
        if element.is_none() {
            log::warn!("document root element unavailable");
        }
        Self { element }
    }
}

#[cfg(feature = "hydrate")]
impl DocumentRoot for BrowserRoot {
    fn set_attribute(&mut self, name: &str, value: &str) {
        if let Some(el) = &self.element {
            if let Err(e) = el.set_attribute(name, value) {
                log::warn!("set_attribute({name}) failed: {e:?}");
            }
        }
    }

    fn add_class(&mut self, class: &str) {
        if let Some(el) = &self.element {
            if let Err(e) = el.class_list().add_1(class) {
                log::warn!("classList.add({class}) failed: {e:?}");
            }
        }
    }

    fn remove_class(&mut self, class: &str) {
        if let Some(el) = &self.element {
            if let Err(e) = el.class_list().remove_1(class) {
                log::warn!("classList.remove({class}) failed: {e:?}");
            }
        }
    }

    fn set_style_property(&mut self, name: &str, value: &str) {
        if let Some(el) = &self.element {
            if let Err(e) = el.style().set_property(name, value) {
                log::warn!("style.setProperty({name}) failed: {e:?}");
            }
        }
    }
}

/// The document root for the current environment.
pub fn document_root() -> impl DocumentRoot {
    #[cfg(feature = "hydrate")]
    {
        BrowserRoot::current()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MemoryRoot::default()
    }
}
