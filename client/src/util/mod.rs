//! Browser/environment helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, the root element, media
//! queries) behind small traits so preference logic stays testable without a
//! browser.

pub mod color_scheme;
pub mod document;
pub mod fetch;
pub mod prefs;
pub mod storage;
