//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and shared building blocks, reading the
//! locale and theme from the context providers installed by `App`.

pub mod footer;
pub mod layout;
pub mod navbar;
pub mod project_card;
pub mod status;
pub mod toast;
