//! Routed page modules.

pub mod certifications;
pub mod contact;
pub mod experience;
pub mod home;
pub mod not_found;
pub mod project_details;
pub mod projects;
pub mod skills;
