//! Networking modules for the remote portfolio API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the envelope and models,
//! and `fallback` holds the literal payloads used when a call fails.

pub mod api;
pub mod fallback;
pub mod types;
