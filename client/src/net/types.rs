//! Wire DTOs for the remote portfolio API.
//!
//! DESIGN
//! ======
//! Every response is an envelope `{ success, data?, message? }`. Payloads are
//! decoded into typed models and then checked with `Validate` before anything
//! renders them, so a malformed or partial response becomes an `ApiError` at
//! the boundary instead of a blank field in the view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// Response wrapper returned by every API resource.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Unwrap a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` when `success` is false or `data` is absent.
    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| "response carried no data".to_owned()),
            )),
            (false, _) => Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| "unsuccessful response".to_owned()),
            )),
        }
    }
}

/// Boundary checks applied to decoded payloads.
pub trait Validate: Sized {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Reason this value must not be rendered, if any.
    fn problem(&self) -> Option<&'static str>;

    /// Accept the value or turn its problem into an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Invalid` when `problem` reports one.
    fn validated(self) -> Result<Self, ApiError> {
        match self.problem() {
            Some(reason) => Err(ApiError::Invalid { entity: Self::ENTITY, reason: reason.to_owned() }),
            None => Ok(self),
        }
    }
}

impl<T: Validate> Validate for Vec<T> {
    const ENTITY: &'static str = T::ENTITY;

    fn problem(&self) -> Option<&'static str> {
        None
    }

    /// Lists are never rejected as a whole; invalid items are dropped.
    fn validated(self) -> Result<Self, ApiError> {
        let total = self.len();
        let kept: Vec<T> = self.into_iter().filter(|item| item.problem().is_none()).collect();
        if kept.len() < total {
            log::warn!("dropped {} invalid {} item(s) from response", total - kept.len(), T::ENTITY);
        }
        Ok(kept)
    }
}

/// The site owner's profile from `/user/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// Absolute URL of the profile picture.
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl Validate for Profile {
    const ENTITY: &'static str = "profile";

    fn problem(&self) -> Option<&'static str> {
        self.name.trim().is_empty().then_some("name is empty")
    }
}

/// A portfolio project from `/projects` or `/projects/{slug}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(alias = "_id")]
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Long-form write-up shown on the details page.
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Screenshot URLs, first one is the cover image.
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Project {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

impl Validate for Project {
    const ENTITY: &'static str = "project";

    fn problem(&self) -> Option<&'static str> {
        if self.slug.trim().is_empty() {
            Some("slug is empty")
        } else if self.title.trim().is_empty() {
            Some("title is empty")
        } else {
            None
        }
    }
}

/// A certification from `/certifications`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub issuer: String,
    /// Issue date as sent by the API (display only, not parsed).
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub credential_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for Certification {
    const ENTITY: &'static str = "certification";

    fn problem(&self) -> Option<&'static str> {
        self.title.trim().is_empty().then_some("title is empty")
    }
}
