//! Per-page fetch lifecycle: loading, populated, or errored.
//!
//! DESIGN
//! ======
//! A page starts in `Loading`, issues one fetch on mount, and settles exactly
//! once. A failure becomes `Errored` unless the page supplies a fallback
//! payload for what it asked for. Settled states are terminal; the only way
//! back to `Loading` is a remount or a manual reload.
//!
//! CANCELLATION
//! ============
//! `MountGuard` is advisory. The request is not aborted on unmount; its
//! result is dropped instead of being written into a disposed signal.

#[cfg(test)]
#[path = "load_test.rs"]
mod load_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::net::api::ApiError;

/// Automatic retries for the projects list query. Every other fetch is one-shot.
pub const PROJECTS_RETRIES: u32 = 1;

#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Populated(T),
    Errored(ApiError),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Populated(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Errored(e) => Some(e),
            _ => None,
        }
    }
}

/// Turn a fetch result into a settled state, substituting the fallback
/// payload for a failure when one exists.
pub fn settle<T>(result: Result<T, ApiError>, fallback: impl FnOnce() -> Option<T>) -> LoadState<T> {
    match result {
        Ok(data) => LoadState::Populated(data),
        Err(e) => match fallback() {
            Some(data) => {
                log::warn!("fetch failed, rendering fallback payload: {e}");
                LoadState::Populated(data)
            }
            None => {
                log::warn!("fetch failed: {e}");
                LoadState::Errored(e)
            }
        },
    }
}

/// Await one fetch and settle it.
pub async fn load<T>(
    fetch: impl Future<Output = Result<T, ApiError>>,
    fallback: impl FnOnce() -> Option<T>,
) -> LoadState<T> {
    settle(fetch.await, fallback)
}

/// Await `fetch`, repeating it up to `retries` more times while it fails,
/// then settle the last result.
pub async fn load_with_retry<T, F, Fut>(mut fetch: F, retries: u32, fallback: impl FnOnce() -> Option<T>) -> LoadState<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let mut result = fetch().await;
    let mut attempt = 0;
    while attempt < retries {
        let Err(e) = &result else {
            break;
        };
        attempt += 1;
        log::info!("retrying fetch ({attempt}/{retries}) after: {e}");
        result = fetch().await;
    }
    settle(result, fallback)
}

/// Mounted flag shared between a page and its in-flight fetch.
#[derive(Clone, Debug)]
pub struct MountGuard(Arc<AtomicBool>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owning page as unmounted.
    pub fn release(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Await `task` and keep its output only if `guard` is still mounted when it
/// completes.
pub async fn guarded<T>(guard: MountGuard, task: impl Future<Output = T>) -> Option<T> {
    let outcome = task.await;
    if guard.is_mounted() {
        Some(outcome)
    } else {
        log::debug!("discarding result for unmounted page");
        None
    }
}
