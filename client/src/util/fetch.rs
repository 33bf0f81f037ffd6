//! Mount-scoped fetch helper for data pages.

use std::future::Future;

use leptos::prelude::*;

use crate::state::load::LoadState;
#[cfg(feature = "hydrate")]
use crate::state::load::{MountGuard, guarded};

/// Run `task` in the browser and write its settled state into `target`,
/// unless the owning scope was cleaned up first.
///
/// Call from a component body (one fetch per mount) or from an effect (one
/// fetch per run; a re-run discards the previous in-flight result). On the
/// server this is a no-op and `target` keeps rendering its loading state.
pub fn spawn_load<T>(target: RwSignal<LoadState<T>>, task: impl Future<Output = LoadState<T>> + 'static)
where
    T: Send + Sync + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        let guard = MountGuard::new();
        let task_guard = guard.clone();
        leptos::task::spawn_local(async move {
            if let Some(outcome) = guarded(task_guard, task).await {
                target.set(outcome);
            }
        });
        on_cleanup(move || guard.release());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, task);
    }
}
