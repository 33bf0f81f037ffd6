//! Transient notice styled by the theme's `--toast-*` custom properties.

use leptos::prelude::*;

use crate::state::ui::Toast;
#[cfg(feature = "hydrate")]
use crate::state::ui::TOAST_DURATION_MS;

/// Show `message` and dismiss it after `TOAST_DURATION_MS`.
pub fn show_toast(toast: RwSignal<Toast>, message: String) {
    let mut seq = 0;
    toast.update(|t| seq = t.show(message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DURATION_MS).await;
        let _ = toast.try_update(|t| t.dismiss(seq));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

#[component]
pub fn ToastView(toast: RwSignal<Toast>) -> impl IntoView {
    view! {
        <Show when=move || toast.with(|t| t.message.is_some())>
            <div class="toast" role="status" aria-live="polite">
                {move || toast.with(|t| t.message.clone().unwrap_or_default())}
            </div>
        </Show>
    }
}
