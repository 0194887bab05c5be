//! Page-level toast notifications.
//!
//! One message at a time. A new message replaces the current one and
//! restarts the dismissal timer.

use std::time::Duration;

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct Toaster {
    message: RwSignal<Option<String>>,
    timer: StoredValue<Option<TimeoutHandle>>,
    ttl: Duration,
}

impl Toaster {
    pub fn success(&self, text: impl Into<String>) {
        let text = text.into();
        log::info!("toast: {text}");

        if let Some(handle) = self.timer.get_value() {
            handle.clear();
        }
        self.message.set(Some(text));

        let message = self.message;
        let timer = self.timer;
        match set_timeout_with_handle(
            move || {
                timer.try_set_value(None);
                message.try_set(None);
            },
            self.ttl,
        ) {
            Ok(handle) => self.timer.set_value(Some(handle)),
            Err(err) => log::warn!("toast: could not schedule dismissal: {err:?}"),
        }
    }

    pub fn dismiss(&self) {
        if let Some(handle) = self.timer.get_value() {
            handle.clear();
        }
        self.timer.set_value(None);
        self.message.set(None);
    }
}

/// Create a toaster for this subtree. Call once near the root.
pub fn provide_toaster(ttl: Duration) -> Toaster {
    let toaster = Toaster {
        message: RwSignal::new(None),
        timer: StoredValue::new(None),
        ttl,
    };
    provide_context(toaster);

    on_cleanup(move || {
        if let Some(handle) = toaster.timer.try_get_value().flatten() {
            handle.clear();
        }
    });

    toaster
}

pub fn use_toaster() -> Option<Toaster> {
    use_context::<Toaster>()
}

/// Fixed-position region that renders the current toast.
#[component]
pub fn ToastHost() -> impl IntoView {
    let Some(toaster) = use_toaster() else {
        log::warn!("ToastHost mounted without a Toaster in context");
        return ().into_any();
    };
    let message = toaster.message;

    view! {
        <div class="toast-region" role="status" aria-live="polite">
            <Show when=move || message.with(Option::is_some)>
                <div class="toast toast-success">
                    <span class="toast-dot"></span>
                    <span class="toast-text">{move || message.get().unwrap_or_default()}</span>
                    <button class="toast-close" aria-label="Dismiss" on:click=move |_| toaster.dismiss()>
                        "×"
                    </button>
                </div>
            </Show>
        </div>
    }
    .into_any()
}
