//! Transient, non-blocking notifications.

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays on screen before auto-dismissing, in ms.
const TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

/// Service for centralized toast management
///
/// Provided once at the application root; pages pull it from context and
/// call `error`/`info`.
#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Show an informational toast
    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastLevel::Info, message.into());
    }

    /// Show an error toast
    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastLevel::Error, message.into());
    }

    /// Dismiss a toast by id
    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, level: ToastLevel, message: String) {
        let toast = Toast {
            id: Uuid::new_v4(),
            level,
            message,
        };
        let id = toast.id;
        self.toasts.update(|list| list.push(toast));

        // Auto-dismiss after the display window; a click may already have
        // removed the toast, in which case dismiss is a no-op.
        let service = *self;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }
}

/// Renders the active toasts in the top-right corner. Click dismisses.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host">
            <For each=move || service.toasts.get() key=|t| t.id let:toast>
                {{
                    let level_class = match toast.level {
                        ToastLevel::Info => "toast--info",
                        ToastLevel::Error => "toast--error",
                    };
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", level_class)
                            on:click=move |_| service.dismiss(id)
                        >
                            {toast.message.clone()}
                        </div>
                    }
                }}
            </For>
        </div>
    }
}
