use leptos::*;
use uuid::Uuid;

/// How long a toast stays on screen before dismissing itself.
pub const TOAST_DURATION_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn classes(&self) -> &'static str {
        match self {
            ToastKind::Success => {
                "bg-status-success-bg border-status-success-border text-status-success-text"
            }
            ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn schedule_dismiss(id: Uuid, on_dismiss: Callback<Uuid>) {
    gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || on_dismiss.call(id)).forget();
}

#[cfg(not(target_arch = "wasm32"))]
fn schedule_dismiss(_id: Uuid, _on_dismiss: Callback<Uuid>) {}

#[component]
pub fn ToastHost(toast: Signal<Option<Toast>>, on_dismiss: Callback<Uuid>) -> impl IntoView {
    create_effect(move |_| {
        if let Some(current) = toast.get() {
            schedule_dismiss(current.id, on_dismiss.clone());
        }
    });

    view! {
        <div class="fixed bottom-4 inset-x-0 flex justify-center pointer-events-none z-50">
            {move || toast.get().map(|current| {
                let id = current.id;
                let on_dismiss = on_dismiss.clone();
                view! {
                    <div
                        role="status"
                        class=format!(
                            "pointer-events-auto flex items-center gap-4 border px-4 py-3 rounded shadow {}",
                            current.kind.classes()
                        )
                    >
                        <span class="text-sm">{current.message}</span>
                        <button
                            class="text-sm font-semibold underline"
                            on:click=move |_| on_dismiss.call(id)
                        >
                            "Close"
                        </button>
                    </div>
                }
            })}
        </div>
    }
}
