use chrono::{DateTime, Utc};
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

/// How long a toast stays up unless dismissed.
pub const TOAST_LIFETIME_MS: u32 = 5_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}

impl ToastLevel {
    pub fn as_class(&self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Toast {
    pub fn new(level: ToastLevel, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            created_at: Utc::now(),
        }
    }
}

/// Handle to the toast stack, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
        }
    }

    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    /// Shows a toast and schedules its removal.
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let toast = Toast::new(level, message);
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));

        let toaster = *self;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            toaster.dismiss(id);
        });
        id
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Error, message)
    }

    pub fn info(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastLevel::Info, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().expect("Toaster context")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let toasts = toaster.toasts();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=format!("toast {}", toast.level.as_class())
                                role="status"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
