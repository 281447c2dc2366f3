//! Application Context
//!
//! Shared state provided via Leptos Context API: endpoint configuration and
//! the toast notification surface.

use faq_core::AppConfig;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays up unless dismissed
pub const TOAST_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub variant: ToastVariant,
    pub description: String,
}

impl Toast {
    pub fn title(&self) -> &'static str {
        match self.variant {
            ToastVariant::Success => "Success",
            ToastVariant::Error => "Error",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    /// Visible toasts - write
    set_toasts: WriteSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u64>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let (toasts, set_toasts) = signal(Vec::<Toast>::new());
        Self {
            config: StoredValue::new(config),
            toasts,
            set_toasts,
            next_toast_id: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn notify_success(&self, description: impl Into<String>) {
        self.notify(ToastVariant::Success, description.into());
    }

    pub fn notify_error(&self, description: impl Into<String>) {
        self.notify(ToastVariant::Error, description.into());
    }

    /// Show a toast and schedule its removal
    fn notify(&self, variant: ToastVariant, description: String) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id + 1);
        self.set_toasts.update(|list| list.push(Toast { id, variant, description }));

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            set_toasts.try_update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.set_toasts.update(|list| list.retain(|t| t.id != id));
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
