//! Toast Stack Component
//!
//! Bottom-right overlay listing the toasts held in AppContext.

use leptos::prelude::*;

use crate::context::{use_app_context, ToastVariant};

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let title = toast.title();
                    let class = match toast.variant {
                        ToastVariant::Success => "toast success",
                        ToastVariant::Error => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <strong>{title}</strong>
                                <p>{toast.description}</p>
                            </div>
                            <button class="toast-close" on:click=move |_| ctx.dismiss(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
