//! FAQ Page Component
//!
//! Accordion of FAQ entries with add, edit and delete. Every change goes
//! through the FAQ controller; the list re-renders from the store mirror.

use faq_core::FaqEntry;
use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, FaqDialog};
use crate::context::use_app_context;
use crate::faq_controller::FaqController;
use crate::store::{
    store_entries, store_faq_body, store_is_expanded, store_open_editor, store_toggle_expanded,
    FaqBody,
};

/// One accordion row
#[component]
fn FaqItem(entry: FaqEntry, controller: FaqController) -> impl IntoView {
    let store = controller.store();
    let id = entry.id.clone();
    let is_open = {
        let id = id.clone();
        move || store_is_expanded(&store, &id)
    };
    let toggle = {
        let id = id.clone();
        move |_| store_toggle_expanded(&store, id.clone())
    };
    let chevron = {
        let is_open = is_open.clone();
        move || if is_open() { "▲" } else { "▼" }
    };
    let edit = {
        let entry = entry.clone();
        move |_| store_open_editor(&store, Some(entry.clone()))
    };

    view! {
        <div class="faq-item">
            <button class="faq-trigger" on:click=toggle>
                <span>{entry.question}</span>
                <span class="faq-chevron">{chevron}</span>
            </button>
            <div class="faq-content" class:hidden=move || !is_open()>
                <p>{entry.answer}</p>
                <div class="faq-actions">
                    <button class="outline-btn" on:click=edit>"Edit"</button>
                    <DeleteConfirmButton
                        button_class="destructive-btn"
                        on_confirm=move |_| controller.delete(id.clone())
                    />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let ctx = use_app_context();
    let controller = FaqController::new(ctx);
    let store = controller.store();

    // Load once per visit to the screen
    Effect::new(move |_| {
        controller.load();
    });

    view! {
        <div class="faq-page">
            <h1>"Frequently Asked Questions"</h1>

            <button class="primary-btn" on:click=move |_| store_open_editor(&store, None)>
                "Add New FAQ"
            </button>

            {move || match store_faq_body(&store) {
                FaqBody::Loader => view! { <div class="loading">"Loading FAQs..."</div> }.into_any(),
                FaqBody::LoadError => view! {
                    <div class="faq-empty">
                        <p>"FAQs could not be loaded."</p>
                        <button class="outline-btn" on:click=move |_| controller.load()>"Retry"</button>
                    </div>
                }.into_any(),
                FaqBody::List => view! {
                    <div class="faq-accordion">
                        <For
                            each=move || store_entries(&store)
                            key=|entry| entry.clone()
                            children=move |entry| view! { <FaqItem entry=entry controller=controller /> }
                        />
                    </div>
                    <p class="item-count">{move || format!("{} FAQs", store_entries(&store).len())}</p>
                }.into_any(),
            }}

            <FaqDialog controller=controller />
        </div>
    }
}
