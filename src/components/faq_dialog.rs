//! FAQ Dialog Component
//!
//! Modal form shared by "Add New FAQ" and "Edit". Both fields are required
//! before the form can be submitted.

use leptos::prelude::*;

use crate::faq_controller::FaqController;
use crate::store::{
    store_answer, store_close_editor, store_dialog_open, store_form_complete, store_is_editing,
    store_question, store_set_answer, store_set_question,
};

#[component]
pub fn FaqDialog(controller: FaqController) -> impl IntoView {
    let store = controller.store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !store_form_complete(&store) {
            return;
        }
        controller.submit();
    };

    let title = move || if store_is_editing(&store) { "Edit FAQ" } else { "Add New FAQ" };
    let description = move || {
        if store_is_editing(&store) {
            "Update the question and answer below."
        } else {
            "Enter the new question and answer below."
        }
    };
    let submit_label = move || if store_is_editing(&store) { "Update FAQ" } else { "Add FAQ" };

    view! {
        <div class="dialog-backdrop" class:hidden=move || !store_dialog_open(&store)>
            <div class="dialog" role="dialog">
                <div class="dialog-header">
                    <h2>{title}</h2>
                    <button class="dialog-close" on:click=move |_| store_close_editor(&store)>"×"</button>
                </div>
                <p class="dialog-description">{description}</p>

                <form class="faq-form" on:submit=on_submit>
                    <label for="question">"Question"</label>
                    <input
                        id="question"
                        type="text"
                        required=true
                        prop:value=move || store_question(&store)
                        on:input=move |ev| store_set_question(&store, event_target_value(&ev))
                    />
                    <label for="answer">"Answer"</label>
                    <textarea
                        id="answer"
                        required=true
                        prop:value=move || store_answer(&store)
                        on:input=move |ev| store_set_answer(&store, event_target_value(&ev))
                    />
                    <div class="dialog-footer">
                        <button
                            class="primary-btn"
                            type="submit"
                            disabled=move || !store_form_complete(&store)
                        >
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
