//! Translation Page Component
//!
//! Text box, language pair selectors and a read-only result box.

use std::rc::Rc;

use faq_core::{Language, TranslationClient};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

/// Language dropdown bound to a signal
#[component]
fn LanguageSelect(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: ReadSignal<Language>,
    set_value: WriteSignal<Language>,
) -> impl IntoView {
    view! {
        <div class="lang-select">
            <label for=id.clone()>{label}</label>
            <select
                id=id
                on:change=move |ev| {
                    if let Some(lang) = Language::from_code(&event_target_value(&ev)) {
                        set_value.set(lang);
                    }
                }
            >
                {Language::ALL.into_iter().map(|lang| view! {
                    <option value=lang.code() selected=move || value.get() == lang>
                        {lang.name()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn TranslationPage() -> impl IntoView {
    let ctx = use_app_context();
    let client = StoredValue::new_local(Rc::new(TranslationClient::new(
        ctx.config().translation_endpoint,
    )));

    let (source_text, set_source_text) = signal(String::new());
    let (translated_text, set_translated_text) = signal(String::new());
    let (source_lang, set_source_lang) = signal(Language::English);
    let (target_lang, set_target_lang) = signal(Language::Spanish);
    let (is_loading, set_is_loading) = signal(false);

    let handle_translate = move |_| {
        let text = source_text.get_untracked();
        if text.is_empty() || is_loading.get_untracked() {
            return;
        }
        let source = source_lang.get_untracked();
        let target = target_lang.get_untracked();
        let client = client.get_value();

        set_is_loading.set(true);
        spawn_local(async move {
            let result = client.translate(&text, source, target).await;
            set_translated_text.set(result);
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="page-center">
            <div class="page-card wide">
                <h1>"Translation Tool"</h1>

                <label for="sourceText">"Text to translate"</label>
                <textarea
                    id="sourceText"
                    class="text-box"
                    placeholder="Enter text to translate"
                    prop:value=move || source_text.get()
                    on:input=move |ev| set_source_text.set(event_target_value(&ev))
                />

                <div class="lang-row">
                    <LanguageSelect
                        id="sourceLang"
                        label="From"
                        value=source_lang
                        set_value=set_source_lang
                    />
                    <LanguageSelect
                        id="targetLang"
                        label="To"
                        value=target_lang
                        set_value=set_target_lang
                    />
                </div>

                <label for="translatedText">"Translation"</label>
                <textarea
                    id="translatedText"
                    class="text-box"
                    placeholder="Translation will appear here"
                    readonly=true
                    prop:value=move || translated_text.get()
                />

                <button
                    class="primary-btn full"
                    disabled=move || is_loading.get() || source_text.get().is_empty()
                    on:click=handle_translate
                >
                    {move || if is_loading.get() { "Translating..." } else { "Translate" }}
                </button>
            </div>
        </div>
    }
}
