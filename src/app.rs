//! Fruit Desk Frontend App
//!
//! Router over the six screens plus the toast overlay.

use faq_core::AppConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::StaticSegment;

use crate::components::{
    AboutPage, ChatPage, FaqPage, LoginPage, NotFound, SectionLinks, ToastStack, TranslationPage,
};
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("[APP] FAQ store at {}", config.faq_api_base);

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=StaticSegment("") view=LoginPage />
                    <Route path=StaticSegment("sections") view=SectionLinks />
                    <Route path=StaticSegment("about") view=AboutPage />
                    <Route path=StaticSegment("chat") view=ChatPage />
                    <Route path=StaticSegment("translate") view=TranslationPage />
                    <Route path=StaticSegment("faqs") view=FaqPage />
                </Routes>
            </main>
            <ToastStack />
        </Router>
    }
}
