//! Section Links Component
//!
//! Landing page after login: one card per screen.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::SECTIONS;

#[component]
pub fn SectionLinks() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="page-card wide">
                <h1>"Welcome"</h1>
                <p class="page-subtitle">"Choose a section to explore our services"</p>
                <div class="section-grid">
                    {SECTIONS.iter().map(|section| view! {
                        <A href=section.route.path() attr:class="section-link">
                            <span class="section-icon">{section.icon}</span>
                            <div>
                                <h3>{section.route.title()}</h3>
                                <p>{section.description}</p>
                            </div>
                        </A>
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}
