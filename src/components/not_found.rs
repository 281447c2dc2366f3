//! Fallback for paths outside the route table

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="page-card">
            <h1>"Page not found"</h1>
            <A href=AppRoute::Sections.path()>"Back to sections"</A>
        </div>
    }
}
