//! About Page Component

use leptos::prelude::*;

const ABOUT_TEXT: &str = "Whether you're looking to discover new fruits, understand their \
    nutritional values, or find the perfect fruit for your diet, our AI-driven chatbot is here \
    to assist. We provide personalized fruit recommendations tailored to your health needs, \
    making it easier for you to integrate the best fruits into your daily routine.";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="page-card wide">
                <h1>"About Us"</h1>
                <p class="page-subtitle">"Learn more about our services"</p>
                <p class="about-text">{ABOUT_TEXT}</p>
            </div>
        </div>
    }
}
