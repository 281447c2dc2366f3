//! Login Page Component
//!
//! Placeholder sign-in. Submitting always continues to the section index;
//! no credentials are checked or stored.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;

#[derive(Clone, Copy, PartialEq)]
enum LoginTab {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();
    let (tab, set_tab) = signal(LoginTab::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (remember, set_remember) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        log::debug!("[LOGIN] Continuing as {}", email.get_untracked());
        navigate(AppRoute::Sections.path(), Default::default());
    };

    let tab_class = move |which: LoginTab| {
        move || if tab.get() == which { "tab-btn active" } else { "tab-btn" }
    };

    view! {
        <div class="page-center">
            <div class="page-card narrow">
                <h1>"Login"</h1>
                <p class="page-subtitle">
                    "By signing in you are agreeing to our "
                    <a href="#">"Term and privacy policy"</a>
                </p>

                <div class="tab-row">
                    <button class=tab_class(LoginTab::Login) on:click=move |_| set_tab.set(LoginTab::Login)>
                        "Login"
                    </button>
                    <button class=tab_class(LoginTab::Register) on:click=move |_| set_tab.set(LoginTab::Register)>
                        "Register"
                    </button>
                </div>

                <p class="muted" class:hidden=move || tab.get() != LoginTab::Register>
                    "Registration form would go here."
                </p>
                // Both tabs stay mounted; only visibility switches
                <form
                    class="login-form"
                    class:hidden=move || tab.get() != LoginTab::Login
                    on:submit=on_submit
                >
                    <label for="email">"Email Address"</label>
                    <input
                        id="email"
                        type="email"
                        placeholder="m@example.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <label class="checkbox-row">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| set_remember.set(event_target_checked(&ev))
                        />
                        "Remember password"
                    </label>
                    <button class="primary-btn" type="submit">"Login"</button>
                </form>

                <div class="login-footer">
                    <p class="muted">"or connect with"</p>
                    <div class="social-row">
                        <button class="icon-btn" title="Facebook">"f"</button>
                        <button class="icon-btn" title="Instagram">"◎"</button>
                        <button class="icon-btn" title="LinkedIn">"in"</button>
                    </div>
                    <button class="outline-btn">"Login with Touch ID"</button>
                </div>
            </div>
        </div>
    }
}
