//! Chat Page Component
//!
//! Phone-style frame around the canned fruit chatbot.

use faq_core::chat::{ChatMessage, ChatOption, ChatSession, Fruit, Sender, FRUITS};
use leptos::html::Div;
use leptos::prelude::*;

/// Compact card used in the catalogue listing
#[component]
fn FruitRow(fruit: &'static Fruit) -> impl IntoView {
    view! {
        <div class="fruit-row">
            <span class="fruit-icon">{fruit.icon}</span>
            <div class="fruit-info">
                <div class="fruit-name">{fruit.name}</div>
                <div class="fruit-price">{fruit.price()}</div>
            </div>
            <div class="fruit-qty">"1"</div>
        </div>
    }
}

/// Expanded card for the selected fruit
#[component]
fn FruitDetail(fruit: &'static Fruit) -> impl IntoView {
    view! {
        <div class="fruit-detail">
            <div class="fruit-detail-head">
                <span class="fruit-icon large">{fruit.icon}</span>
                <div>
                    <h3>{fruit.name}</h3>
                    <p>{fruit.price()}</p>
                </div>
            </div>
            <p>{fruit.description}</p>
        </div>
    }
}

fn message_view(message: ChatMessage, detail: Option<&'static Fruit>) -> impl IntoView {
    let (row_class, bubble_class) = match message.sender {
        Sender::User => ("chat-row user", "chat-bubble user"),
        Sender::Bot => ("chat-row", "chat-bubble bot"),
    };
    let catalogue = message.shows_catalogue.then(|| {
        view! {
            <div class="fruit-list">
                {FRUITS.iter().map(|fruit| view! { <FruitRow fruit=fruit /> }).collect_view()}
            </div>
        }
    });

    view! {
        <div class=row_class>
            <div class=bubble_class>{message.text}</div>
            {catalogue}
            {detail.map(|fruit| view! { <FruitDetail fruit=fruit /> })}
        </div>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let session = RwSignal::new(ChatSession::new());
    let scroll_ref = NodeRef::<Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        session.track();
        if let Some(el) = scroll_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let choose = move |option: ChatOption| session.update(|s| s.choose(option));

    view! {
        <div class="page-center">
            <div class="chat-frame">
                <div class="chat-header">
                    <span class="chat-avatar">"B"</span>
                    <span class="chat-title">"Fruit Bot"</span>
                </div>

                <div class="chat-scroll" node_ref=scroll_ref>
                    {move || session.with(|s| {
                        s.messages()
                            .iter()
                            .cloned()
                            .map(|message| {
                                let detail = s.detail_for(&message);
                                message_view(message, detail)
                            })
                            .collect_view()
                    })}
                </div>

                <div class="chat-options">
                    {move || session.with(|s| s.options())
                        .into_iter()
                        .map(|option| {
                            let label = match &option {
                                ChatOption::Details(name) => name.clone(),
                                other => other.label(),
                            };
                            view! {
                                <button
                                    class="outline-btn"
                                    on:click=move |_| choose(option.clone())
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
