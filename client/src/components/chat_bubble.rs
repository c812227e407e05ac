//! One message bubble in the assistant conversation.

use leptos::prelude::*;

use crate::state::chat::{Author, ChatMessage};

#[component]
pub fn ChatBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.author == Author::User;

    view! {
        <div class="chat-bubble" class:chat-bubble--user=is_user class:chat-bubble--bot=!is_user>
            <div class="chat-bubble__body">
                <p class="chat-bubble__text">{message.text}</p>
                <div class="chat-bubble__meta">
                    <span>{message.timestamp}</span>
                    {is_user.then(|| view! { <span class="chat-bubble__receipt" aria-label="Read">"✓✓"</span> })}
                </div>
            </div>
        </div>
    }
}
