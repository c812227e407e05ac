//! Conversational transfer assistant.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the shared `ChatState` and turns its `Followup` results into
//! timers: replies appear after a typing delay, confirmed transfers settle
//! after the processing delay and are handed to the ledger through
//! `on_transaction_complete`.

#[cfg(test)]
#[path = "chat_panel_test.rs"]
mod chat_panel_test;

use leptos::prelude::*;

use crate::components::chat_bubble::ChatBubble;
use crate::state::chat::{ChatState, Draft, Followup, transaction_reference};
use crate::state::wallet::WalletState;
use crate::util::timer::{self, PROCESSING_DELAY, TYPING_DELAY};

/// Header subtitle under the assistant's name.
pub fn status_line(typing: bool) -> &'static str {
    if typing { "typing..." } else { "Online • Ready to help" }
}

#[component]
pub fn ChatPanel(on_transaction_complete: Callback<Draft>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let wallet = expect_context::<RwSignal<WalletState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        chat.track();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let text = input.get_untracked();
        let followup = wallet
            .with_untracked(|w| chat.try_update(|c| c.submit(&text, w)))
            .unwrap_or(Followup::None);

        match followup {
            Followup::None => return,
            Followup::Reply(reply) => {
                timer::after(TYPING_DELAY, move || {
                    let _ = chat.try_update(|c| c.deliver(reply));
                });
            }
            Followup::Settle => {
                timer::after(PROCESSING_DELAY, move || {
                    let reference = transaction_reference();
                    if let Some(draft) = chat.try_update(|c| c.complete_processing(&reference)).flatten() {
                        on_transaction_complete.run(draft);
                    }
                });
            }
        }
        input.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let locked = move || !chat.with(ChatState::accepts_input);
    let can_send = move || !locked() && !input.with(|text| text.trim().is_empty());

    view! {
        <div class="chat-panel">
            <div class="chat-panel__header">
                <div class="chat-panel__avatar" aria-hidden="true">"🤖"</div>
                <div>
                    <h3 class="chat-panel__name">"SwiftKes Assistant"</h3>
                    <p class="chat-panel__status">{move || status_line(chat.with(|c| c.typing))}</p>
                </div>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.with(|c| c.messages.clone())
                        .into_iter()
                        .map(|message| view! { <ChatBubble message=message/> })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    chat.with(|c| c.typing)
                        .then(|| {
                            view! {
                                <div class="chat-panel__typing">
                                    <div class="spinner spinner--small" aria-hidden="true"></div>
                                    <span>"SwiftKes is typing..."</span>
                                </div>
                            }
                        })
                }}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type a message..."
                    aria-label="Message input"
                    disabled=locked
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button class="btn btn--hero chat-panel__send" type="submit" aria-label="Send message" disabled=move || !can_send()>
                    "➤"
                </button>
            </form>
        </div>
    }
}
