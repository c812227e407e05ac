//! Bottom sheet shared by the send, deposit and receive flows.
//!
//! Backdrop click, the ✕ button and Escape all route through `on_close`;
//! the owning drawer resets its own flow state there.

use leptos::prelude::*;

#[component]
pub fn DrawerSheet(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="drawer-backdrop" on:click=move |_| on_close.run(())></div>
        <div
            class="drawer"
            role="dialog"
            aria-modal="true"
            aria-label=title
            tabindex="0"
            on:keydown=on_keydown
        >
            <div class="drawer__handle" aria-hidden="true"></div>
            <div class="drawer__header">
                <h2 class="drawer__title">{title}</h2>
                <button class="drawer__close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
            <div class="drawer__content">{children()}</div>
        </div>
    }
}
