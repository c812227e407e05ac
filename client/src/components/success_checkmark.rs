//! Animated check mark shown when a drawer operation succeeds.

use leptos::prelude::*;

#[component]
pub fn SuccessCheckmark(#[prop(default = 80)] size: u32) -> impl IntoView {
    view! {
        <div class="success-check">
            <svg width=size height=size viewBox="0 0 80 80" fill="none" xmlns="http://www.w3.org/2000/svg">
                <circle class="success-check__ring" cx="40" cy="40" r="38" stroke-width="4" fill="none"/>
                <path
                    class="success-check__tick"
                    d="M24 42L34 52L56 28"
                    stroke-width="4"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    fill="none"
                />
            </svg>
            <div class="success-check__pulse"></div>
        </div>
    }
}
