//! Large rounded quick-action button used on the home tab.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Accent,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "action-button--primary",
            Self::Secondary => "action-button--secondary",
            Self::Accent => "action-button--accent",
        }
    }
}

#[component]
pub fn ActionButton(
    icon: &'static str,
    label: &'static str,
    #[prop(optional)] variant: ButtonVariant,
    on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class=format!("action-button {}", variant.class())
            aria-label=label
            on:click=move |_| on_click.run(())
        >
            <span class="action-button__icon" aria-hidden="true">{icon}</span>
            {label}
        </button>
    }
}
