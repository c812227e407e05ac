//! Welcome-screen tile linking into one dashboard flow.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileVariant {
    Deposit,
    Receive,
    Send,
}

impl TileVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Deposit => "feature-tile--deposit",
            Self::Receive => "feature-tile--receive",
            Self::Send => "feature-tile--send",
        }
    }
}

#[component]
pub fn FeatureTile(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    variant: TileVariant,
    href: String,
    #[prop(optional)] delay_ms: u32,
) -> impl IntoView {
    view! {
        <a
            class=format!("feature-tile {}", variant.class())
            href=href
            style=format!("animation-delay: {delay_ms}ms;")
            aria-label=format!("{title}: {description}")
        >
            <div class="feature-tile__icon" aria-hidden="true">{icon}</div>
            <h3 class="feature-tile__title">{title}</h3>
            <p class="feature-tile__description">{description}</p>
        </a>
    }
}
