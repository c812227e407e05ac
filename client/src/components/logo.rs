//! Two-tone SwiftKes wordmark.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogoSize {
    Sm,
    Md,
    #[default]
    Lg,
}

impl LogoSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "logo__mark--sm",
            Self::Md => "logo__mark--md",
            Self::Lg => "logo__mark--lg",
        }
    }
}

#[component]
pub fn Logo(#[prop(optional)] size: LogoSize, #[prop(optional)] tagline: bool) -> impl IntoView {
    view! {
        <div class="logo">
            <div class=format!("logo__mark {}", size.class())>
                <span class="logo__swift">"Swift"</span>
                <span class="logo__kes">"Kes"</span>
            </div>
            {tagline.then(|| view! { <p class="logo__tagline">"Send money to Kenya instantly"</p> })}
        </div>
    }
}
