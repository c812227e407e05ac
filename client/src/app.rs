//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, welcome::WelcomePage};
use crate::state::{chat::ChatState, wallet::WalletState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session's wallet and conversation so they survive moving
/// between the welcome screen and the dashboard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wallet = RwSignal::new(WalletState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(wallet);
    provide_context(chat);

    Effect::new(move || chat.update(ChatState::stamp_greeting));

    view! {
        <Stylesheet id="leptos" href="/pkg/swiftkes.css"/>
        <Title text="SwiftKes"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WelcomePage/>
                <Route path=StaticSegment("app") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
