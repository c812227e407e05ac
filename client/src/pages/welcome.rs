//! Landing page introducing the wallet's three flows.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use leptos::prelude::*;

use crate::components::feature_tile::{FeatureTile, TileVariant};
use crate::components::logo::{Logo, LogoSize};

const WHATSAPP_LINK: &str = "https://wa.me/1234567890?text=Hi%20SwiftKes";

/// Dashboard URL, optionally opening a specific flow on arrival.
pub fn app_link(start: Option<&str>) -> String {
    match start {
        Some(start) => format!("/app?start={start}"),
        None => "/app".to_owned(),
    }
}

#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="welcome">
            <header class="welcome__header">
                <Logo size=LogoSize::Lg tagline=true/>
            </header>

            <main class="welcome__main">
                <div class="welcome__tiles">
                    <FeatureTile
                        icon="💳"
                        title="Deposit"
                        description="Add money via Google Pay, Apple Pay, or card"
                        variant=TileVariant::Deposit
                        href=app_link(Some("deposit"))
                        delay_ms=100
                    />
                    <div class="welcome__tile-pair">
                        <FeatureTile
                            icon="▦"
                            title="Receive"
                            description="Get paid in USDC"
                            variant=TileVariant::Receive
                            href=app_link(Some("receive"))
                            delay_ms=200
                        />
                        <FeatureTile
                            icon="➤"
                            title="Send"
                            description="To M-Pesa or Bank"
                            variant=TileVariant::Send
                            href=app_link(Some("send"))
                            delay_ms=300
                        />
                    </div>
                </div>

                <div class="welcome__stats">
                    <div class="stat">
                        <p class="stat__value">"1.5%"</p>
                        <p class="stat__label">"Low fees"</p>
                    </div>
                    <div class="stat">
                        <p class="stat__value">"<30s"</p>
                        <p class="stat__label">"Delivery"</p>
                    </div>
                    <div class="stat">
                        <p class="stat__value">"24/7"</p>
                        <p class="stat__label">"Available"</p>
                    </div>
                </div>

                <a class="btn btn--accent btn--block btn--tall" href=app_link(None) aria-label="Get Started with SwiftKes">
                    "Get Started →"
                </a>

                <p class="welcome__alt">
                    "Or message us on "
                    <a class="welcome__whatsapp" href=WHATSAPP_LINK target="_blank" rel="noopener noreferrer">
                        "WhatsApp"
                    </a>
                </p>
            </main>

            <footer class="welcome__footer">
                <p>"Powered by stablecoins • Secure & instant"</p>
            </footer>
        </div>
    }
}
