//! Wallet dashboard: home, assistant, history and profile tabs plus the
//! send/deposit/receive drawers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wallet ledger and chat history are app-level contexts so they survive
//! navigation between `/` and `/app`. Tab, drawer and demo-banner state is
//! page-local and seeded from the `?start=` query parameter.
//!
//! ARCHITECTURE
//! ============
//! Drawers and the assistant never mutate the ledger themselves; they hand a
//! completed operation to the callbacks defined here, which apply it and log
//! the resulting row.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use rust_decimal::Decimal;

use crate::components::action_button::{ActionButton, ButtonVariant};
use crate::components::balance_card::BalanceCard;
use crate::components::chat_panel::ChatPanel;
use crate::components::demo_banner::DemoBanner;
use crate::components::deposit_drawer::DepositDrawer;
use crate::components::logo::{Logo, LogoSize};
use crate::components::nav_bar::NavBar;
use crate::components::receive_drawer::ReceiveDrawer;
use crate::components::send_drawer::SendDrawer;
use crate::components::transaction_item::TransactionItem;
use crate::state::chat::Draft;
use crate::state::receive::{PROFILE_INITIALS, PROFILE_NAME, PROFILE_PHONE};
use crate::state::send_flow::Outgoing;
use crate::state::ui::{DashboardTab, Drawer, UiState};
use crate::state::wallet::{Transaction, WalletState};

/// Rows shown under "Recent Activity" on the home tab.
const RECENT_LIMIT: usize = 3;

const SETTINGS_ITEMS: [&str; 4] = ["Notifications", "Security", "Payment Methods", "Help & Support"];

fn log_ledger(tx: &Transaction) {
    #[cfg(feature = "hydrate")]
    log::info!("ledger: {:?} {} {} ({})", tx.kind, tx.amount, tx.currency, tx.recipient);
    #[cfg(not(feature = "hydrate"))]
    let _ = tx;
}

fn stagger(index: usize) -> u32 {
    u32::try_from(index).unwrap_or_default().saturating_mul(50)
}

fn transaction_rows(rows: Vec<Transaction>) -> impl IntoView {
    rows.into_iter()
        .enumerate()
        .map(|(i, tx)| view! { <TransactionItem tx=tx delay_ms=stagger(i)/> })
        .collect::<Vec<_>>()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let wallet = expect_context::<RwSignal<WalletState>>();
    let query = use_query_map();
    let ui = RwSignal::new(UiState::from_start(query.with_untracked(|q| q.get("start")).as_deref()));
    let tab = Memo::new(move |_| ui.with(|u| u.tab));

    let open = move |drawer: Drawer| ui.update(|u| u.open(drawer));
    let close_drawer = Callback::new(move |()| ui.update(UiState::close_drawer));
    let select_tab = Callback::new(move |next: DashboardTab| ui.update(|u| u.select_tab(next)));

    let on_send = Callback::new(move |outgoing: Outgoing| {
        wallet.update(|w| log_ledger(w.send(outgoing.amount, &outgoing.recipient)));
    });
    let on_chat_send = Callback::new(move |draft: Draft| {
        wallet.update(|w| log_ledger(w.send(draft.amount, &draft.recipient)));
    });
    let on_deposit = Callback::new(move |amount: Decimal| {
        wallet.update(|w| log_ledger(w.deposit(amount)));
    });
    let on_demo_funds = Callback::new(move |amount: Decimal| {
        wallet.update(|w| log_ledger(w.add_demo_funds(amount)));
    });
    let on_banner_toggle = Callback::new(move |expanded: bool| ui.update(|u| u.demo_banner_expanded = expanded));

    let home_tab = move || {
        view! {
            <div class="dashboard__tab">
                <header class="dashboard__header">
                    <Logo size=LogoSize::Sm/>
                    <button class="icon-button" aria-label="Scan QR code" on:click=move |_| open(Drawer::Receive)>
                        "▦"
                    </button>
                </header>

                <BalanceCard balance=Signal::derive(move || wallet.with(|w| w.balance))/>

                <div class="dashboard__actions">
                    <ActionButton
                        icon="+"
                        label="Add Money"
                        variant=ButtonVariant::Secondary
                        on_click=Callback::new(move |()| open(Drawer::Deposit))
                    />
                    <ActionButton
                        icon="➤"
                        label="Send"
                        variant=ButtonVariant::Accent
                        on_click=Callback::new(move |()| open(Drawer::Send))
                    />
                </div>

                <section class="recent">
                    <div class="recent__header">
                        <h2>"Recent Activity"</h2>
                        <button class="link-button" on:click=move |_| select_tab.run(DashboardTab::History)>
                            "View all →"
                        </button>
                    </div>
                    <div class="recent__list">
                        {move || transaction_rows(wallet.with(|w| w.recent(RECENT_LIMIT).to_vec()))}
                    </div>
                </section>
            </div>
        }
        .into_any()
    };

    let history_tab = move || {
        view! {
            <div class="dashboard__tab">
                <h1 class="dashboard__title">"Transaction History"</h1>
                {move || {
                    let rows = wallet.with(|w| w.transactions.clone());
                    if rows.is_empty() {
                        return view! {
                            <div class="empty-state">
                                <p>"No transactions yet"</p>
                                <p class="empty-state__hint">"Your transaction history will appear here"</p>
                            </div>
                        }
                        .into_any();
                    }
                    view! { <div class="history__list">{transaction_rows(rows)}</div> }.into_any()
                }}
            </div>
        }
        .into_any()
    };

    let profile_tab = || {
        view! {
            <div class="dashboard__tab">
                <h1 class="dashboard__title">"Profile"</h1>
                <div class="card profile-card">
                    <div class="profile-card__avatar">{PROFILE_INITIALS}</div>
                    <div>
                        <p class="profile-card__name">{PROFILE_NAME}</p>
                        <p class="profile-card__phone">{PROFILE_PHONE}</p>
                    </div>
                </div>
                <div class="card">
                    <h3 class="card__title">"Account Status"</h3>
                    <div class="status-line">
                        <div class="status-line__dot"></div>
                        <span class="status-line__text">"Mock Verified"</span>
                    </div>
                    <p class="card__hint">"Demo account • Full features enabled"</p>
                </div>
                <div class="card settings">
                    <h3 class="card__title">"Settings"</h3>
                    {SETTINGS_ITEMS
                        .into_iter()
                        .map(|item| {
                            view! {
                                <button class="settings__item">
                                    <span>{item}</span>
                                    <span aria-hidden="true">"›"</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="dashboard" class:dashboard--chat=move || tab.get() == DashboardTab::Chat>
            {move || match tab.get() {
                DashboardTab::Home => home_tab(),
                DashboardTab::Chat => {
                    view! {
                        <div class="dashboard__tab dashboard__tab--chat">
                            <ChatPanel on_transaction_complete=on_chat_send/>
                        </div>
                    }
                    .into_any()
                }
                DashboardTab::History => history_tab(),
                DashboardTab::Profile => profile_tab(),
            }}

            <Show when=move || ui.with(UiState::shows_demo_banner)>
                <DemoBanner
                    expanded=Signal::derive(move || ui.with(|u| u.demo_banner_expanded))
                    on_toggle=on_banner_toggle
                    on_add_funds=on_demo_funds
                />
            </Show>

            <NavBar active=Signal::derive(move || tab.get()) on_select=select_tab/>

            <Show when=move || ui.with(|u| u.is_open(Drawer::Send))>
                <SendDrawer on_close=close_drawer on_send=on_send/>
            </Show>
            <Show when=move || ui.with(|u| u.is_open(Drawer::Deposit))>
                <DepositDrawer on_close=close_drawer on_deposit=on_deposit/>
            </Show>
            <Show when=move || ui.with(|u| u.is_open(Drawer::Receive))>
                <ReceiveDrawer on_close=close_drawer/>
            </Show>
        </div>
    }
}
