//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`wallet`, `chat`, drawer flows, `ui`) so
//! components depend on small focused models. None of these types touch
//! Leptos; pages wrap them in `RwSignal`s.

pub mod chat;
pub mod deposit_flow;
pub mod receive;
pub mod send_flow;
pub mod ui;
pub mod wallet;
