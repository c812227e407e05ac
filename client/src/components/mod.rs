//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Presentational primitives take plain props. Drawers and the chat panel
//! hold a step model from `state` in a local signal and report completed
//! operations to the dashboard through callbacks.

pub mod action_button;
pub mod balance_card;
pub mod chat_bubble;
pub mod chat_panel;
pub mod demo_banner;
pub mod deposit_drawer;
pub mod drawer;
pub mod feature_tile;
pub mod logo;
pub mod nav_bar;
pub mod receive_drawer;
pub mod send_drawer;
pub mod success_checkmark;
pub mod transaction_item;
