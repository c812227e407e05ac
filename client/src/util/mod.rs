//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, clipboard,
//! clock) and pure money/validation rules from page and component logic.

pub mod browser;
pub mod clock;
pub mod money;
pub mod recipient;
pub mod timer;
