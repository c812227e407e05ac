//! Fixed-delay timers standing in for network latency.
//!
//! TRADE-OFFS
//! ==========
//! Timers only exist in the browser. During SSR no user event can schedule
//! one, so the native branch drops the callback.

use std::time::Duration;

/// Delay before a scripted assistant reply appears.
pub const TYPING_DELAY: Duration = Duration::from_millis(800);

/// Simulated settlement time for sends, deposits and chat confirmations.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(2000);

/// How long a "copied" check mark stays visible.
pub const COPIED_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Run `f` once after `delay` on the UI thread.
pub fn after(delay: Duration, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            f();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, f);
    }
}
