//! Timers for spawned UI tasks

/// Roughly one animation frame at 60 Hz.
///
/// Per-frame animations step on a timeout of this length rather than on
/// `requestAnimationFrame`, so they keep ticking in background tabs. Each
/// step is a function of elapsed time, so a late tick only skips ahead.
pub const FRAME_MS: u32 = 16;

/// Resolve after `ms` milliseconds
#[cfg(feature = "web")]
pub async fn sleep(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

/// Timers only tick in the browser; elsewhere the future never resolves, so
/// delayed UI work is simply dropped.
#[cfg(not(feature = "web"))]
pub async fn sleep(_ms: u32) {
    std::future::pending::<()>().await;
}

/// Milliseconds since page load
#[cfg(feature = "web")]
pub fn now_ms() -> f64 {
    crate::dom::now_ms()
}

#[cfg(not(feature = "web"))]
pub fn now_ms() -> f64 {
    0.0
}
