//! Async sleep that works under every executor the app launches on.
//!
//! Desktop and mobile run spawned futures on tokio; the web build runs them
//! on wasm-bindgen-futures, where only browser timers are available.

use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}
