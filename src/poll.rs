//! Periodic Refresh
//!
//! Re-runs a loader on a fixed interval until stopped. Stands in for the
//! backend's realtime feed on order lists.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;

/// Stops the loop it came from
#[derive(Clone, Debug)]
pub struct PollHandle {
    active: Arc<AtomicBool>,
}

impl PollHandle {
    fn new() -> Self {
        Self {
            active: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn stop(&self) {
        self.active.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Relaxed)
    }
}

/// Call `tick` every `interval_ms` until the handle is stopped.
/// The first call happens after one interval.
pub fn poll_every<F, Fut>(interval_ms: u32, mut tick: F) -> PollHandle
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let handle = PollHandle::new();
    let running = handle.clone();
    spawn_local(async move {
        loop {
            TimeoutFuture::new(interval_ms).await;
            if !running.is_active() {
                break;
            }
            tick().await;
        }
        log::debug!("poll loop stopped");
    });
    handle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_stop_is_shared() {
        let handle = PollHandle::new();
        let clone = handle.clone();
        assert!(clone.is_active());
        handle.stop();
        assert!(!clone.is_active());
    }
}
