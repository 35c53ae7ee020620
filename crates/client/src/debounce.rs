//! Keystroke debouncing for panel search boxes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Lets only the latest of a burst of calls through.
///
/// Every call to [`SearchDebouncer::settle`] takes a ticket and sleeps for
/// the delay; it returns `true` only if no newer ticket was taken meanwhile.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    latest: AtomicU64,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            latest: AtomicU64::new(0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the delay; `true` if this call is still the latest one.
    pub async fn settle(&self) -> bool {
        let ticket = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.latest.load(Ordering::SeqCst) == ticket
    }
}
