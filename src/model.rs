//! Shared state held by the event handler for the lifetime of the process.
use std::sync::atomic::{AtomicBool, Ordering};

/// Fires once per process. The gateway repeats `ready` after a full
/// reconnect; only the first one should announce the bot.
#[derive(Debug, Default)]
pub struct ReadyLatch {
    fired: AtomicBool,
}

impl ReadyLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true for the first call only.
    pub fn fire(&self) -> bool {
        !self.fired.swap(true, Ordering::AcqRel)
    }
}
