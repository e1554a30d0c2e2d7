use std::sync::atomic::{AtomicBool, Ordering};

/// Stop flag shared between the Ctrl+C handler and the tap loop.
pub struct ShutdownSignal {
    shutdown: AtomicBool,
}

impl ShutdownSignal {
    /// Create a new shutdown signal in the non-shutdown state.
    pub fn new() -> Self {
        Self {
            shutdown: AtomicBool::new(false),
        }
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        self.shutdown.store(true, Ordering::SeqCst);
    }

    /// Check if shutdown has been triggered.
    pub fn is_shutdown(&self) -> bool {
        self.shutdown.load(Ordering::SeqCst)
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}
