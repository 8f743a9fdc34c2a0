//! A cloneable cancellation flag shared with the Ctrl+C handler.
//!
//! The walker never looks at it. The listing visitor checks it for every file
//! and fails with `Error::Interrupted`, which is what actually stops the walk.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Thread-safe flag signalling that the current operation should stop.
///
/// # Examples
///
/// ```
/// use ignorewalk::CancellationToken;
///
/// let token = CancellationToken::new();
/// let handler_side = token.clone();
/// assert!(!token.is_cancelled());
///
/// handler_side.cancel();
/// assert!(token.is_cancelled());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a token in the non-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks this token and all its clones as cancelled.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_cancel_from_other_thread() {
        let token = CancellationToken::new();
        let clone = token.clone();
        thread::spawn(move || clone.cancel())
            .join()
            .expect("cancel thread panicked");
        assert!(token.is_cancelled());
    }
}
