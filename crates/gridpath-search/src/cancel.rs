use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation, polled by the search once per expansion.
pub trait CancelCheck {
    fn is_cancelled(&self) -> bool;
}

/// A check that never fires.
#[derive(Copy, Clone, Debug, Default)]
pub struct Never;

impl CancelCheck for Never {
    #[inline]
    fn is_cancelled(&self) -> bool {
        false
    }
}

impl<F: Fn() -> bool> CancelCheck for F {
    #[inline]
    fn is_cancelled(&self) -> bool {
        self()
    }
}

/// A cancellation flag backed by an [`AtomicBool`].
///
/// Clones share the flag, so one clone can be handed to whatever notices
/// the "stop" request (a key handler, another thread) while the search
/// polls another.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }

    /// Re-arm the token for the next run.
    #[inline]
    pub fn reset(&self) {
        self.done.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }
}

impl CancelCheck for CancelToken {
    #[inline]
    fn is_cancelled(&self) -> bool {
        CancelToken::is_cancelled(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_flag() {
        let a = CancelToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
        b.reset();
        assert!(!a.is_cancelled());
    }

    #[test]
    fn closures_and_never() {
        assert!(!Never.is_cancelled());
        let always = || true;
        assert!(CancelCheck::is_cancelled(&always));
    }
}
