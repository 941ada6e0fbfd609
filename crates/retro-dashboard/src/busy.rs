//! Scoped busy flag.
//!
//! [`BusyFlag::acquire`] sets the flag and returns a guard that clears it on
//! drop, so the flag is released on success, on error and when the owning
//! future is dropped mid-flight.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug, Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the flag until the returned guard is dropped.
    #[must_use = "the flag is released as soon as the guard is dropped"]
    pub fn acquire(&self) -> BusyGuard {
        self.0.store(true, Ordering::SeqCst);
        BusyGuard(Arc::clone(&self.0))
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_releases_on_drop() {
        let flag = BusyFlag::new();
        {
            let _guard = flag.acquire();
            assert!(flag.is_busy());
        }
        assert!(!flag.is_busy());
    }

    #[test]
    fn clones_observe_the_same_flag() {
        let flag = BusyFlag::new();
        let observer = flag.clone();
        let guard = flag.acquire();
        assert!(observer.is_busy());
        drop(guard);
        assert!(!observer.is_busy());
    }
}
