//! Busy flag shared between overlapping flow invocations.
//!
//! `is_busy` is `count > 1`, so a single in-flight operation does not report
//! busy; only two or more overlapping ones do. `decrement` is a no-op while
//! `count <= 1`, which also means the count never drops back to zero once
//! anything has been tracked.

use std::sync::Arc;

use parking_lot::Mutex;
use scopeguard::ScopeGuard;
use tokio::sync::watch;

const BUSY_THRESHOLD: usize = 1;

/// Reentrant in-flight counter publishing a busy flag.
///
/// Clones share the same counter, so a guard handed to several flows sees
/// their combined overlap.
#[derive(Clone)]
pub struct LoadingGuard {
    inner: Arc<Inner>,
}

struct Inner {
    count: Mutex<usize>,
    busy: watch::Sender<bool>,
}

impl LoadingGuard {
    pub fn new() -> Self {
        let (busy, _) = watch::channel(false);
        Self {
            inner: Arc::new(Inner {
                count: Mutex::new(0),
                busy,
            }),
        }
    }

    pub fn increment(&self) {
        let mut count = self.inner.count.lock();
        *count += 1;
        self.publish(*count);
    }

    pub fn decrement(&self) {
        let mut count = self.inner.count.lock();
        if *count <= BUSY_THRESHOLD {
            return;
        }
        *count -= 1;
        self.publish(*count);
    }

    pub fn count(&self) -> usize {
        *self.inner.count.lock()
    }

    pub fn is_busy(&self) -> bool {
        *self.inner.busy.borrow()
    }

    /// Watch the busy flag, e.g. to disable a submit control.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.busy.subscribe()
    }

    /// Increment now and decrement when the returned guard drops.
    pub fn track(&self) -> ScopeGuard<&Self, fn(&Self)> {
        self.increment();
        scopeguard::guard(self, Self::decrement as fn(&Self))
    }

    fn publish(&self, count: usize) {
        let busy = count > BUSY_THRESHOLD;
        self.inner.busy.send_if_modified(|current| {
            if *current == busy {
                false
            } else {
                *current = busy;
                true
            }
        });
    }
}

impl Default for LoadingGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LoadingGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadingGuard")
            .field("count", &self.count())
            .field("busy", &self.is_busy())
            .finish()
    }
}
