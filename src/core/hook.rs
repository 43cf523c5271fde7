//! Action hooks fired when transitions are taken.
//!
//! A hook is an opaque, synchronous callback attached to a transition's
//! exit or enter edge (or to first activation of the machine). Hooks run
//! to completion inside `trigger` — there is no deferral and no
//! suspension point.

use std::fmt;
use std::sync::Arc;

/// Synchronous action invoked when a transition is taken.
///
/// Hooks carry no arguments; anything they need must be explicitly
/// closed over by the caller. They are cheaply cloneable so a single
/// compiled blueprint can be shared by many machine instances.
///
/// # Example
///
/// ```rust
/// use machinist::core::Hook;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
///
/// let opened = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&opened);
/// let hook = Hook::new(move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// hook.call();
/// hook.call();
/// assert_eq!(opened.load(Ordering::SeqCst), 2);
/// ```
#[derive(Clone)]
pub struct Hook {
    action: Arc<dyn Fn() + Send + Sync>,
}

impl Hook {
    /// Create a hook from a callback.
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            action: Arc::new(action),
        }
    }

    /// Invoke the hook synchronously.
    pub fn call(&self) {
        (self.action)()
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook")
    }
}
