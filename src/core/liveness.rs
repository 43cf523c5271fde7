//! Liveness probes for entities the machine is bound to.
//!
//! A machine can be bound to an externally owned entity — typically the
//! game object whose behavior it drives. The machine never owns or
//! extends the life of that entity; it only polls a liveness probe
//! before acting on a trigger, and refuses all transitions once the
//! entity is gone.

use std::sync::Arc;

/// Validity query for an externally owned entity.
///
/// The probe is evaluated before every trigger. It must be cheap and
/// must never resurrect the entity; `watch` keeps only a `Weak`
/// reference for exactly that reason.
///
/// # Example
///
/// ```rust
/// use machinist::core::Liveness;
/// use std::sync::Arc;
///
/// let entity = Arc::new("player");
/// let liveness = Liveness::watch(&entity);
///
/// assert!(liveness.alive());
/// drop(entity);
/// assert!(!liveness.alive());
/// ```
#[derive(Clone)]
pub struct Liveness {
    probe: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl Liveness {
    /// Create a probe from an arbitrary validity query.
    ///
    /// Use this when liveness is not expressible as an `Arc` count,
    /// for example a handle-validity check against a slot map.
    pub fn probe<F>(query: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            probe: Arc::new(query),
        }
    }

    /// Observe a shared entity without extending its lifetime.
    ///
    /// Downgrades to a `Weak` reference; the entity is considered alive
    /// while at least one strong reference remains.
    pub fn watch<T: Send + Sync + 'static>(owner: &Arc<T>) -> Self {
        let weak = Arc::downgrade(owner);
        Self::probe(move || weak.strong_count() > 0)
    }

    /// Check whether the bound entity still exists.
    pub fn alive(&self) -> bool {
        (self.probe)()
    }
}

impl std::fmt::Debug for Liveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Liveness")
            .field("alive", &self.alive())
            .finish()
    }
}
