//! Runtime trigger errors.

use thiserror::Error;

/// Closed set of reasons a trigger can be refused.
///
/// A refused trigger returns `false` and leaves this value in the
/// machine's last-error slot; the machine's current state is never
/// touched by a failure. The slot is cleared on every successful
/// trigger, so it always reflects the most recent call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TriggerError {
    #[error("Event '{0}' is not declared for this machine")]
    UnknownEvent(String),

    #[error("No transition for event '{event}' from state '{state}'")]
    IllegalTransition { state: String, event: String },

    #[error("The bound entity no longer exists")]
    EntityDropped,

    #[error("Event received while the machine is paused")]
    EventWhilePaused,
}
