//! Build errors for machine declaration.

use thiserror::Error;

/// Errors reported while declaring a machine.
///
/// Every defect is reported at the declaring call, not deferred to
/// `build()`; only the missing-start-state check happens there.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State '{0}' is already declared")]
    DuplicateState(String),

    #[error("Event '{0}' is already declared")]
    DuplicateEvent(String),

    #[error("State '{0}' was not declared. Call .state(name) first")]
    UnknownState(String),

    #[error("Event '{0}' was not declared. Call .event(name) first")]
    UnknownEvent(String),

    #[error("A transition for ('{from}', '{event}') is already declared")]
    DuplicateTransition { from: String, event: String },

    #[error("Transition source state not specified. Call .from(name)")]
    MissingFromState,

    #[error("Transition event not specified. Call .on(name)")]
    MissingEvent,

    #[error("Transition target state not specified. Call .to(name)")]
    MissingToState,

    #[error("Start state not specified. Call .start_state(name) before .build()")]
    MissingStartState,
}
