//! Builder API for declaring machines.
//!
//! The builder accumulates state names, event names, transition rules
//! and the start state, validating each declaration as it is made, then
//! compiles everything into an immutable [`Blueprint`]. Misconfiguration
//! surfaces at the declaring call rather than at first trigger.

pub mod error;
pub mod rule;

pub use error::BuildError;
pub use rule::RuleBuilder;

use crate::blueprint::{Blueprint, Transition};
use crate::core::{EventId, Hook, StateId};
use std::collections::HashMap;

/// Fluent accumulator for a machine declaration.
///
/// Declaration methods consume and return the builder so declarations
/// chain with `?`. The builder is single-use: `build()` finalizes it and
/// the resulting blueprint shares no mutable state with it.
///
/// # Example
///
/// ```rust
/// use machinist::builder::MachineBuilder;
///
/// let blueprint = MachineBuilder::new()
///     .state("idle")?
///     .state("running")?
///     .state("done")?
///     .event("start")?
///     .event("finish")?
///     .transition("idle", "start", "running")?
///     .transition("running", "finish", "done")?
///     .start_state("idle")?
///     .build()?;
///
/// assert_eq!(blueprint.transition_count(), 2);
/// # Ok::<(), machinist::builder::BuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct MachineBuilder {
    states: Vec<String>,
    events: Vec<String>,
    state_ids: HashMap<String, StateId>,
    event_ids: HashMap<String, EventId>,
    transitions: HashMap<(StateId, EventId), Transition>,
    start: Option<StateId>,
    start_enter: Option<Hook>,
}

impl MachineBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state name.
    ///
    /// Fails with [`BuildError::DuplicateState`] if the name was already
    /// declared.
    pub fn state(mut self, name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        if self.state_ids.contains_key(&name) {
            return Err(BuildError::DuplicateState(name));
        }
        let id = StateId::new(self.states.len() as u32);
        self.state_ids.insert(name.clone(), id);
        self.states.push(name);
        Ok(self)
    }

    /// Declare an event name.
    ///
    /// Fails with [`BuildError::DuplicateEvent`] if the name was already
    /// declared.
    pub fn event(mut self, name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        if self.event_ids.contains_key(&name) {
            return Err(BuildError::DuplicateEvent(name));
        }
        let id = EventId::new(self.events.len() as u32);
        self.event_ids.insert(name.clone(), id);
        self.events.push(name);
        Ok(self)
    }

    /// Declare a hook-less transition rule.
    ///
    /// Fails with [`BuildError::UnknownState`] / [`BuildError::UnknownEvent`]
    /// for undeclared names, or [`BuildError::DuplicateTransition`] if a
    /// rule for `(from, event)` already exists.
    pub fn transition(
        self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Result<Self, BuildError> {
        self.rule(RuleBuilder::new().from(from).on(event).to(to))
    }

    /// Declare a transition rule with optional exit/enter hooks.
    pub fn rule(mut self, rule: RuleBuilder) -> Result<Self, BuildError> {
        let rule = rule.finish()?;

        let from = self.resolve_state(&rule.from)?;
        let event = self.resolve_event(&rule.event)?;
        let target = self.resolve_state(&rule.to)?;

        if self.transitions.contains_key(&(from, event)) {
            return Err(BuildError::DuplicateTransition {
                from: rule.from,
                event: rule.event,
            });
        }

        self.transitions.insert(
            (from, event),
            Transition {
                target,
                on_exit: rule.on_exit,
                on_enter: rule.on_enter,
            },
        );
        Ok(self)
    }

    /// Designate the start state.
    ///
    /// Fails with [`BuildError::UnknownState`] if undeclared.
    pub fn start_state(mut self, name: impl Into<String>) -> Result<Self, BuildError> {
        let name = name.into();
        self.start = Some(self.resolve_state(&name)?);
        Ok(self)
    }

    /// Designate the start state with a hook fired on first activation.
    pub fn start_state_with(
        mut self,
        name: impl Into<String>,
        enter: Hook,
    ) -> Result<Self, BuildError> {
        self = self.start_state(name)?;
        self.start_enter = Some(enter);
        Ok(self)
    }

    /// Compile the declaration into an immutable blueprint.
    ///
    /// Fails with [`BuildError::MissingStartState`] if no start state
    /// was designated; all other defects were already reported at their
    /// declaring call.
    pub fn build(self) -> Result<Blueprint, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        Ok(Blueprint::new(
            self.states,
            self.events,
            self.state_ids,
            self.event_ids,
            self.transitions,
            start,
            self.start_enter,
        ))
    }

    fn resolve_state(&self, name: &str) -> Result<StateId, BuildError> {
        self.state_ids
            .get(name)
            .copied()
            .ok_or_else(|| BuildError::UnknownState(name.to_string()))
    }

    fn resolve_event(&self, name: &str) -> Result<EventId, BuildError> {
        self.event_ids
            .get(name)
            .copied()
            .ok_or_else(|| BuildError::UnknownEvent(name.to_string()))
    }
}
