//! Compiled machine blueprints.
//!
//! A blueprint is the immutable output of the builder: the closed sets
//! of states and events, the partial transition function keyed by
//! `(state, event)`, and the designated start state. One blueprint can
//! drive any number of machine instances; wrap it in an `Arc` and hand
//! it to each.

use crate::core::{EventId, Hook, StateId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::machine::Machine;

/// A single compiled transition rule.
///
/// Keyed externally by `(source, event)`; at most one rule exists per
/// key, so the transition relation is a partial function.
#[derive(Clone, Debug)]
pub struct Transition {
    /// State the machine moves to when the rule fires
    pub target: StateId,
    /// Hook fired when leaving the source state
    pub on_exit: Option<Hook>,
    /// Hook fired when entering the target state
    pub on_enter: Option<Hook>,
}

/// Immutable, validated machine description.
///
/// Every name was resolved and checked while the blueprint was being
/// declared; lookups here never fail for ids the blueprint issued.
///
/// # Example
///
/// ```rust
/// use machinist::builder::MachineBuilder;
///
/// let blueprint = MachineBuilder::new()
///     .state("closed")?
///     .state("open")?
///     .event("push")?
///     .transition("closed", "push", "open")?
///     .start_state("closed")?
///     .build()?;
///
/// assert_eq!(blueprint.states(), ["closed", "open"]);
/// assert_eq!(blueprint.start_state_name(), "closed");
/// # Ok::<(), machinist::builder::BuildError>(())
/// ```
#[derive(Debug)]
pub struct Blueprint {
    states: Vec<String>,
    events: Vec<String>,
    state_ids: HashMap<String, StateId>,
    event_ids: HashMap<String, EventId>,
    transitions: HashMap<(StateId, EventId), Transition>,
    start: StateId,
    start_enter: Option<Hook>,
}

impl Blueprint {
    pub(crate) fn new(
        states: Vec<String>,
        events: Vec<String>,
        state_ids: HashMap<String, StateId>,
        event_ids: HashMap<String, EventId>,
        transitions: HashMap<(StateId, EventId), Transition>,
        start: StateId,
        start_enter: Option<Hook>,
    ) -> Self {
        Self {
            states,
            events,
            state_ids,
            event_ids,
            transitions,
            start,
            start_enter,
        }
    }

    /// Declared state names, in declaration order.
    pub fn states(&self) -> &[String] {
        &self.states
    }

    /// Declared event names, in declaration order.
    pub fn events(&self) -> &[String] {
        &self.events
    }

    /// Resolve a state name to its id.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.state_ids.get(name).copied()
    }

    /// Resolve an event name to its id.
    pub fn event_id(&self, name: &str) -> Option<EventId> {
        self.event_ids.get(name).copied()
    }

    /// The name behind a state id issued by this blueprint.
    pub fn state_name(&self, id: StateId) -> &str {
        &self.states[id.index()]
    }

    /// The name behind an event id issued by this blueprint.
    pub fn event_name(&self, id: EventId) -> &str {
        &self.events[id.index()]
    }

    /// The designated start state.
    pub fn start_state(&self) -> StateId {
        self.start
    }

    /// Name of the designated start state.
    pub fn start_state_name(&self) -> &str {
        self.state_name(self.start)
    }

    /// Hook fired when a machine first activates, if one was declared.
    pub fn start_enter_hook(&self) -> Option<&Hook> {
        self.start_enter.as_ref()
    }

    /// Look up the rule for `(state, event)`, if one was declared.
    pub fn transition(&self, state: StateId, event: EventId) -> Option<&Transition> {
        self.transitions.get(&(state, event))
    }

    /// Number of declared transition rules.
    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Create a machine instance driven by this blueprint.
    ///
    /// The instance starts inert: no current state, paused, no error.
    /// Call [`Machine::run`] to activate it. Clone the `Arc` to spawn
    /// several instances from one blueprint.
    pub fn machine(self: Arc<Self>, name: impl Into<String>) -> Machine {
        Machine::new(self, name)
    }

    /// Create a machine instance with a generated name.
    pub fn anonymous_machine(self: Arc<Self>) -> Machine {
        let name = format!("machine-{}", uuid::Uuid::new_v4());
        self.machine(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::MachineBuilder;

    fn door() -> Blueprint {
        MachineBuilder::new()
            .state("closed")
            .unwrap()
            .state("open")
            .unwrap()
            .event("push")
            .unwrap()
            .event("pull")
            .unwrap()
            .transition("closed", "push", "open")
            .unwrap()
            .transition("open", "pull", "closed")
            .unwrap()
            .start_state("closed")
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn names_resolve_to_stable_ids() {
        let blueprint = door();

        let closed = blueprint.state_id("closed").unwrap();
        let open = blueprint.state_id("open").unwrap();
        assert_ne!(closed, open);
        assert_eq!(blueprint.state_name(closed), "closed");
        assert_eq!(blueprint.state_name(open), "open");

        let push = blueprint.event_id("push").unwrap();
        assert_eq!(blueprint.event_name(push), "push");
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        let blueprint = door();
        assert!(blueprint.state_id("ajar").is_none());
        assert!(blueprint.event_id("kick").is_none());
    }

    #[test]
    fn transition_lookup_is_a_partial_function() {
        let blueprint = door();
        let closed = blueprint.state_id("closed").unwrap();
        let open = blueprint.state_id("open").unwrap();
        let push = blueprint.event_id("push").unwrap();
        let pull = blueprint.event_id("pull").unwrap();

        let rule = blueprint.transition(closed, push).unwrap();
        assert_eq!(rule.target, open);

        // Declared event, but no rule from this state.
        assert!(blueprint.transition(closed, pull).is_none());
        assert!(blueprint.transition(open, push).is_none());
    }

    #[test]
    fn start_state_is_exposed() {
        let blueprint = door();
        assert_eq!(blueprint.start_state_name(), "closed");
        assert_eq!(blueprint.start_state(), blueprint.state_id("closed").unwrap());
    }

    #[test]
    fn one_blueprint_drives_many_machines() {
        let blueprint = Arc::new(door());

        let mut front = Arc::clone(&blueprint).machine("front-door");
        let mut back = Arc::clone(&blueprint).machine("back-door");
        front.run();
        back.run();

        assert!(front.trigger("push"));
        assert_eq!(front.current_state(), Some("open"));
        assert_eq!(back.current_state(), Some("closed"));
    }

    #[test]
    fn anonymous_machines_get_distinct_names() {
        let blueprint = Arc::new(door());
        let a = Arc::clone(&blueprint).anonymous_machine();
        let b = Arc::clone(&blueprint).anonymous_machine();

        assert_ne!(a.name(), b.name());
        assert!(a.name().starts_with("machine-"));
    }
}
