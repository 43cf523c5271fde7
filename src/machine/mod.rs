//! Machine runtime.
//!
//! A [`Machine`] is a mutable instance driven by a shared, immutable
//! [`Blueprint`]. It is constructed inert, activated with [`Machine::run`],
//! gated with [`Machine::pause`], and driven by firing named events at
//! [`Machine::trigger`]. Failures never panic and never change the
//! current state; they are reported through the boolean return value
//! plus an inspectable last-error slot.

pub mod error;

pub use error::TriggerError;

use crate::blueprint::Blueprint;
use crate::core::{Liveness, StateId, TransitionJournal, TransitionRecord};
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, trace};

/// Lifecycle of the runtime itself, distinct from the declared states.
///
/// A machine starts `Idle`, becomes `Active` on the first `run()`, and
/// moves between `Active` and `Paused` thereafter. The active and
/// paused variants carry the current declared state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Constructed but never run; no current state yet
    Idle,
    /// Running; triggers are evaluated
    Active(StateId),
    /// Suspended; triggers are refused without changing state
    Paused(StateId),
}

/// A running state machine instance.
///
/// # Example
///
/// ```rust
/// use machinist::builder::MachineBuilder;
/// use std::sync::Arc;
///
/// let blueprint = Arc::new(
///     MachineBuilder::new()
///         .state("idle")?
///         .state("running")?
///         .event("start")?
///         .transition("idle", "start", "running")?
///         .start_state("idle")?
///         .build()?,
/// );
///
/// let mut machine = blueprint.machine("demo");
/// machine.run();
/// assert_eq!(machine.current_state(), Some("idle"));
///
/// assert!(machine.trigger("start"));
/// assert_eq!(machine.current_state(), Some("running"));
/// # Ok::<(), machinist::builder::BuildError>(())
/// ```
#[derive(Debug)]
pub struct Machine {
    blueprint: Arc<Blueprint>,
    name: String,
    status: Status,
    last_error: Option<TriggerError>,
    liveness: Option<Liveness>,
    journal: TransitionJournal,
}

impl Machine {
    /// Create an inert instance driven by the given blueprint.
    ///
    /// The machine has no current state and refuses triggers until
    /// [`run`](Self::run) is called.
    pub fn new(blueprint: Arc<Blueprint>, name: impl Into<String>) -> Self {
        Self {
            blueprint,
            name: name.into(),
            status: Status::Idle,
            last_error: None,
            liveness: None,
            journal: TransitionJournal::new(),
        }
    }

    /// Bind the machine to an externally owned entity.
    ///
    /// The probe is polled before every trigger; once it reports the
    /// entity gone, every subsequent trigger fails with
    /// [`TriggerError::EntityDropped`], permanently.
    pub fn bind(&mut self, liveness: Liveness) {
        self.liveness = Some(liveness);
    }

    /// Activate the machine.
    ///
    /// On the first call the machine enters its start state and the
    /// activation hook declared with `start_state_with` fires. Calling
    /// `run` on a paused machine resumes it in place: the pause flag is
    /// cleared, the current state is untouched and no hook fires.
    /// Calling `run` on an already-active machine is a no-op.
    pub fn run(&mut self) {
        match self.status {
            Status::Idle => {
                self.status = Status::Active(self.blueprint.start_state());
                debug!(
                    machine = %self.name,
                    state = self.blueprint.start_state_name(),
                    "machine activated"
                );
                if let Some(hook) = self.blueprint.start_enter_hook() {
                    hook.call();
                }
            }
            Status::Paused(state) => {
                self.status = Status::Active(state);
                debug!(machine = %self.name, "machine resumed");
            }
            Status::Active(_) => {}
        }
    }

    /// Suspend the machine.
    ///
    /// The current state is kept; triggers are refused with
    /// [`TriggerError::EventWhilePaused`] until `run` is called again.
    /// Pausing a machine that was never run is a no-op, since an idle
    /// machine already refuses triggers.
    pub fn pause(&mut self) {
        if let Status::Active(state) = self.status {
            self.status = Status::Paused(state);
            debug!(machine = %self.name, "machine paused");
        }
    }

    /// Submit an event for evaluation against the current state.
    ///
    /// Returns `true` and clears the last-error slot if a transition was
    /// applied. Returns `false` otherwise, leaving the reason in the
    /// slot and the current state untouched. Validation order:
    ///
    /// 1. bound entity gone → [`TriggerError::EntityDropped`]
    /// 2. machine idle or paused → [`TriggerError::EventWhilePaused`]
    /// 3. event never declared → [`TriggerError::UnknownEvent`]
    /// 4. no rule for (current state, event) → [`TriggerError::IllegalTransition`]
    ///
    /// On success the rule's exit hook runs to completion before the
    /// state changes, then the enter hook runs, all within this call.
    pub fn trigger(&mut self, event: &str) -> bool {
        match self.apply(event) {
            Ok(()) => {
                self.last_error = None;
                true
            }
            Err(err) => {
                debug!(machine = %self.name, event, error = %err, "trigger refused");
                self.last_error = Some(err);
                false
            }
        }
    }

    fn apply(&mut self, event_name: &str) -> Result<(), TriggerError> {
        if let Some(liveness) = &self.liveness {
            if !liveness.alive() {
                return Err(TriggerError::EntityDropped);
            }
        }

        let current = match self.status {
            Status::Active(state) => state,
            Status::Idle | Status::Paused(_) => return Err(TriggerError::EventWhilePaused),
        };

        let event = self
            .blueprint
            .event_id(event_name)
            .ok_or_else(|| TriggerError::UnknownEvent(event_name.to_string()))?;

        let rule = self.blueprint.transition(current, event).ok_or_else(|| {
            TriggerError::IllegalTransition {
                state: self.blueprint.state_name(current).to_string(),
                event: event_name.to_string(),
            }
        })?;
        let target = rule.target;
        let on_exit = rule.on_exit.clone();
        let on_enter = rule.on_enter.clone();

        // Exit completes before the state changes; enter runs after.
        if let Some(hook) = &on_exit {
            hook.call();
        }
        self.status = Status::Active(target);
        if let Some(hook) = &on_enter {
            hook.call();
        }

        let from = self.blueprint.state_name(current).to_string();
        let to = self.blueprint.state_name(target).to_string();
        trace!(machine = %self.name, %from, event = event_name, %to, "transition applied");
        self.journal = self.journal.record(TransitionRecord {
            from,
            event: event_name.to_string(),
            to,
            timestamp: Utc::now(),
        });

        Ok(())
    }

    /// Name of the current state, or `None` before the first `run`.
    pub fn current_state(&self) -> Option<&str> {
        match self.status {
            Status::Idle => None,
            Status::Active(state) | Status::Paused(state) => {
                Some(self.blueprint.state_name(state))
            }
        }
    }

    /// Id of the current state, or `None` before the first `run`.
    pub fn current_state_id(&self) -> Option<StateId> {
        match self.status {
            Status::Idle => None,
            Status::Active(state) | Status::Paused(state) => Some(state),
        }
    }

    /// Name of the designated start state.
    pub fn start_state(&self) -> &str {
        self.blueprint.start_state_name()
    }

    /// The machine's label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Relabel the machine.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Runtime lifecycle status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the machine is active (run and not paused).
    pub fn is_active(&self) -> bool {
        matches!(self.status, Status::Active(_))
    }

    /// Whether the machine is refusing triggers due to `pause`.
    pub fn is_paused(&self) -> bool {
        matches!(self.status, Status::Paused(_))
    }

    /// Outcome of the most recent trigger: `None` after a success,
    /// the refusing error after a failure.
    pub fn last_error(&self) -> Option<&TriggerError> {
        self.last_error.as_ref()
    }

    /// Journal of every transition this instance has applied.
    pub fn journal(&self) -> &TransitionJournal {
        &self.journal
    }

    /// The blueprint driving this instance.
    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{MachineBuilder, RuleBuilder};
    use crate::core::Hook;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn workflow() -> Arc<Blueprint> {
        Arc::new(
            MachineBuilder::new()
                .state("idle")
                .unwrap()
                .state("running")
                .unwrap()
                .state("done")
                .unwrap()
                .event("start")
                .unwrap()
                .event("finish")
                .unwrap()
                .transition("idle", "start", "running")
                .unwrap()
                .transition("running", "finish", "done")
                .unwrap()
                .start_state("idle")
                .unwrap()
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn machine_is_inert_until_run() {
        let machine = workflow().machine("m");
        assert_eq!(machine.status(), Status::Idle);
        assert!(machine.current_state().is_none());
        assert!(!machine.is_active());
        assert!(machine.last_error().is_none());
    }

    #[test]
    fn run_enters_the_start_state() {
        let mut machine = workflow().machine("m");
        machine.run();

        assert!(machine.is_active());
        assert_eq!(machine.current_state(), Some("idle"));
        assert_eq!(machine.start_state(), "idle");
    }

    #[test]
    fn run_fires_the_activation_hook_once() {
        let entered = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&entered);

        let blueprint = Arc::new(
            MachineBuilder::new()
                .state("idle")
                .unwrap()
                .event("noop")
                .unwrap()
                .transition("idle", "noop", "idle")
                .unwrap()
                .start_state_with(
                    "idle",
                    Hook::new(move || {
                        counter.fetch_add(1, Ordering::SeqCst);
                    }),
                )
                .unwrap()
                .build()
                .unwrap(),
        );

        let mut machine = blueprint.machine("m");
        machine.run();
        machine.run();
        assert_eq!(entered.load(Ordering::SeqCst), 1);

        machine.pause();
        machine.run();
        assert_eq!(entered.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn run_when_active_is_a_noop() {
        let mut machine = workflow().machine("m");
        machine.run();
        assert!(machine.trigger("start"));

        machine.run();
        assert_eq!(machine.current_state(), Some("running"));
    }

    #[test]
    fn run_resumes_without_reset() {
        let mut machine = workflow().machine("m");
        machine.run();
        assert!(machine.trigger("start"));

        machine.pause();
        assert!(machine.is_paused());
        assert_eq!(machine.current_state(), Some("running"));

        machine.run();
        assert!(machine.is_active());
        assert_eq!(machine.current_state(), Some("running"));
    }

    #[test]
    fn trigger_before_run_reports_paused() {
        let mut machine = workflow().machine("m");

        assert!(!machine.trigger("start"));
        assert_eq!(machine.last_error(), Some(&TriggerError::EventWhilePaused));
        assert!(machine.current_state().is_none());
    }

    #[test]
    fn pause_before_run_keeps_the_machine_idle() {
        let mut machine = workflow().machine("m");
        machine.pause();
        assert_eq!(machine.status(), Status::Idle);

        machine.run();
        assert_eq!(machine.current_state(), Some("idle"));
    }

    #[test]
    fn legal_trigger_moves_and_clears_the_error() {
        let mut machine = workflow().machine("m");
        machine.run();

        assert!(!machine.trigger("finish"));
        assert!(machine.last_error().is_some());

        assert!(machine.trigger("start"));
        assert_eq!(machine.current_state(), Some("running"));
        assert!(machine.last_error().is_none());
    }

    #[test]
    fn illegal_transition_keeps_the_state() {
        let mut machine = workflow().machine("m");
        machine.run();

        assert!(!machine.trigger("finish"));
        assert_eq!(
            machine.last_error(),
            Some(&TriggerError::IllegalTransition {
                state: "idle".to_string(),
                event: "finish".to_string(),
            })
        );
        assert_eq!(machine.current_state(), Some("idle"));
    }

    #[test]
    fn unknown_event_is_distinguished_from_illegal() {
        let mut machine = workflow().machine("m");
        machine.run();

        assert!(!machine.trigger("nope"));
        assert_eq!(
            machine.last_error(),
            Some(&TriggerError::UnknownEvent("nope".to_string()))
        );
        assert_eq!(machine.current_state(), Some("idle"));
    }

    #[test]
    fn paused_machine_refuses_valid_events() {
        let mut machine = workflow().machine("m");
        machine.run();
        machine.pause();

        assert!(!machine.trigger("start"));
        assert_eq!(machine.last_error(), Some(&TriggerError::EventWhilePaused));
        assert_eq!(machine.current_state(), Some("idle"));
    }

    #[test]
    fn dropped_entity_gates_everything() {
        let entity = Arc::new("goblin");
        let mut machine = workflow().machine("m");
        machine.bind(Liveness::watch(&entity));
        machine.run();
        assert!(machine.trigger("start"));

        drop(entity);

        // Valid, invalid and unknown events all fail the same way.
        assert!(!machine.trigger("finish"));
        assert_eq!(machine.last_error(), Some(&TriggerError::EntityDropped));
        assert!(!machine.trigger("nope"));
        assert_eq!(machine.last_error(), Some(&TriggerError::EntityDropped));

        // Pause does not mask the condition.
        machine.pause();
        assert!(!machine.trigger("finish"));
        assert_eq!(machine.last_error(), Some(&TriggerError::EntityDropped));
        assert_eq!(machine.current_state(), Some("running"));
    }

    #[test]
    fn live_entity_does_not_interfere() {
        let entity = Arc::new("goblin");
        let mut machine = workflow().machine("m");
        machine.bind(Liveness::watch(&entity));
        machine.run();

        assert!(machine.trigger("start"));
        assert!(machine.trigger("finish"));
        assert_eq!(machine.current_state(), Some("done"));
    }

    #[test]
    fn exit_runs_before_enter() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let exit_log = Arc::clone(&order);
        let enter_log = Arc::clone(&order);

        let blueprint = Arc::new(
            MachineBuilder::new()
                .state("a")
                .unwrap()
                .state("b")
                .unwrap()
                .event("go")
                .unwrap()
                .rule(
                    RuleBuilder::new()
                        .from("a")
                        .on("go")
                        .to("b")
                        .leaving(Hook::new(move || exit_log.lock().unwrap().push("exit")))
                        .entering(Hook::new(move || enter_log.lock().unwrap().push("enter"))),
                )
                .unwrap()
                .start_state("a")
                .unwrap()
                .build()
                .unwrap(),
        );

        let mut machine = blueprint.machine("m");
        machine.run();
        assert!(machine.trigger("go"));

        assert_eq!(*order.lock().unwrap(), vec!["exit", "enter"]);
    }

    #[test]
    fn hooks_do_not_fire_on_refused_triggers() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);

        let blueprint = Arc::new(
            MachineBuilder::new()
                .state("a")
                .unwrap()
                .state("b")
                .unwrap()
                .event("go")
                .unwrap()
                .event("stay")
                .unwrap()
                .rule(
                    RuleBuilder::new()
                        .from("a")
                        .on("go")
                        .to("b")
                        .entering(Hook::new(move || {
                            counter.fetch_add(1, Ordering::SeqCst);
                        })),
                )
                .unwrap()
                .start_state("a")
                .unwrap()
                .build()
                .unwrap(),
        );

        let mut machine = blueprint.machine("m");
        machine.run();

        assert!(!machine.trigger("stay"));
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        assert!(machine.trigger("go"));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn journal_records_every_applied_transition() {
        let mut machine = workflow().machine("m");
        machine.run();

        machine.trigger("finish"); // refused, not recorded
        machine.trigger("start");
        machine.trigger("finish");

        let journal = machine.journal();
        assert_eq!(journal.len(), 2);
        assert_eq!(journal.path(), vec!["idle", "running", "done"]);
        assert_eq!(journal.records()[0].event, "start");
        assert_eq!(journal.records()[1].event, "finish");
    }

    #[test]
    fn machine_can_be_renamed() {
        let mut machine = workflow().machine("before");
        assert_eq!(machine.name(), "before");
        machine.set_name("after");
        assert_eq!(machine.name(), "after");
    }
}
