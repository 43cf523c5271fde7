//! Machinist: a declarative finite state machine engine
//!
//! Machinist drives the behavior of game entities (or any event-reactive
//! object) from a declaratively built transition table. A machine is
//! described once — named states, named events, the transitions between
//! them — compiled into an immutable [`Blueprint`], then driven at
//! runtime by firing events and observing state changes.
//!
//! # Core Concepts
//!
//! - **Blueprint**: the compiled, validated machine description; one
//!   blueprint can drive many instances
//! - **Machine**: a runtime instance with a current state, a pause
//!   flag and a last-error slot
//! - **Hooks**: synchronous callbacks fired on transition exit/enter
//! - **Liveness**: a weak binding to an externally owned entity; the
//!   machine refuses triggers once the entity is gone
//!
//! Triggers never panic and never throw: `trigger` returns `bool` and
//! a refused trigger leaves its reason in [`Machine::last_error`],
//! with the current state untouched.
//!
//! # Example
//!
//! ```rust
//! use machinist::builder::MachineBuilder;
//! use machinist::machine::TriggerError;
//! use std::sync::Arc;
//!
//! let blueprint = Arc::new(
//!     MachineBuilder::new()
//!         .state("idle")?
//!         .state("running")?
//!         .state("done")?
//!         .event("start")?
//!         .event("finish")?
//!         .transition("idle", "start", "running")?
//!         .transition("running", "finish", "done")?
//!         .start_state("idle")?
//!         .build()?,
//! );
//!
//! let mut machine = blueprint.machine("worker");
//! machine.run();
//!
//! assert!(!machine.trigger("finish"));
//! assert!(matches!(
//!     machine.last_error(),
//!     Some(TriggerError::IllegalTransition { .. })
//! ));
//!
//! assert!(machine.trigger("start"));
//! assert!(machine.trigger("finish"));
//! assert_eq!(machine.current_state(), Some("done"));
//! # Ok::<(), machinist::builder::BuildError>(())
//! ```

pub mod blueprint;
pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use blueprint::{Blueprint, Transition};
pub use builder::{BuildError, MachineBuilder, RuleBuilder};
pub use core::{EventId, Hook, Liveness, StateId, TransitionJournal, TransitionRecord};
pub use machine::{Machine, Status, TriggerError};
