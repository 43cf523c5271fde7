//! Core value types of the engine.
//!
//! This module contains the leaf types everything else is built from:
//! - Interned `StateId` / `EventId` identifiers
//! - `Hook` action capabilities fired on transitions
//! - `Liveness` probes for externally owned bound entities
//! - The immutable `TransitionJournal`

mod hook;
mod ids;
mod journal;
mod liveness;

pub use hook::Hook;
pub use ids::{EventId, StateId};
pub use journal::{TransitionJournal, TransitionRecord};
pub use liveness::Liveness;
