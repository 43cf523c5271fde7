//! Interned identifiers for states and events.
//!
//! Names are resolved exactly once, while a machine is being declared.
//! Everything after that — transition lookup, journal recording, the
//! runtime's current-state slot — works on these compact ids, so a
//! trigger never walks a string table.

use serde::{Deserialize, Serialize};

/// Identifier of a declared state within one blueprint's namespace.
///
/// Ids are indices into the blueprint's state table and are only
/// meaningful for the blueprint that issued them.
///
/// # Example
///
/// ```rust
/// use machinist::core::StateId;
///
/// let id = StateId::new(0);
/// assert_eq!(id.index(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct StateId(u32);

impl StateId {
    /// Create a state id from a raw table index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index into the blueprint's state table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a declared event within one blueprint's namespace.
///
/// Events are global to the machine: an event id is valid in any state,
/// whether or not a transition is defined for it there.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct EventId(u32);

impl EventId {
    /// Create an event id from a raw table index.
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index into the blueprint's event table.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
