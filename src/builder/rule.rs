//! Builder for a single transition rule.

use crate::builder::error::BuildError;
use crate::core::Hook;

/// Fluent builder for one transition rule with optional hooks.
///
/// Names are resolved and validated when the rule is handed to
/// [`MachineBuilder::rule`](crate::builder::MachineBuilder::rule).
///
/// # Example
///
/// ```rust
/// use machinist::builder::{MachineBuilder, RuleBuilder};
/// use machinist::core::Hook;
///
/// let blueprint = MachineBuilder::new()
///     .state("closed")?
///     .state("open")?
///     .event("push")?
///     .rule(
///         RuleBuilder::new()
///             .from("closed")
///             .on("push")
///             .to("open")
///             .entering(Hook::new(|| println!("creak"))),
///     )?
///     .start_state("closed")?
///     .build()?;
/// # let _ = blueprint;
/// # Ok::<(), machinist::builder::BuildError>(())
/// ```
#[derive(Debug, Default)]
pub struct RuleBuilder {
    from: Option<String>,
    event: Option<String>,
    to: Option<String>,
    on_exit: Option<Hook>,
    on_enter: Option<Hook>,
}

/// A fully specified rule, names still unresolved.
#[derive(Debug)]
pub(crate) struct Rule {
    pub(crate) from: String,
    pub(crate) event: String,
    pub(crate) to: String,
    pub(crate) on_exit: Option<Hook>,
    pub(crate) on_enter: Option<Hook>,
}

impl RuleBuilder {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<String>) -> Self {
        self.from = Some(state.into());
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<String>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Attach a hook fired when leaving the source state (optional).
    pub fn leaving(mut self, hook: Hook) -> Self {
        self.on_exit = Some(hook);
        self
    }

    /// Attach a hook fired when entering the target state (optional).
    pub fn entering(mut self, hook: Hook) -> Self {
        self.on_enter = Some(hook);
        self
    }

    pub(crate) fn finish(self) -> Result<Rule, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        Ok(Rule {
            from,
            event,
            to,
            on_exit: self.on_exit,
            on_enter: self.on_enter,
        })
    }
}
