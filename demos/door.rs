//! Door State Machine
//!
//! This example demonstrates a small machine with hooks attached to
//! its transitions.
//!
//! Key concepts:
//! - Declarative state/event/transition setup
//! - Exit and enter hooks firing synchronously
//! - Refused triggers reported through the last-error slot
//!
//! Run with: cargo run --example door

use machinist::builder::{MachineBuilder, RuleBuilder};
use machinist::core::Hook;
use std::sync::Arc;

fn main() -> Result<(), machinist::BuildError> {
    println!("=== Door State Machine ===\n");

    let blueprint = Arc::new(
        MachineBuilder::new()
            .state("closed")?
            .state("open")?
            .state("locked")?
            .event("push")?
            .event("pull")?
            .event("lock")?
            .event("unlock")?
            .rule(
                RuleBuilder::new()
                    .from("closed")
                    .on("push")
                    .to("open")
                    .entering(Hook::new(|| println!("  * creak: the door swings open"))),
            )?
            .rule(
                RuleBuilder::new()
                    .from("open")
                    .on("pull")
                    .to("closed")
                    .entering(Hook::new(|| println!("  * thud: the door shuts"))),
            )?
            .transition("closed", "lock", "locked")?
            .transition("locked", "unlock", "closed")?
            .start_state("closed")?
            .build()?,
    );

    let mut door = blueprint.machine("front-door");
    door.run();
    println!("Door starts {}\n", door.current_state().unwrap_or("?"));

    for event in ["push", "pull", "lock", "push", "unlock", "push"] {
        if door.trigger(event) {
            println!(
                "'{}' accepted -> now {}",
                event,
                door.current_state().unwrap_or("?")
            );
        } else {
            println!(
                "'{}' refused: {} (still {})",
                event,
                door.last_error().map(|e| e.to_string()).unwrap_or_default(),
                door.current_state().unwrap_or("?")
            );
        }
    }

    println!("\nJournal path: {:?}", door.journal().path());
    println!("\n=== Example Complete ===");
    Ok(())
}
