//! Sentry AI State Machine
//!
//! This example demonstrates binding a machine to an externally owned
//! game entity and the pause/resume flow a host game loop would use.
//!
//! Key concepts:
//! - One blueprint driving an entity's behavior
//! - Weak entity binding via a liveness probe
//! - Pause gating and the permanent dropped-entity condition
//!
//! Run with: cargo run --example sentry

use machinist::builder::MachineBuilder;
use machinist::core::Liveness;
use std::sync::Arc;

struct Sentry {
    callsign: &'static str,
}

fn main() -> Result<(), machinist::BuildError> {
    println!("=== Sentry AI State Machine ===\n");

    let blueprint = Arc::new(
        MachineBuilder::new()
            .state("guarding")?
            .state("chasing")?
            .state("searching")?
            .event("spotted")?
            .event("lost")?
            .event("give_up")?
            .transition("guarding", "spotted", "chasing")?
            .transition("chasing", "lost", "searching")?
            .transition("searching", "spotted", "chasing")?
            .transition("searching", "give_up", "guarding")?
            .start_state("guarding")?
            .build()?,
    );

    let sentry = Arc::new(Sentry { callsign: "S-01" });
    println!("Spawned sentry {}", sentry.callsign);

    let mut brain = blueprint.machine("sentry-brain");
    brain.bind(Liveness::watch(&sentry));
    brain.run();
    println!("Brain active in state '{}'\n", brain.current_state().unwrap_or("?"));

    for event in ["spotted", "lost", "spotted"] {
        brain.trigger(event);
        println!("'{}' -> {}", event, brain.current_state().unwrap_or("?"));
    }

    println!("\nGame paused...");
    brain.pause();
    if !brain.trigger("lost") {
        println!(
            "'lost' refused while paused: {}",
            brain.last_error().map(|e| e.to_string()).unwrap_or_default()
        );
    }
    brain.run();
    println!("Resumed in state '{}'", brain.current_state().unwrap_or("?"));

    println!("\nSentry destroyed!");
    drop(sentry);
    if !brain.trigger("lost") {
        println!(
            "'lost' refused: {}",
            brain.last_error().map(|e| e.to_string()).unwrap_or_default()
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
