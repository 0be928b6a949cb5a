//! Hand-Built Automaton
//!
//! This example constructs an automaton state by state, shows the errors
//! the builder reports, and saves and reloads it as JSON.
//!
//! Key concepts:
//! - Validated construction through `AutomatonBuilder`
//! - Reachability analysis and trimming
//! - Serialization with every violation reported at once
//!
//! Run with: cargo run --example hand_built

use thompson::prelude::*;

fn build() -> Result<Automaton, ModelError> {
    let mut builder = AutomatonBuilder::with_alphabet(['0', '1']);
    let even = builder.add_next_state()?;
    let odd = builder.add_next_state()?;
    let island = builder.add_next_state()?;

    builder.set_initial(even)?;
    builder.add_accepting(even)?;
    builder.add_transition(even, '0', [even])?;
    builder.add_transition(even, '1', [odd])?;
    builder.add_transition(odd, '0', [odd])?;
    builder.add_transition(odd, '1', [even])?;
    builder.add_transition(island, Symbol::Epsilon, [even])?;

    if let Err(error) = builder.add_transition(even, '2', [odd]) {
        println!("Rejected edge: {error}");
    }
    if let Err(error) = builder.add_state(odd) {
        println!("Rejected state: {error}");
    }

    builder.build()
}

fn main() {
    println!("=== Hand-Built Automaton Example ===\n");

    let automaton = match build() {
        Ok(automaton) => automaton,
        Err(error) => {
            eprintln!("Construction failed: {error}");
            return;
        }
    };

    println!("\nEven number of 1s:\n{automaton}\n");
    for word in ["", "11", "101", "1001"] {
        println!("  {word:?} -> {}", automaton.accepts(word));
    }

    println!("\nUnreachable states: {:?}", automaton.unreachable_states());
    let trimmed = automaton.trimmed();
    println!("After trimming: {} states", trimmed.num_states());

    match serde_json::to_string(&trimmed) {
        Ok(json) => {
            println!("\nJSON: {json}");
            match serde_json::from_str::<Automaton>(&json) {
                Ok(restored) => println!("Reloaded equal: {}", restored == trimmed),
                Err(error) => eprintln!("Reload failed: {error}"),
            }
        }
        Err(error) => eprintln!("Save failed: {error}"),
    }

    let broken = r#"{"states": [0], "initial": 3, "accepting": [4]}"#;
    if let Err(error) = serde_json::from_str::<Automaton>(broken) {
        println!("\nBroken JSON rejected: {error}");
    }

    println!("\n=== Example Complete ===");
}
