//! Regex Trace
//!
//! This example builds `(a|b)*abb` from single-symbol automata and walks
//! through a word one character at a time.
//!
//! Key concepts:
//! - Thompson combinators over immutable automata
//! - Lazy traces of the active state set
//! - Precomputed closures for repeated queries
//!
//! Run with: RUST_LOG=debug cargo run --example regex_trace

use thompson::combinators::{concat_all, star, union};
use thompson::prelude::*;

fn main() {
    env_logger::init();

    println!("=== Regex Trace Example ===\n");

    let a = Automaton::symbol('a');
    let b = Automaton::symbol('b');
    let expr = concat_all([&star(&union(&a, &b)), &a, &b, &b]);

    println!("(a|b)*abb has {} states", expr.num_states());
    println!("{expr}\n");

    let word = "babb";
    println!("Tracing {word:?}:");
    for step in expr.trace(word) {
        let consumed = step
            .consumed
            .map_or_else(|| "start".to_string(), |c| format!("read {c}"));
        let marker = if step.accepting { " (accepting)" } else { "" };
        println!(
            "  {consumed:<7} active {:?}, rest {:?}{marker}",
            step.active, step.remaining
        );
    }

    println!("\nMembership with a closure table:");
    let table = expr.closure_table();
    for word in ["abb", "aabb", "abab", "", "bbbabb"] {
        println!("  {word:?} -> {}", table.accepts(word));
    }

    println!("\n=== Example Complete ===");
}
