//! The `strategies` subcommand: list the built-in weighting strategies.

use valueng_core::types::Strategy;

/// Print the built-in strategies and their weight vectors.
pub fn execute() -> anyhow::Result<()> {
    println!("{:<16} {:>10} {:>8} {:>6}", "strategy", "functional", "design", "cost");
    for strategy in Strategy::builtin() {
        println!(
            "{:<16} {:>10.3} {:>8.3} {:>6.3}",
            strategy.name,
            strategy.weights.functional,
            strategy.weights.design,
            strategy.weights.cost
        );
    }
    Ok(())
}
